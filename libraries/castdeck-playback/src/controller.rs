//! Playback controller - the receiver's state machine
//!
//! Owns the catalog and the current album/track selection, decides what plays
//! next, and reacts to sink events. All mutation happens through `&mut self`
//! inside a single event turn; nothing here blocks or awaits the sink.

use crate::{
    error::{PlaybackError, Result},
    events::{ListenerId, Listeners, Notification},
    session::{MediaInfo, MediaMetadata, NullSessionHost, SessionHost},
    sink::{AudioSink, SinkEvent},
    telemetry::{NullTelemetry, Telemetry, TelemetryAction, TelemetryEvent},
    time::PlaybackClock,
    types::{PlayOutcome, PlaybackConfig, PlaybackState, PlaybackStatus, Selection},
};
use castdeck_core::{
    Album, AlbumKey, Catalog, CoreError, Registration, Track, EMPTY_ALBUM, NULL_TRACK,
};
use tracing::{debug, error, info, warn};

/// Where the skip/wrap walk landed
enum Resolution {
    Track {
        index: usize,
        locator: String,
        wrapped: bool,
        skipped: bool,
    },
    EndOfAlbum,
}

/// Central playback control
///
/// Holds:
/// - the album catalog for this session
/// - the current album (by catalog key) and track index
/// - elapsed/total seconds reported by the sink
/// - the loop flag
///
/// and drives the audio sink, the session host, and telemetry.
pub struct PlaybackController {
    state: PlaybackState,
    catalog: Catalog,
    current_album: Option<AlbumKey>,
    track_index: Option<usize>,
    clock: PlaybackClock,

    // Settings
    loop_enabled: bool,
    telemetry_enabled: bool,

    // Collaborators
    sink: Box<dyn AudioSink>,
    host: Box<dyn SessionHost>,
    telemetry: Box<dyn Telemetry>,

    listeners: Listeners,
}

impl PlaybackController {
    /// Create a controller driving `sink`, with no session host and no
    /// telemetry attached
    pub fn new(config: PlaybackConfig, sink: Box<dyn AudioSink>) -> Self {
        Self {
            state: PlaybackState::Stopped,
            catalog: Catalog::new(),
            current_album: None,
            track_index: None,
            clock: PlaybackClock::default(),
            loop_enabled: config.loop_enabled,
            telemetry_enabled: config.telemetry_enabled,
            sink,
            host: Box::new(NullSessionHost),
            telemetry: Box::new(NullTelemetry),
            listeners: Listeners::new(),
        }
    }

    pub fn set_session_host(&mut self, host: Box<dyn SessionHost>) {
        self.host = host;
    }

    pub fn set_telemetry(&mut self, telemetry: Box<dyn Telemetry>) {
        self.telemetry = telemetry;
    }

    // ===== Catalog =====

    /// Insert or replace the catalog entry for `album`
    pub fn register_album(&mut self, album: Album) -> Registration {
        let key = album.key().clone();
        let registration = self.catalog.register(album);
        info!(album = %key, ?registration, "Album registered");
        registration
    }

    /// Parse a raw album blob and register it
    ///
    /// A JSON `null` blob carries no identity and is rejected.
    pub fn register_album_json(&mut self, json: &str) -> Result<Registration> {
        let album = Album::from_json(json)?;
        if album.is_empty() {
            return Err(CoreError::invalid_input("album data is null").into());
        }
        Ok(self.register_album(album))
    }

    pub fn lookup_album(&self, band_id: &str, album_id: &str) -> Option<&Album> {
        self.catalog.lookup(band_id, album_id)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Make the catalog entry for `(band_id, album_id)` current.
    ///
    /// A miss leaves the current album in place.
    pub fn select_album(&mut self, band_id: &str, album_id: &str) -> Selection {
        let current = self.album();
        if !current.is_empty() && current.is_same_album(band_id, album_id) {
            return Selection::Unchanged;
        }

        let key = AlbumKey::new(band_id, album_id);
        if self.catalog.contains(&key) {
            debug!(album = %key, "Album selected");
            self.current_album = Some(key);
            Selection::Switched
        } else {
            warn!(album = %key, "Album not in catalog, keeping current selection");
            Selection::NotFound
        }
    }

    // ===== Playback Control =====

    /// Play (or resume) the current track of the current album
    pub fn play(&mut self) -> Result<PlayOutcome> {
        self.transition(None, None)
    }

    /// Play the track at `index` of the current album
    pub fn play_track(&mut self, index: usize) -> Result<PlayOutcome> {
        self.transition(Some(index), None)
    }

    /// Select `(band_id, album_id)` and play the track at `index`, or the
    /// current index when `None`
    pub fn play_album(
        &mut self,
        index: Option<usize>,
        band_id: &str,
        album_id: &str,
    ) -> Result<PlayOutcome> {
        self.transition(index, Some((band_id, album_id)))
    }

    /// Advance to the track after the current one
    pub fn play_next(&mut self) -> Result<PlayOutcome> {
        let next = self.track_index.map_or(0, |i| i + 1);
        self.play_track(next)
    }

    /// Pause the sink. The album/track selection is kept.
    pub fn stop(&mut self) {
        self.sink.pause();

        if matches!(self.state, PlaybackState::Playing | PlaybackState::Loading) {
            self.state = PlaybackState::Paused;
            self.emit_change();
        }
    }

    /// Seek within the current track. No-op before playback has started.
    pub fn seek(&mut self, seconds: f64) -> Result<()> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(PlaybackError::InvalidSeekPosition(seconds));
        }
        if self.track_index.is_none() {
            return Ok(());
        }

        let target = if self.clock.total > 0.0 {
            seconds.min(self.clock.total)
        } else {
            seconds
        };

        self.sink.seek(target);
        self.clock.elapsed = target;
        self.emit(Notification::UpdateTime);
        Ok(())
    }

    /// Seek to `percent` (0-100) of the current track
    pub fn seek_percent(&mut self, percent: f64) -> Result<()> {
        if !(0.0..=100.0).contains(&percent) {
            return Err(PlaybackError::InvalidSeekPosition(percent));
        }
        self.seek(self.clock.total * percent / 100.0)
    }

    pub fn set_loop(&mut self, enabled: bool) {
        self.loop_enabled = enabled;
    }

    pub fn is_loop_enabled(&self) -> bool {
        self.loop_enabled
    }

    // ===== Transitions =====

    fn transition(
        &mut self,
        index: Option<usize>,
        target: Option<(&str, &str)>,
    ) -> Result<PlayOutcome> {
        let previous_album = self.current_album.clone();
        let previous_index = self.track_index;

        if let Some((band_id, album_id)) = target {
            self.select_album(band_id, album_id);
        }

        let album = self.album();
        if !album.has_playable_file() {
            let err = PlaybackError::NoPlayableTracks {
                band_id: album.band_id().clone(),
                album_id: album.album_id().clone(),
            };
            error!(error = %err, "Nothing playable, ending session");
            self.state = PlaybackState::Stopped;
            self.emit_change();
            return Err(err);
        }

        let start = index.or(previous_index).unwrap_or(0);
        debug!(start, "Play requested");

        match self.resolve(start) {
            Resolution::EndOfAlbum => {
                info!("Reached end of album with looping disabled");
                self.sink.pause();
                self.state = PlaybackState::Stopped;
                self.emit_change();
                Ok(PlayOutcome::EndOfAlbum)
            }
            Resolution::Track {
                index,
                locator,
                wrapped,
                skipped,
            } => {
                if wrapped {
                    debug!("Wrapped to first track");
                    self.report(TelemetryAction::Loop, 0, true);
                }

                // A wrap back onto the current track resumes it; the sink
                // restarts a source that has ended when told to play.
                let album_changed = previous_album != self.current_album;
                let reload = album_changed || previous_index != Some(index) || skipped;

                self.track_index = Some(index);

                let outcome = if reload {
                    debug!(index, %locator, "Loading track");
                    self.clock.reset();
                    self.sink.load(&locator);
                    self.state = PlaybackState::Loading;
                    PlayOutcome::Loaded { index }
                } else {
                    debug!(index, "Resuming track");
                    self.sink.play();
                    self.state = PlaybackState::Playing;
                    PlayOutcome::Resumed { index }
                };

                self.emit_change();
                self.report(TelemetryAction::Play, index, false);
                Ok(outcome)
            }
        }
    }

    /// Walk forward from `start`, wrapping when looping, until a track with
    /// a locator is found. Bounded by the track count, so an album without
    /// any locator cannot spin here.
    fn resolve(&self, start: usize) -> Resolution {
        let album = self.album();
        let count = album.len();

        let mut candidate = start;
        let mut wrapped = false;
        let mut skipped = false;

        for _ in 0..=count {
            if candidate >= count {
                if !self.loop_enabled {
                    return Resolution::EndOfAlbum;
                }
                candidate = 0;
                wrapped = true;
            }

            if let Some(locator) = album.track(candidate).file() {
                return Resolution::Track {
                    index: candidate,
                    locator: locator.to_string(),
                    wrapped,
                    skipped,
                };
            }

            debug!(index = candidate, "Skipping track without media locator");
            skipped = true;
            candidate += 1;
        }

        Resolution::EndOfAlbum
    }

    // ===== Sink events =====

    /// Dispatch an event reported by the audio sink
    pub fn handle_sink_event(&mut self, event: SinkEvent) -> Result<()> {
        if event.is_completion() {
            self.on_ended()?;
            return Ok(());
        }

        match event {
            SinkEvent::MetadataLoaded => self.on_metadata_loaded(),
            SinkEvent::TimeUpdate => self.on_time_update(),
            SinkEvent::Error { message } => self.on_sink_error(&message),
            SinkEvent::Idle { reason } => debug!(?reason, "Sink idle"),
            SinkEvent::Ended => {}
        }
        Ok(())
    }

    /// Publish media info for the loaded source and start it
    pub fn on_metadata_loaded(&mut self) {
        if self.track_index.is_none() {
            debug!("Metadata for unknown source ignored");
            return;
        }

        let clock = PlaybackClock::from_sink(self.sink.current_time(), self.sink.duration());
        let info = {
            let album = self.album();
            let track = self.current_track();
            MediaInfo {
                content_id: track.file().unwrap_or_default().to_string(),
                duration: clock.total,
                metadata: MediaMetadata {
                    title: track.title().to_string(),
                    track_number: track.number(),
                    band_id: album.band_id().to_string(),
                    album_id: album.album_id().to_string(),
                },
            }
        };

        debug!(content_id = %info.content_id, duration = info.duration, "Metadata loaded");
        self.clock = clock;
        self.host.set_media_information(info);
        self.host.broadcast_status();
        self.sink.play();
        self.state = PlaybackState::Playing;
        self.emit_change();
    }

    /// Refresh elapsed/total seconds from the sink
    pub fn on_time_update(&mut self) {
        self.clock = PlaybackClock::from_sink(self.sink.current_time(), self.sink.duration());
        self.emit(Notification::UpdateTime);
    }

    /// Natural end of the current track: advance, then report it
    pub fn on_ended(&mut self) -> Result<PlayOutcome> {
        debug!(index = ?self.track_index, "Track finished");
        let outcome = self.play_next()?;

        if let Some(index) = self.track_index {
            self.report(TelemetryAction::TrackEnded, index, true);
        }
        Ok(outcome)
    }

    fn on_sink_error(&mut self, message: &str) {
        warn!(%message, index = ?self.track_index, "Audio sink error");
        self.state = PlaybackState::Stopped;
        self.emit_change();
    }

    // ===== State queries =====

    /// Current album, or the empty sentinel
    pub fn album(&self) -> &Album {
        self.current_album
            .as_ref()
            .and_then(|key| self.catalog.get(key))
            .unwrap_or(&EMPTY_ALBUM)
    }

    /// Current track, or the null sentinel before playback
    pub fn current_track(&self) -> &Track {
        match self.track_index {
            Some(index) => self.album().track(index),
            None => &NULL_TRACK,
        }
    }

    pub fn current_track_index(&self) -> Option<usize> {
        self.track_index
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.clock.elapsed
    }

    pub fn total_seconds(&self) -> f64 {
        self.clock.total
    }

    /// Elapsed time as `MM:SS`
    pub fn elapsed_display(&self) -> String {
        self.clock.elapsed_display()
    }

    /// Total time as `MM:SS`
    pub fn total_display(&self) -> String {
        self.clock.total_display()
    }

    /// Position in percent, 0 when the total is unknown
    pub fn position_percent(&self) -> f64 {
        self.clock.percent()
    }

    pub fn status(&self) -> PlaybackStatus {
        let album = self.album();
        PlaybackStatus {
            state: self.state,
            album: (!album.is_empty()).then(|| album.key().clone()),
            track_index: self.track_index,
            track_title: self.current_track().title().to_string(),
            elapsed_seconds: self.clock.elapsed,
            total_seconds: self.clock.total,
            loop_enabled: self.loop_enabled,
        }
    }

    // ===== Notifications =====

    pub fn subscribe<F>(&mut self, kind: Notification, callback: F) -> ListenerId
    where
        F: FnMut(&PlaybackStatus) + 'static,
    {
        self.listeners.subscribe(kind, callback)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn emit(&mut self, kind: Notification) {
        let status = self.status();
        self.listeners.emit(kind, &status);
    }

    fn emit_change(&mut self) {
        self.emit(Notification::Change);
    }

    fn report(&mut self, action: TelemetryAction, index: usize, non_interaction: bool) {
        if !self.telemetry_enabled {
            return;
        }
        let event = {
            let album = self.album();
            TelemetryEvent::player(
                action,
                album.description(),
                index,
                album.source_url(),
                non_interaction,
            )
        };
        self.telemetry.send(event);
    }
}
