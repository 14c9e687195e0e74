//! Receiver session: wire the controller to the simulated sink, pick the
//! album to play, and pump sink events until the album ends or shutdown.

use crate::config::ReceiverConfig;
use crate::error::{ReceiverError, Result};
use crate::host::LoggingSessionHost;
use crate::simulator::Simulation;
use castdeck_core::{Album, AlbumKey};
use castdeck_playback::{LogTelemetry, Notification, PlayOutcome, PlaybackController};
use std::future::Future;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// What to play first
#[derive(Debug, Clone, Default)]
pub struct StartRequest {
    /// Album identity; the first loaded album when unset
    pub album: Option<AlbumKey>,
    /// Track index; 0 when unset
    pub track: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Last track finished with looping disabled
    EndOfAlbum,
    /// The shutdown future resolved first
    Shutdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub end: SessionEnd,
    pub ticks: u64,
    pub sources_loaded: usize,
}

/// A controller driving a simulated sink
pub struct Session {
    controller: PlaybackController,
    simulation: Simulation,
    finished: bool,
}

impl Session {
    /// Build a controller from `config` with a simulated sink, the logging
    /// session host, and log telemetry when enabled
    pub fn new(config: &ReceiverConfig) -> Self {
        let simulation = Simulation::new(config.simulation.clone());
        let mut controller =
            PlaybackController::new(config.playback.clone(), Box::new(simulation.sink()));

        controller.set_session_host(Box::new(LoggingSessionHost::new()));
        if config.playback.telemetry_enabled {
            controller.set_telemetry(Box::new(LogTelemetry));
        }

        controller.subscribe(Notification::Change, |status| {
            debug!(
                state = ?status.state,
                track = ?status.track_index,
                title = %status.track_title,
                "Playback changed"
            );
        });

        Self {
            controller,
            simulation,
            finished: false,
        }
    }

    /// Register albums. Returns the key of the first one.
    pub fn register_all(&mut self, albums: Vec<Album>) -> Option<AlbumKey> {
        let first = albums.first().map(|a| a.key().clone());
        for album in albums {
            self.controller.register_album(album);
        }
        first
    }

    /// Start playback as requested, falling back to `default_album`
    pub fn start(
        &mut self,
        request: &StartRequest,
        default_album: Option<&AlbumKey>,
    ) -> Result<PlayOutcome> {
        let key = request
            .album
            .as_ref()
            .or(default_album)
            .ok_or_else(|| ReceiverError::Config("No album to play".to_string()))?;

        if self.controller.catalog().get(key).is_none() {
            return Err(ReceiverError::Config(format!(
                "Album {key} is not in the catalog"
            )));
        }

        info!(album = %key, track = request.track.unwrap_or(0), "Starting playback");
        let outcome = self.controller.play_album(
            Some(request.track.unwrap_or(0)),
            key.band_id.as_str(),
            key.album_id.as_str(),
        )?;
        self.finished = outcome == PlayOutcome::EndOfAlbum;
        Ok(outcome)
    }

    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PlaybackController {
        &mut self.controller
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Deliver one tick's worth of sink events. Returns true once the
    /// album has played out with looping disabled; a sink error stops the
    /// controller but does not end the session.
    pub fn step(&mut self) -> Result<bool> {
        for event in self.simulation.tick() {
            if event.is_completion() {
                if self.controller.on_ended()? == PlayOutcome::EndOfAlbum {
                    self.finished = true;
                }
            } else {
                self.controller.handle_sink_event(event)?;
            }
        }
        Ok(self.finished)
    }

    /// Tick until the album ends or `shutdown` resolves
    pub async fn run<F>(&mut self, shutdown: F) -> Result<SessionSummary>
    where
        F: Future<Output = ()>,
    {
        let mut interval = tokio::time::interval(self.simulation.settings().tick());
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        let mut ticks = 0;
        let end = loop {
            tokio::select! {
                () = &mut shutdown => {
                    info!("Shutdown requested");
                    self.controller.stop();
                    break SessionEnd::Shutdown;
                }
                _ = interval.tick() => {
                    ticks += 1;
                    if self.step()? {
                        info!("Album finished");
                        break SessionEnd::EndOfAlbum;
                    }
                }
            }
        };

        let summary = SessionSummary {
            end,
            ticks,
            sources_loaded: self.simulation.loads(),
        };
        info!(
            end = ?summary.end,
            ticks = summary.ticks,
            sources = summary.sources_loaded,
            "Session over"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use castdeck_core::Track;
    use castdeck_playback::{PlaybackState, SinkEvent};

    fn album(files: &[&str]) -> Album {
        let tracks = files
            .iter()
            .enumerate()
            .map(|(i, f)| Track::new(i, format!("t{i}"), Some((*f).to_string())))
            .collect();
        Album::new(AlbumKey::new("1", "10"), "Artist", "Record", tracks)
    }

    #[test]
    fn start_defaults_to_first_album() {
        let mut session = Session::new(&ReceiverConfig::default());
        let first = session.register_all(vec![album(&["a.mp3"])]);

        let outcome = session.start(&StartRequest::default(), first.as_ref()).unwrap();

        assert_eq!(outcome, PlayOutcome::Loaded { index: 0 });
        assert_eq!(session.simulation().loaded().as_deref(), Some("a.mp3"));
    }

    #[test]
    fn start_rejects_unknown_album() {
        let mut session = Session::new(&ReceiverConfig::default());
        session.register_all(vec![album(&["a.mp3"])]);

        let request = StartRequest {
            album: Some(AlbumKey::new("9", "99")),
            track: None,
        };
        assert!(matches!(
            session.start(&request, None),
            Err(ReceiverError::Config(_))
        ));
    }

    #[test]
    fn start_without_catalog_fails() {
        let mut session = Session::new(&ReceiverConfig::default());
        assert!(session.start(&StartRequest::default(), None).is_err());
    }

    #[test]
    fn unplayable_album_is_fatal() {
        let mut session = Session::new(&ReceiverConfig::default());
        let first = session.register_all(vec![album(&["", ""])]);

        let err = session
            .start(&StartRequest::default(), first.as_ref())
            .unwrap_err();

        assert!(err.is_fatal());
        assert!(matches!(err, ReceiverError::Playback(_)));
    }

    #[test]
    fn sink_error_does_not_end_session() {
        let mut session = Session::new(&ReceiverConfig::default());
        let first = session.register_all(vec![album(&["a.mp3", "b.mp3"])]);
        session.start(&StartRequest::default(), first.as_ref()).unwrap();
        assert!(!session.step().unwrap());

        session.simulation().inject(SinkEvent::Error {
            message: "decode failed".to_string(),
        });

        assert!(!session.step().unwrap());
        assert_eq!(session.controller().state(), PlaybackState::Stopped);
        assert_eq!(session.controller().current_track_index(), Some(0));
    }

    #[test]
    fn start_past_end_without_loop_finishes() {
        let mut config = ReceiverConfig::default();
        config.playback.loop_enabled = false;
        let mut session = Session::new(&config);
        let first = session.register_all(vec![album(&["a.mp3"])]);
        let request = StartRequest {
            album: None,
            track: Some(5),
        };

        let outcome = session.start(&request, first.as_ref()).unwrap();

        assert_eq!(outcome, PlayOutcome::EndOfAlbum);
        assert!(session.step().unwrap());
    }
}
