//! castdeck - Playback Control
//!
//! Platform-agnostic playback state machine for the castdeck receiver.
//!
//! This crate provides:
//! - Album/track selection over a session catalog
//! - Advance-on-finish with loop wraparound
//! - Forward skipping over tracks without a media locator
//! - Reload-vs-resume decisions for the audio sink
//! - Elapsed/total time tracking and `MM:SS` formatting
//! - Change/time-update notifications for listeners
//!
//! # Architecture
//!
//! The controller never touches a real media element. Everything outside the
//! state machine is provided via traits:
//! - [`AudioSink`]: load/play/pause/seek, reports back through [`SinkEvent`]s
//! - [`SessionHost`]: receives the [`MediaInfo`] of the loaded source
//! - [`Telemetry`]: receives play/loop/track-ended events
//!
//! Event delivery is single-threaded: the host hands sink events to
//! [`PlaybackController::handle_sink_event`] one at a time.
//!
//! # Example
//!
//! ```rust
//! use castdeck_core::{Album, AlbumKey, Track};
//! use castdeck_playback::{NullSink, PlayOutcome, PlaybackConfig, PlaybackController, SinkEvent};
//!
//! let mut controller = PlaybackController::new(PlaybackConfig::default(), Box::new(NullSink));
//!
//! controller.register_album(Album::new(
//!     AlbumKey::new("1", "10"),
//!     "Artist",
//!     "Record",
//!     vec![
//!         Track::new(0, "A", Some("a.mp3".to_string())),
//!         Track::new(1, "B", None),
//!         Track::new(2, "C", Some("c.mp3".to_string())),
//!     ],
//! ));
//!
//! let outcome = controller.play_album(Some(0), "1", "10").unwrap();
//! assert_eq!(outcome, PlayOutcome::Loaded { index: 0 });
//!
//! // Track B has no locator and is skipped
//! controller.handle_sink_event(SinkEvent::Ended).unwrap();
//! assert_eq!(controller.current_track_index(), Some(2));
//! ```

mod controller;
mod error;
pub mod events;
pub mod session;
pub mod sink;
pub mod telemetry;
pub mod time;
pub mod types;

// Public exports
pub use controller::PlaybackController;
pub use error::{PlaybackError, Result};
pub use events::{ListenerId, Listeners, Notification};
pub use session::{MediaInfo, MediaMetadata, NullSessionHost, SessionHost};
pub use sink::{AudioSink, IdleReason, NullSink, SinkEvent};
pub use telemetry::{LogTelemetry, NullTelemetry, Telemetry, TelemetryAction, TelemetryEvent};
pub use time::{format_clock, position_percent, PlaybackClock};
pub use types::{PlayOutcome, PlaybackConfig, PlaybackState, PlaybackStatus, Selection};
