//! Platform-agnostic audio sink trait
//!
//! Abstracts the media element that actually fetches and renders audio. The
//! controller issues commands and never waits on them; the sink reports back
//! through [`SinkEvent`]s delivered one at a time.

use serde::{Deserialize, Serialize};

/// Media playback primitive driven by the controller
///
/// Loading is asynchronous at the sink level. Assigning a new source while a
/// previous load is in flight must abandon the earlier load.
pub trait AudioSink {
    /// Assign `locator` as the source and start loading it from scratch
    fn load(&mut self, locator: &str);

    /// Start or resume playback of the current source
    ///
    /// A source that has played to its end restarts from the beginning.
    fn play(&mut self);

    fn pause(&mut self);

    /// Move the playhead to `seconds` from the start
    fn seek(&mut self, seconds: f64);

    /// Current playhead, if known
    fn current_time(&self) -> Option<f64>;

    /// Duration of the current source, if known
    fn duration(&self) -> Option<f64>;
}

/// Why the sink went idle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdleReason {
    /// Reached the end of the media
    Finished,
    Cancelled,
    Interrupted,
    Error,
}

/// Events emitted by the audio sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SinkEvent {
    /// Duration and metadata of the assigned source are known
    MetadataLoaded,

    /// Playhead moved; read back via `current_time`/`duration`
    TimeUpdate,

    /// Natural end of the current source
    Ended,

    /// Some sinks report completion as "idle, finished" instead of `Ended`
    Idle { reason: IdleReason },

    /// Decode or network failure inside the sink
    Error { message: String },
}

impl SinkEvent {
    /// True for the events that mean the current track completed
    pub fn is_completion(&self) -> bool {
        matches!(
            self,
            SinkEvent::Ended
                | SinkEvent::Idle {
                    reason: IdleReason::Finished
                }
        )
    }
}

/// Sink that ignores every command
///
/// Useful for hosts that only need the selection logic.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn load(&mut self, _locator: &str) {}

    fn play(&mut self) {}

    fn pause(&mut self) {}

    fn seek(&mut self, _seconds: f64) {}

    fn current_time(&self) -> Option<f64> {
        None
    }

    fn duration(&self) -> Option<f64> {
        None
    }
}
