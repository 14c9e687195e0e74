//! Analytics events describing playback actions
//!
//! Telemetry is fire-and-forget: implementations must not block and the
//! controller never looks at the outcome.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Category every player event is filed under
pub const PLAYER_CATEGORY: &str = "player";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TelemetryAction {
    #[serde(rename = "play")]
    Play,
    #[serde(rename = "loop")]
    Loop,
    #[serde(rename = "track ended")]
    TrackEnded,
}

impl TelemetryAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Loop => "loop",
            Self::TrackEnded => "track ended",
        }
    }
}

impl fmt::Display for TelemetryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryFlags {
    /// Set for events the listener did not trigger directly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_interaction: Option<bool>,
    /// 1-based track number
    pub track_num: u32,
    /// Canonical URL of the album
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryEvent {
    pub category: String,
    pub action: TelemetryAction,
    /// `"<artist> / <title>"`
    pub label: String,
    /// 1-based track number
    pub value: u32,
    pub flags: TelemetryFlags,
}

impl TelemetryEvent {
    /// Build a player event for the track at 0-based `index`
    pub fn player(
        action: TelemetryAction,
        label: impl Into<String>,
        index: usize,
        url: impl Into<String>,
        non_interaction: bool,
    ) -> Self {
        let track_num = u32::try_from(index + 1).unwrap_or(u32::MAX);
        Self {
            category: PLAYER_CATEGORY.to_string(),
            action,
            label: label.into(),
            value: track_num,
            flags: TelemetryFlags {
                non_interaction: non_interaction.then_some(true),
                track_num,
                url: url.into(),
            },
        }
    }

    pub fn is_non_interaction(&self) -> bool {
        self.flags.non_interaction.unwrap_or(false)
    }
}

/// Analytics reporting sink
pub trait Telemetry {
    fn send(&mut self, event: TelemetryEvent);
}

/// Writes events to the `telemetry` tracing target
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTelemetry;

impl Telemetry for LogTelemetry {
    fn send(&mut self, event: TelemetryEvent) {
        info!(
            target: "telemetry",
            category = %event.category,
            action = %event.action,
            label = %event.label,
            value = event.value,
            non_interaction = event.is_non_interaction(),
            url = %event.flags.url,
            "event"
        );
    }
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTelemetry;

impl Telemetry for NullTelemetry {
    fn send(&mut self, _event: TelemetryEvent) {}
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{Telemetry, TelemetryEvent};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default, Clone)]
    pub(crate) struct RecordingTelemetry {
        pub events: Rc<RefCell<Vec<TelemetryEvent>>>,
    }

    impl Telemetry for RecordingTelemetry {
        fn send(&mut self, event: TelemetryEvent) {
            self.events.borrow_mut().push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_event_reports_one_based_track() {
        let event = TelemetryEvent::player(
            TelemetryAction::Loop,
            "Artist / Record",
            0,
            "https://example/album",
            true,
        );

        assert_eq!(event.category, "player");
        assert_eq!(event.value, 1);
        assert_eq!(event.flags.track_num, 1);
        assert!(event.is_non_interaction());
    }

    #[test]
    fn action_wire_names() {
        let json = serde_json::to_value(TelemetryAction::TrackEnded).unwrap();
        assert_eq!(json, "track ended");
        assert_eq!(TelemetryAction::Play.to_string(), "play");
    }

    #[test]
    fn interactive_events_omit_flag() {
        let event = TelemetryEvent::player(TelemetryAction::Play, "a / b", 2, "", false);
        let json = serde_json::to_value(&event).unwrap();

        assert!(json["flags"].get("nonInteraction").is_none());
        assert_eq!(json["flags"]["trackNum"], 3);
    }
}
