//! Elapsed/total time bookkeeping and display helpers

use serde::{Deserialize, Serialize};

/// Sanitize a sink-reported value: missing, negative, or non-finite is 0
pub fn sanitize_seconds(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Format seconds as zero-padded `MM:SS`. Minutes are not capped at 60.
pub fn format_clock(seconds: f64) -> String {
    let total = sanitize_seconds(Some(seconds)).floor() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// `elapsed / total * 100`, defined as 0 when `total` is 0
pub fn position_percent(elapsed: f64, total: f64) -> f64 {
    let elapsed = sanitize_seconds(Some(elapsed));
    let total = sanitize_seconds(Some(total));

    if total == 0.0 {
        return 0.0;
    }
    elapsed / total * 100.0
}

/// Elapsed and total seconds of the current source
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackClock {
    pub elapsed: f64,
    pub total: f64,
}

impl PlaybackClock {
    /// Build from sink-reported values
    pub fn from_sink(current_time: Option<f64>, duration: Option<f64>) -> Self {
        Self {
            elapsed: sanitize_seconds(current_time),
            total: sanitize_seconds(duration),
        }
    }

    pub fn elapsed_display(&self) -> String {
        format_clock(self.elapsed)
    }

    pub fn total_display(&self) -> String {
        format_clock(self.total)
    }

    pub fn percent(&self) -> f64 {
        position_percent(self.elapsed, self.total)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
