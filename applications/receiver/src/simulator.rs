//! Simulated audio sink
//!
//! Stands in for a media element: a load is acknowledged with
//! `MetadataLoaded` on the next tick, a playing source advances by a fixed
//! step per tick, and reaching the configured duration reports `Ended`.
//! The controller owns the [`SimulatedSink`]; the session loop keeps the
//! [`Simulation`] handle to the same transport and pulls events from it.

use crate::config::SimulationSettings;
use castdeck_playback::{AudioSink, SinkEvent};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::trace;

#[derive(Debug, Default)]
struct Transport {
    locator: Option<String>,
    position: f64,
    duration: f64,
    playing: bool,
    loads: usize,
    pending: VecDeque<SinkEvent>,
}

/// Sink half handed to the controller
#[derive(Debug, Clone)]
pub struct SimulatedSink {
    transport: Rc<RefCell<Transport>>,
    track_seconds: f64,
}

impl AudioSink for SimulatedSink {
    fn load(&mut self, locator: &str) {
        let mut t = self.transport.borrow_mut();
        trace!(%locator, "Simulated load");

        // A new load replaces whatever was in flight
        t.pending.clear();
        t.locator = Some(locator.to_string());
        t.position = 0.0;
        t.duration = self.track_seconds;
        t.playing = false;
        t.loads += 1;
        t.pending.push_back(SinkEvent::MetadataLoaded);
    }

    fn play(&mut self) {
        let mut t = self.transport.borrow_mut();
        if t.locator.is_some() {
            if t.position >= t.duration {
                t.position = 0.0;
            }
            t.playing = true;
        }
    }

    fn pause(&mut self) {
        self.transport.borrow_mut().playing = false;
    }

    fn seek(&mut self, seconds: f64) {
        let mut t = self.transport.borrow_mut();
        // clamp panics on a NaN bound
        let upper = if t.duration.is_finite() {
            t.duration.max(0.0)
        } else {
            f64::MAX
        };
        t.position = seconds.clamp(0.0, upper);
    }

    fn current_time(&self) -> Option<f64> {
        let t = self.transport.borrow();
        t.locator.as_ref().map(|_| t.position)
    }

    fn duration(&self) -> Option<f64> {
        let t = self.transport.borrow();
        t.locator.as_ref().map(|_| t.duration)
    }
}

/// Driver half kept by the session loop
#[derive(Debug)]
pub struct Simulation {
    transport: Rc<RefCell<Transport>>,
    settings: SimulationSettings,
}

impl Simulation {
    pub fn new(settings: SimulationSettings) -> Self {
        Self {
            transport: Rc::new(RefCell::new(Transport::default())),
            settings,
        }
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    /// Sink sharing this simulation's transport
    pub fn sink(&self) -> SimulatedSink {
        SimulatedSink {
            transport: Rc::clone(&self.transport),
            track_seconds: self.settings.track_seconds,
        }
    }

    /// Move the clock forward by `seconds` and collect the resulting events
    pub fn advance(&self, seconds: f64) -> Vec<SinkEvent> {
        let mut t = self.transport.borrow_mut();
        let mut events: Vec<SinkEvent> = t.pending.drain(..).collect();

        if t.playing {
            t.position = (t.position + seconds).min(t.duration);
            events.push(SinkEvent::TimeUpdate);

            if t.position >= t.duration {
                t.playing = false;
                events.push(SinkEvent::Ended);
            }
        }

        events
    }

    /// Queue an event for the next tick, as a real sink would on failure
    pub fn inject(&self, event: SinkEvent) {
        self.transport.borrow_mut().pending.push_back(event);
    }

    /// Advance by one configured tick
    pub fn tick(&self) -> Vec<SinkEvent> {
        self.advance(self.settings.step_seconds())
    }

    pub fn loaded(&self) -> Option<String> {
        self.transport.borrow().locator.clone()
    }

    pub fn loads(&self) -> usize {
        self.transport.borrow().loads
    }

    pub fn is_playing(&self) -> bool {
        self.transport.borrow().playing
    }

    pub fn position(&self) -> f64 {
        self.transport.borrow().position
    }
}
