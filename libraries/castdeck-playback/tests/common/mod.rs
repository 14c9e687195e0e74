//! Shared test doubles for controller tests
//!
//! Each double records into an `Rc<RefCell<..>>` log that the test keeps a
//! clone of, so assertions can run after the double is boxed into the
//! controller.

#![allow(dead_code)]

use castdeck_core::{Album, AlbumKey, Track};
use castdeck_playback::{
    AudioSink, MediaInfo, PlaybackConfig, PlaybackController, SessionHost, Telemetry,
    TelemetryAction, TelemetryEvent,
};
use std::cell::RefCell;
use std::rc::Rc;

// ===== Audio sink =====

#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    Load(String),
    Play,
    Pause,
    Seek(f64),
}

#[derive(Debug, Default)]
pub struct SinkLog {
    pub calls: Vec<SinkCall>,
    pub current_time: Option<f64>,
    pub duration: Option<f64>,
}

impl SinkLog {
    pub fn loads(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SinkCall::Load(l) => Some(l.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last(&self) -> Option<&SinkCall> {
        self.calls.last()
    }
}

#[derive(Debug, Default, Clone)]
pub struct MockSink {
    pub log: Rc<RefCell<SinkLog>>,
}

impl MockSink {
    /// Pretend the sink has reached `current_time` of a `duration` second source
    pub fn set_times(&self, current_time: Option<f64>, duration: Option<f64>) {
        let mut log = self.log.borrow_mut();
        log.current_time = current_time;
        log.duration = duration;
    }

    pub fn loads(&self) -> Vec<String> {
        self.log.borrow().loads()
    }

    pub fn calls(&self) -> Vec<SinkCall> {
        self.log.borrow().calls.clone()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().calls.clear();
    }
}

impl AudioSink for MockSink {
    fn load(&mut self, locator: &str) {
        self.log
            .borrow_mut()
            .calls
            .push(SinkCall::Load(locator.to_string()));
    }

    fn play(&mut self) {
        self.log.borrow_mut().calls.push(SinkCall::Play);
    }

    fn pause(&mut self) {
        self.log.borrow_mut().calls.push(SinkCall::Pause);
    }

    fn seek(&mut self, seconds: f64) {
        self.log.borrow_mut().calls.push(SinkCall::Seek(seconds));
    }

    fn current_time(&self) -> Option<f64> {
        self.log.borrow().current_time
    }

    fn duration(&self) -> Option<f64> {
        self.log.borrow().duration
    }
}

// ===== Telemetry =====

#[derive(Debug, Default, Clone)]
pub struct MockTelemetry {
    pub events: Rc<RefCell<Vec<TelemetryEvent>>>,
}

impl MockTelemetry {
    pub fn actions(&self) -> Vec<TelemetryAction> {
        self.events.borrow().iter().map(|e| e.action).collect()
    }

    pub fn of(&self, action: TelemetryAction) -> Vec<TelemetryEvent> {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.action == action)
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl Telemetry for MockTelemetry {
    fn send(&mut self, event: TelemetryEvent) {
        self.events.borrow_mut().push(event);
    }
}

// ===== Session host =====

#[derive(Debug, Default)]
pub struct HostLog {
    pub media: Vec<MediaInfo>,
    pub broadcasts: usize,
}

#[derive(Debug, Default, Clone)]
pub struct MockHost {
    pub log: Rc<RefCell<HostLog>>,
}

impl SessionHost for MockHost {
    fn set_media_information(&mut self, info: MediaInfo) {
        self.log.borrow_mut().media.push(info);
    }

    fn broadcast_status(&mut self) {
        self.log.borrow_mut().broadcasts += 1;
    }
}

// ===== Fixtures =====

pub struct Harness {
    pub controller: PlaybackController,
    pub sink: MockSink,
    pub telemetry: MockTelemetry,
    pub host: MockHost,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(PlaybackConfig::default())
    }

    pub fn with_config(config: PlaybackConfig) -> Self {
        let sink = MockSink::default();
        let telemetry = MockTelemetry::default();
        let host = MockHost::default();

        let mut controller = PlaybackController::new(config, Box::new(sink.clone()));
        controller.set_telemetry(Box::new(telemetry.clone()));
        controller.set_session_host(Box::new(host.clone()));

        Self {
            controller,
            sink,
            telemetry,
            host,
        }
    }
}

/// Album whose tracks carry the given locators ("" means no locator)
pub fn album_with_files(band: &str, id: &str, files: &[&str]) -> Album {
    let tracks = files
        .iter()
        .enumerate()
        .map(|(i, f)| {
            Track::new(i, format!("Track {}", i + 1), Some((*f).to_string()))
                .with_number(Some(i as u32 + 1))
        })
        .collect();

    Album::new(AlbumKey::new(band, id), "Test Artist", "Test Album", tracks)
        .with_urls("https://img.example/art.jpg", "https://band.example/album/test")
}
