//! castdeck Receiver Library
//!
//! Loads album catalogs from JSON, drives a playback session against a
//! simulated audio sink, and publishes media info through a logging session
//! host.
//!
//! This library exposes the receiver components for the binary and for
//! testing.

pub mod config;
pub mod error;
pub mod host;
pub mod loader;
pub mod session;
pub mod simulator;

// Re-export commonly used types for convenience
pub use config::{CatalogSettings, ReceiverConfig, SimulationSettings};
pub use error::{ReceiverError, Result};
pub use host::LoggingSessionHost;
pub use session::{Session, SessionEnd, SessionSummary, StartRequest};
pub use simulator::{SimulatedSink, Simulation};
