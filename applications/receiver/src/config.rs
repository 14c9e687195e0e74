/// Receiver configuration
use crate::error::{ReceiverError, Result};
use castdeck_core::types::DEFAULT_PREFERRED_FORMAT;
use castdeck_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "castdeck.toml";

/// Prefix for environment overrides, e.g. `CASTDECK_PLAYBACK__LOOP_ENABLED`
pub const ENV_PREFIX: &str = "CASTDECK";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReceiverConfig {
    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub simulation: SimulationSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Album JSON files loaded at startup
    #[serde(default)]
    pub paths: Vec<PathBuf>,

    /// Encoding picked when a track offers several
    #[serde(default = "default_preferred_format")]
    pub preferred_format: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationSettings {
    /// Length given to every simulated source
    #[serde(default = "default_track_seconds")]
    pub track_seconds: f64,

    /// Interval between simulated time updates
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Simulated seconds per wall-clock second
    #[serde(default = "default_speed")]
    pub speed: f64,
}

impl SimulationSettings {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Simulated seconds that pass per tick
    pub fn step_seconds(&self) -> f64 {
        self.tick().as_secs_f64() * self.speed
    }
}

impl ReceiverConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist. Without one, `castdeck.toml` in the
    /// working directory is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ReceiverError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (CASTDECK_SECTION__KEY)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;

        if !sim.track_seconds.is_finite() || sim.track_seconds <= 0.0 {
            return Err(ReceiverError::Config(format!(
                "simulation.track_seconds must be positive, got {}",
                sim.track_seconds
            )));
        }

        if sim.tick_ms == 0 {
            return Err(ReceiverError::Config(
                "simulation.tick_ms must be at least 1".to_string(),
            ));
        }

        if !sim.speed.is_finite() || sim.speed <= 0.0 {
            return Err(ReceiverError::Config(format!(
                "simulation.speed must be positive, got {}",
                sim.speed
            )));
        }

        if self.catalog.preferred_format.trim().is_empty() {
            return Err(ReceiverError::Config(
                "catalog.preferred_format must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_preferred_format() -> String {
    DEFAULT_PREFERRED_FORMAT.to_string()
}

fn default_track_seconds() -> f64 {
    180.0
}

fn default_tick_ms() -> u64 {
    250
}

fn default_speed() -> f64 {
    1.0
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            preferred_format: default_preferred_format(),
        }
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            track_seconds: default_track_seconds(),
            tick_ms: default_tick_ms(),
            speed: default_speed(),
        }
    }
}
