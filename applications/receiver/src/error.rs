/// Receiver error types
use castdeck_core::CoreError;
use castdeck_playback::PlaybackError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReceiverError>;

#[derive(Debug, Error)]
pub enum ReceiverError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog file {path:?} could not be loaded: {source}")]
    Catalog {
        path: PathBuf,
        #[source]
        source: CoreError,
    },

    #[error("Playback error: {0}")]
    Playback(#[from] PlaybackError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReceiverError {
    pub(crate) fn catalog(path: impl Into<PathBuf>, source: impl Into<CoreError>) -> Self {
        ReceiverError::Catalog {
            path: path.into(),
            source: source.into(),
        }
    }

    /// True when the session cannot continue
    pub fn is_fatal(&self) -> bool {
        match self {
            ReceiverError::Playback(e) => e.is_fatal(),
            _ => true,
        }
    }
}

impl From<config::ConfigError> for ReceiverError {
    fn from(err: config::ConfigError) -> Self {
        ReceiverError::Config(err.to_string())
    }
}
