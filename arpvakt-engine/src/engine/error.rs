use std::path::PathBuf;

use thiserror::Error;

use arpvakt_config::ConfigError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("another instance appears to be running (lock held at {0})")]
    AlreadyRunning(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
