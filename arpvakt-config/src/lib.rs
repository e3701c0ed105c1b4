//! # arpvakt Configuration System
//!
//! Hierarchical configuration for the arpvakt monitor.
//!
//! ## Features
//! - **Unified Configuration**: single source of truth across all components
//! - **Validation**: schema and cross-field validation at startup, before
//!   the poll loop ever runs
//! - **Environment Awareness**: `ARPVAKT_*` variables override file values
//!
//! An interface assigned to both static and dynamic mode is a configuration
//! error and is rejected here; nothing downstream has to handle the overlap.

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod checks;
mod error;
mod intervals;
mod notify;
mod scan;
mod snapshot;
mod telemetry;
mod validation;

pub use checks::{ChecksConfig, DynamicModeConfig, StaticModeConfig};
pub use error::ConfigError;
pub use intervals::IntervalsConfig;
pub use notify::NotifyConfig;
pub use scan::ScanConfig;
pub use snapshot::SnapshotConfig;
pub use telemetry::TelemetryConfig;

/// Top-level configuration container for all arpvakt components.
#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct ArpvaktConfig {
    /// Neighbor-table snapshot source.
    #[validate(nested)]
    pub snapshot: SnapshotConfig,

    /// Static/dynamic check groups and deny/allow list locations.
    #[validate(nested)]
    pub checks: ChecksConfig,

    /// Scan-detection interface set and threshold.
    #[validate(nested)]
    pub scan: ScanConfig,

    /// Normal/attack polling cadence.
    #[validate(nested)]
    pub intervals: IntervalsConfig,

    /// External notification hook.
    #[validate(nested)]
    pub notify: NotifyConfig,

    /// Log destinations and terminal rendering.
    #[validate(nested)]
    pub telemetry: TelemetryConfig,

    /// Exclusive instance lock location. Absent disables single-instance
    /// enforcement.
    #[serde(default)]
    pub lock_file: Option<PathBuf>,
}

impl ArpvaktConfig {
    /// Load configuration from default files and environment.
    ///
    /// Hierarchy:
    /// 1. Default values
    /// 2. `config/arpvakt.yaml` - base settings. If missing, defaults are used.
    /// 3. `ARPVAKT_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(ArpvaktConfig::default()));

        if Path::new("config/arpvakt.yaml").exists() {
            figment = figment.merge(Yaml::file("config/arpvakt.yaml"));
        }

        figment
            .merge(Env::prefixed("ARPVAKT_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }

    /// Load configuration from a specific path.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(
                path.to_string_lossy().to_string(),
            )));
        }

        Figment::from(Serialized::defaults(ArpvaktConfig::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed("ARPVAKT_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}
