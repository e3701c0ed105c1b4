//! Telemetry and log-destination configuration.
//!
//! Each event family has an independently optional destination; omitting a
//! destination disables that log without touching the others.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct TelemetryConfig {
    /// Destination for general alarm records.
    #[serde(default)]
    pub general_log: Option<PathBuf>,

    /// Destination for denylist hits.
    #[serde(default)]
    pub denylist_log: Option<PathBuf>,

    /// Destination for allowlist hits.
    #[serde(default)]
    pub allowlist_log: Option<PathBuf>,

    /// Destination for scan-detection records.
    #[serde(default)]
    pub scan_log: Option<PathBuf>,

    /// ANSI color in terminal output.
    #[serde(default = "default_true")]
    pub ansi: bool,
}

fn default_true() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            general_log: None,
            denylist_log: None,
            allowlist_log: None,
            scan_log: None,
            ansi: true,
        }
    }
}
