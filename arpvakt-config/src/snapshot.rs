//! Snapshot source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct SnapshotConfig {
    /// Kernel neighbor-table location.
    #[serde(default = "default_source")]
    pub source: PathBuf,
}

fn default_source() -> PathBuf {
    PathBuf::from("/proc/net/arp")
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
        }
    }
}
