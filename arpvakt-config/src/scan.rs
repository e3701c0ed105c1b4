//! Scan-detection configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct ScanConfig {
    /// Interfaces to watch for scan activity. Empty disables the detector.
    #[validate(custom(function = validation::validate_interface_list))]
    #[serde(default)]
    pub interfaces: Vec<String>,

    /// Neighbor rows strictly above this count raise a scan alarm.
    #[validate(range(min = 1, max = 65_535))]
    #[serde(default = "default_threshold")]
    pub threshold: u32,
}

fn default_threshold() -> u32 {
    16
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            interfaces: Vec::new(),
            threshold: default_threshold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_threshold_is_rejected() {
        let mut config = ScanConfig::default();
        config.threshold = 0;
        assert!(config.validate().is_err());
    }
}
