//! Check-group configuration.
//!
//! Assigns each monitored interface to static mode (operator-curated
//! bindings) or dynamic mode (learned bindings), and locates the deny/allow
//! lists. The two mode sets must be disjoint; an interface in both would be
//! double-processed, so the overlap is rejected at startup.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::validation;

/// Static and dynamic check groups plus the MAC filter lists.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
#[validate(schema(function = validate_disjoint_modes))]
pub struct ChecksConfig {
    /// Interfaces checked against the operator-curated binding list.
    #[validate(nested)]
    #[serde(rename = "static", default)]
    pub static_mode: StaticModeConfig,

    /// Interfaces whose bindings are learned from first-observed traffic.
    #[validate(nested)]
    #[serde(rename = "dynamic", default)]
    pub dynamic_mode: DynamicModeConfig,

    /// Denylist location. A missing file leaves the feature inert.
    #[serde(default = "default_denylist_file")]
    pub denylist_file: PathBuf,

    /// Allowlist location. A missing file leaves the feature inert.
    #[serde(default = "default_allowlist_file")]
    pub allowlist_file: PathBuf,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct StaticModeConfig {
    #[validate(custom(function = validation::validate_interface_list))]
    #[serde(default)]
    pub interfaces: Vec<String>,

    /// Trusted binding list, loaded once and immutable for the run.
    #[serde(default = "default_bindings_file")]
    pub bindings_file: PathBuf,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct DynamicModeConfig {
    #[validate(custom(function = validation::validate_interface_list))]
    #[serde(default)]
    pub interfaces: Vec<String>,
}

fn default_bindings_file() -> PathBuf {
    PathBuf::from("/etc/arpvakt/bindings")
}
fn default_denylist_file() -> PathBuf {
    PathBuf::from("/etc/arpvakt/denylist")
}
fn default_allowlist_file() -> PathBuf {
    PathBuf::from("/etc/arpvakt/allowlist")
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            static_mode: StaticModeConfig::default(),
            dynamic_mode: DynamicModeConfig::default(),
            denylist_file: default_denylist_file(),
            allowlist_file: default_allowlist_file(),
        }
    }
}

impl Default for StaticModeConfig {
    fn default() -> Self {
        Self {
            interfaces: Vec::new(),
            bindings_file: default_bindings_file(),
        }
    }
}

impl Default for DynamicModeConfig {
    fn default() -> Self {
        Self {
            interfaces: Vec::new(),
        }
    }
}

fn validate_disjoint_modes(checks: &ChecksConfig) -> Result<(), ValidationError> {
    for interface in &checks.static_mode.interfaces {
        if checks.dynamic_mode.interfaces.contains(interface) {
            let mut error = ValidationError::new("interface_in_both_modes");
            error.message = Some(
                format!("interface '{interface}' is assigned to both static and dynamic mode")
                    .into(),
            );
            return Err(error);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disjoint_mode_sets_are_valid() {
        let mut config = ChecksConfig::default();
        config.static_mode.interfaces = vec!["eth0".to_string()];
        config.dynamic_mode.interfaces = vec!["eth1".to_string()];
        config.validate().expect("disjoint sets should validate");
    }

    #[test]
    fn overlapping_mode_sets_are_rejected() {
        let mut config = ChecksConfig::default();
        config.static_mode.interfaces = vec!["eth0".to_string(), "eth2".to_string()];
        config.dynamic_mode.interfaces = vec!["eth2".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn bad_interface_names_are_rejected() {
        let mut config = ChecksConfig::default();
        config.static_mode.interfaces = vec!["eth0 && reboot".to_string()];
        assert!(config.validate().is_err());
    }
}
