//! Polling cadence configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Normal/attack sleep durations for the interval controller.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct IntervalsConfig {
    /// Sleep between cycles while no alarm is active (seconds).
    #[validate(range(min = 1, max = 86_400))]
    #[serde(default = "default_normal_secs")]
    pub normal_secs: u64,

    /// Shortened sleep after an alarmed cycle (seconds).
    #[validate(range(min = 1, max = 86_400))]
    #[serde(default = "default_attack_secs")]
    pub attack_secs: u64,
}

fn default_normal_secs() -> u64 {
    60
}
fn default_attack_secs() -> u64 {
    5
}

impl IntervalsConfig {
    pub fn normal(&self) -> Duration {
        Duration::from_secs(self.normal_secs)
    }

    pub fn attack(&self) -> Duration {
        Duration::from_secs(self.attack_secs)
    }
}

impl Default for IntervalsConfig {
    fn default() -> Self {
        Self {
            normal_secs: default_normal_secs(),
            attack_secs: default_attack_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_default_intervals() {
        let config = IntervalsConfig::default();
        config.validate().expect("Default config should be valid");
        assert_eq!(config.normal(), Duration::from_secs(60));
        assert_eq!(config.attack(), Duration::from_secs(5));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let mut config = IntervalsConfig::default();
        config.attack_secs = 0;
        assert!(config.validate().is_err());
    }
}
