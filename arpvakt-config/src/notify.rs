//! Notification hook configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct NotifyConfig {
    /// Program invoked once per alarm event with positional arguments.
    /// Absent means alarms are logged only.
    #[serde(default)]
    pub hook: Option<PathBuf>,
}
