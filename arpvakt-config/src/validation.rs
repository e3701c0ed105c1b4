//! Custom validation functions for configuration.
//!
//! Shared validation logic used across multiple configuration modules.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    static ref INTERFACE_RE: Regex = Regex::new("^[a-zA-Z0-9_.-]+$").expect("static regex");
}

/// Validate that an interface name follows Linux naming conventions.
pub fn validate_interface(name: &str) -> Result<(), ValidationError> {
    if !name.is_empty() && name.len() <= 15 && INTERFACE_RE.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_interface"))
    }
}

/// Validate every interface name in a configured set.
pub fn validate_interface_list(names: &[String]) -> Result<(), ValidationError> {
    for name in names {
        validate_interface(name)?;
    }
    Ok(())
}
