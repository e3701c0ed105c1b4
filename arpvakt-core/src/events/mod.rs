//! Alarm event model shared by detection, telemetry, and notification.

mod alarm;

pub use alarm::{AlarmEvent, AlarmKind};
