//! # arpvakt-telemetry
//!
//! Observability for the monitor: tracing subscriber setup, structured
//! security-event records, the per-kind timestamped log sinks, and
//! Prometheus metrics.
//!
//! ### Components:
//! - `logging`: subscriber init + structured event records
//! - `sinks`: independently configurable alarm log destinations
//! - `metrics`: Prometheus counters and histograms

pub mod logging;
pub mod metrics;
pub mod sinks;

pub use logging::EventLogger;
pub use metrics::MetricsRecorder;
pub use sinks::LogSinks;
