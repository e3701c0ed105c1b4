//! # arpvakt-engine
//!
//! The poll-loop runtime. Wires the snapshot source, the deny/allow filter,
//! the static and dynamic check groups, the scan detector, the telemetry
//! sinks, and the notification hook into one cycle, and drives the
//! Normal/Attack interval controller between cycles.
//!
//! All cycle-scoped state lives in an explicit per-cycle working set passed
//! through the pipeline; the only mutable state that outlives a cycle is
//! the dynamic binding store, written by learning and read by
//! classification on the same thread.

pub mod engine;

pub use engine::error::EngineError;
pub use engine::lock::InstanceLock;
pub use engine::runtime::{CycleReport, RunOptions, Runtime};
