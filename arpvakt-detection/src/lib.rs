//! # arpvakt-detection
//!
//! The reconciliation engine: trusted binding stores with a deterministic
//! first-match lookup, the denylist/allowlist pre-screen, the per-interface
//! binding classifier, the growth-only learning engine, and the scan-rate
//! detector.
//!
//! For a fixed (interface, MAC) and a fixed store/list state, every decision
//! here is a pure deterministic function; the only ordering rule is the
//! documented first-match tie-break on duplicate binding lines.

pub mod bindings;
pub mod classify;
pub mod filter;
pub mod learn;
pub mod scan;

pub use bindings::{Binding, BindingStore};
pub use classify::{Classifier, Disposition};
pub use filter::{DenyAllowFilter, FilterList, InterfaceScope};
pub use learn::LearningEngine;
pub use scan::ScanDetector;
