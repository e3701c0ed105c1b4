//! # arpvakt-snapshot
//!
//! Neighbor-table snapshots. Reads the kernel ARP table once per cycle and
//! normalizes it into [`NeighborSnapshot`] rows for the reconciliation
//! pipeline. The [`SnapshotSource`] trait is the seam between the live
//! `/proc/net/arp` reader and the in-memory sources used in tests.

mod source;
mod table;

pub use source::{MemorySource, ProcNeighborTable, SnapshotError, SnapshotSource};
pub use table::{parse_neighbor_table, NeighborSnapshot};
