//! Observed neighbor-table entries.

use std::net::Ipv4Addr;

use serde::Serialize;

use crate::net::MacAddr;

/// One live row of the kernel neighbor table, re-derived every cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeighborEntry {
    pub ip: Ipv4Addr,
    pub mac: MacAddr,
    pub interface: String,
}

impl NeighborEntry {
    pub fn new(ip: Ipv4Addr, mac: MacAddr, interface: impl Into<String>) -> Self {
        Self {
            ip,
            mac,
            interface: interface.into(),
        }
    }

    /// Incomplete resolution: the kernel has not learned a hardware address
    /// for this IP yet. Excluded from classification, counted by the scan
    /// detector.
    pub fn is_incomplete(&self) -> bool {
        self.mac.is_zero()
    }
}
