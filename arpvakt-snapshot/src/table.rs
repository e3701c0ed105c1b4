//! Kernel ARP table parsing.
//!
//! The table is row-oriented text in the 6-field kernel layout:
//! `IP address  HW type  Flags  HW address  Mask  Device`. The first line is
//! a header. Rows whose hardware address is all-zero denote an incomplete
//! resolution and are kept in the snapshot but excluded from the working set
//! handed to the classifier.

use std::net::Ipv4Addr;

use tracing::warn;

use arpvakt_core::net::{MacAddr, NeighborEntry};

/// One cycle's view of the neighbor table.
///
/// Holds every live row, incomplete resolutions included, so the scan
/// detector can count raw per-interface activity while classification only
/// sees resolved entries.
#[derive(Debug, Clone, Default)]
pub struct NeighborSnapshot {
    rows: Vec<NeighborEntry>,
}

impl NeighborSnapshot {
    pub fn from_rows(rows: Vec<NeighborEntry>) -> Self {
        Self { rows }
    }

    /// Every row observed this cycle, in table order.
    pub fn rows(&self) -> &[NeighborEntry] {
        &self.rows
    }

    /// Resolved entries only, the input to deny/allow filtering and
    /// classification.
    pub fn working_set(&self) -> Vec<NeighborEntry> {
        self.rows
            .iter()
            .filter(|row| !row.is_incomplete())
            .cloned()
            .collect()
    }

    /// Unfiltered row count on one interface, incomplete rows included.
    pub fn rows_on(&self, interface: &str) -> usize {
        self.rows
            .iter()
            .filter(|row| row.interface == interface)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Parses the text of a kernel ARP table into snapshot rows.
///
/// Malformed rows are skipped with a warning; they never fail the cycle.
pub fn parse_neighbor_table(text: &str) -> NeighborSnapshot {
    let mut rows = Vec::new();
    // First line is the column header.
    for line in text.lines().skip(1) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() < 6 {
            warn!(line, "skipping short neighbor-table row");
            continue;
        }
        let ip: Ipv4Addr = match fields[0].parse() {
            Ok(ip) => ip,
            Err(_) => {
                warn!(field = fields[0], "skipping row with unparseable IP");
                continue;
            }
        };
        let mac: MacAddr = match fields[3].parse() {
            Ok(mac) => mac,
            Err(_) => {
                warn!(field = fields[3], "skipping row with unparseable MAC");
                continue;
            }
        };
        rows.push(NeighborEntry::new(ip, mac, fields[5]));
    }
    NeighborSnapshot::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
IP address       HW type     Flags       HW address            Mask     Device
192.168.1.1      0x1         0x2         aa:bb:cc:dd:ee:ff     *        eth0
192.168.1.20     0x1         0x2         00:11:22:33:44:55     *        eth0
192.168.1.77     0x1         0x0         00:00:00:00:00:00     *        eth1
";

    #[test]
    fn parses_rows_in_table_order() {
        let snapshot = parse_neighbor_table(SAMPLE);
        assert_eq!(snapshot.rows().len(), 3);
        assert_eq!(snapshot.rows()[0].ip, "192.168.1.1".parse::<Ipv4Addr>().unwrap());
        assert_eq!(snapshot.rows()[1].interface, "eth0");
    }

    #[test]
    fn working_set_excludes_incomplete_rows() {
        let snapshot = parse_neighbor_table(SAMPLE);
        let working = snapshot.working_set();
        assert_eq!(working.len(), 2);
        assert!(working.iter().all(|row| !row.is_incomplete()));
    }

    #[test]
    fn raw_counts_include_incomplete_rows() {
        let snapshot = parse_neighbor_table(SAMPLE);
        assert_eq!(snapshot.rows_on("eth0"), 2);
        assert_eq!(snapshot.rows_on("eth1"), 1);
        assert_eq!(snapshot.rows_on("eth9"), 0);
    }

    #[test]
    fn skips_malformed_rows() {
        let text = "\
IP address       HW type     Flags       HW address            Mask     Device
not-an-ip        0x1         0x2         aa:bb:cc:dd:ee:ff     *        eth0
192.168.1.5      0x1         0x2         zz:bb:cc:dd:ee:ff     *        eth0
192.168.1.6      0x1
192.168.1.7      0x1         0x2         aa:bb:cc:dd:ee:01     *        eth0
";
        let snapshot = parse_neighbor_table(text);
        assert_eq!(snapshot.rows().len(), 1);
        assert_eq!(snapshot.rows()[0].ip, "192.168.1.7".parse::<Ipv4Addr>().unwrap());
    }
}
