//! LAN scan detection.
//!
//! A scanning host floods the neighbor table with resolution attempts, most
//! of them incomplete. The detector counts raw rows per monitored
//! interface, incomplete resolutions included, and alarms on a strict
//! threshold excess. An empty interface set disables the detector.

use tracing::warn;

use arpvakt_core::events::AlarmEvent;
use arpvakt_snapshot::NeighborSnapshot;

#[derive(Debug, Clone)]
pub struct ScanDetector {
    interfaces: Vec<String>,
    threshold: usize,
}

impl ScanDetector {
    pub fn new(interfaces: Vec<String>, threshold: usize) -> Self {
        Self {
            interfaces,
            threshold,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.interfaces.is_empty()
    }

    /// Counts rows per monitored interface; strictly more than the
    /// threshold raises one `ScanDetected` per offending interface.
    pub fn inspect(&self, snapshot: &NeighborSnapshot) -> Vec<AlarmEvent> {
        let mut events = Vec::new();
        for interface in &self.interfaces {
            let count = snapshot.rows_on(interface);
            if count > self.threshold {
                warn!(
                    interface = %interface,
                    count,
                    threshold = self.threshold,
                    "possible LAN scan"
                );
                events.push(AlarmEvent::scan_detected(interface, count));
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arpvakt_core::net::{MacAddr, NeighborEntry};
    use std::net::Ipv4Addr;

    fn incomplete_rows(interface: &str, n: usize) -> NeighborSnapshot {
        let rows = (0..n)
            .map(|i| {
                NeighborEntry::new(
                    Ipv4Addr::new(10, 0, (i / 256) as u8, (i % 256) as u8),
                    MacAddr::ZERO,
                    interface,
                )
            })
            .collect();
        NeighborSnapshot::from_rows(rows)
    }

    #[test]
    fn exactly_threshold_rows_is_quiet() {
        let detector = ScanDetector::new(vec!["eth0".to_string()], 8);
        assert!(detector.inspect(&incomplete_rows("eth0", 8)).is_empty());
    }

    #[test]
    fn threshold_plus_one_raises_one_alarm() {
        let detector = ScanDetector::new(vec!["eth0".to_string()], 8);
        let events = detector.inspect(&incomplete_rows("eth0", 9));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].interface, "eth0");
        assert_eq!(events[0].count, Some(9));
    }

    #[test]
    fn empty_interface_set_disables_the_detector() {
        let detector = ScanDetector::new(Vec::new(), 0);
        assert!(!detector.is_enabled());
        assert!(detector.inspect(&incomplete_rows("eth0", 100)).is_empty());
    }

    #[test]
    fn unmonitored_interfaces_never_alarm() {
        let detector = ScanDetector::new(vec!["eth1".to_string()], 2);
        assert!(detector.inspect(&incomplete_rows("eth0", 50)).is_empty());
    }
}
