//! Per-kind alarm log destinations.
//!
//! Four independent destinations: general alarms, denylist hits, allowlist
//! hits, and scan detections. Each is enabled by configuring a path and
//! receives timestamped single-line records; an unconfigured destination is
//! simply skipped. Sink failures degrade to warnings, never into the cycle.

use std::fmt::Write as _;
use std::fs::{File, OpenOptions};
use std::io::Write as _;
use std::path::Path;

use tracing::warn;

use arpvakt_core::events::{AlarmEvent, AlarmKind};

#[derive(Debug, Default)]
pub struct LogSinks {
    general: Option<File>,
    denylist: Option<File>,
    allowlist: Option<File>,
    scan: Option<File>,
}

impl LogSinks {
    /// Opens the configured destinations in append mode. A destination that
    /// cannot be opened is disabled with a warning.
    pub fn open(
        general: Option<&Path>,
        denylist: Option<&Path>,
        allowlist: Option<&Path>,
        scan: Option<&Path>,
    ) -> Self {
        Self {
            general: general.and_then(open_sink),
            denylist: denylist.and_then(open_sink),
            allowlist: allowlist.and_then(open_sink),
            scan: scan.and_then(open_sink),
        }
    }

    /// Routes one event to its destination.
    pub fn record(&mut self, event: &AlarmEvent) {
        let sink = match event.kind {
            AlarmKind::Denylisted => &mut self.denylist,
            AlarmKind::Allowlisted => &mut self.allowlist,
            AlarmKind::ScanDetected => &mut self.scan,
            AlarmKind::BindingMismatch | AlarmKind::UnknownMac | AlarmKind::Learned => {
                &mut self.general
            }
        };
        if let Some(file) = sink {
            let line = format_record(event);
            if let Err(err) = writeln!(file, "{line}") {
                warn!(kind = event.kind.as_str(), %err, "failed to write alarm record");
            }
        }
    }
}

fn open_sink(path: &Path) -> Option<File> {
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(file),
        Err(err) => {
            warn!(path = %path.display(), %err, "log destination disabled");
            None
        }
    }
}

fn format_record(event: &AlarmEvent) -> String {
    let mut line = format!(
        "{} {} interface={}",
        event.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
        event.kind.as_str(),
        event.interface,
    );
    if let Some(mac) = event.mac {
        let _ = write!(line, " mac={mac}");
    }
    if let Some(ip) = event.ip {
        let _ = write!(line, " ip={ip}");
    }
    if let Some(real_mac) = event.real_mac {
        let _ = write!(line, " real_mac={real_mac}");
    }
    if let Some(count) = event.count {
        let _ = write!(line, " count={count}");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use arpvakt_core::net::MacAddr;

    fn mac(s: &str) -> MacAddr {
        s.parse().unwrap()
    }

    #[test]
    fn records_route_to_their_kind_destination() {
        let dir = std::env::temp_dir();
        let deny_path = dir.join(format!("arpvakt-test-deny-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&deny_path);

        let mut sinks = LogSinks::open(None, Some(&deny_path), None, None);
        sinks.record(&AlarmEvent::denylisted(
            "eth0",
            mac("11:22:33:44:55:66"),
            "10.0.0.9".parse().unwrap(),
        ));
        // General events have no destination configured here.
        sinks.record(&AlarmEvent::unknown_mac(
            "eth0",
            mac("aa:bb:cc:dd:ee:ff"),
            "10.0.0.10".parse().unwrap(),
        ));
        drop(sinks);

        let contents = std::fs::read_to_string(&deny_path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.contains("denylisted"));
        assert!(contents.contains("mac=11:22:33:44:55:66"));
        let _ = std::fs::remove_file(&deny_path);
    }

    #[test]
    fn scan_records_carry_the_row_count() {
        let event = AlarmEvent::scan_detected("eth1", 42);
        let line = format_record(&event);
        assert!(line.contains("scan_detected"));
        assert!(line.contains("interface=eth1"));
        assert!(line.contains("count=42"));
        assert!(!line.contains("mac="));
    }
}
