//! Alarm events raised by the reconciliation pipeline.

use std::net::Ipv4Addr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::net::MacAddr;

/// Classification outcome that warrants an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlarmKind {
    /// A trusted binding exists for the MAC but records a different IP.
    BindingMismatch,
    /// No trusted binding exists for the (interface, MAC) pair.
    UnknownMac,
    /// The MAC matched a denylist rule scoped to the interface.
    Denylisted,
    /// The MAC matched an allowlist rule; informational only.
    Allowlisted,
    /// Neighbor rows on an interface exceeded the scan threshold.
    ScanDetected,
    /// A first-seen MAC was appended to the dynamic binding store.
    Learned,
}

impl AlarmKind {
    /// Stable identifier used in log records and metrics labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlarmKind::BindingMismatch => "binding_mismatch",
            AlarmKind::UnknownMac => "unknown_mac",
            AlarmKind::Denylisted => "denylisted",
            AlarmKind::Allowlisted => "allowlisted",
            AlarmKind::ScanDetected => "scan_detected",
            AlarmKind::Learned => "learned",
        }
    }
}

/// A single alarm occurrence with the context the notification hook and the
/// log sinks need. Fields that do not apply to a kind stay `None`.
#[derive(Debug, Clone, Serialize)]
pub struct AlarmEvent {
    pub kind: AlarmKind,
    pub interface: String,
    pub mac: Option<MacAddr>,
    pub ip: Option<Ipv4Addr>,
    /// For `BindingMismatch`: the MAC recorded in the authoritative binding,
    /// surfacing one MAC claiming another's address.
    pub real_mac: Option<MacAddr>,
    /// For `ScanDetected`: observed neighbor rows on the interface.
    pub count: Option<usize>,
    pub timestamp: DateTime<Utc>,
}

impl AlarmEvent {
    fn base(kind: AlarmKind, interface: &str) -> Self {
        Self {
            kind,
            interface: interface.to_string(),
            mac: None,
            ip: None,
            real_mac: None,
            count: None,
            timestamp: Utc::now(),
        }
    }

    pub fn binding_mismatch(
        interface: &str,
        mac: MacAddr,
        ip: Ipv4Addr,
        real_mac: MacAddr,
    ) -> Self {
        Self {
            mac: Some(mac),
            ip: Some(ip),
            real_mac: Some(real_mac),
            ..Self::base(AlarmKind::BindingMismatch, interface)
        }
    }

    pub fn unknown_mac(interface: &str, mac: MacAddr, ip: Ipv4Addr) -> Self {
        Self {
            mac: Some(mac),
            ip: Some(ip),
            ..Self::base(AlarmKind::UnknownMac, interface)
        }
    }

    pub fn denylisted(interface: &str, mac: MacAddr, ip: Ipv4Addr) -> Self {
        Self {
            mac: Some(mac),
            ip: Some(ip),
            ..Self::base(AlarmKind::Denylisted, interface)
        }
    }

    pub fn allowlisted(interface: &str, mac: MacAddr, ip: Ipv4Addr) -> Self {
        Self {
            mac: Some(mac),
            ip: Some(ip),
            ..Self::base(AlarmKind::Allowlisted, interface)
        }
    }

    pub fn scan_detected(interface: &str, count: usize) -> Self {
        Self {
            count: Some(count),
            ..Self::base(AlarmKind::ScanDetected, interface)
        }
    }

    pub fn learned(interface: &str, mac: MacAddr, ip: Ipv4Addr) -> Self {
        Self {
            mac: Some(mac),
            ip: Some(ip),
            ..Self::base(AlarmKind::Learned, interface)
        }
    }

    /// Whether this event marks the cycle as alarmed and thereby switches
    /// the interval controller to the attack cadence. Allowlist hits are
    /// informational.
    pub fn is_alarm(&self) -> bool {
        !matches!(self.kind, AlarmKind::Allowlisted)
    }
}
