//! Per-interface binding classification.
//!
//! Invoked once per configured interface group (static, then dynamic after
//! learning). The two groups use disjoint interface sets and never share a
//! binding store.

use tracing::{debug, warn};

use arpvakt_core::events::AlarmEvent;
use arpvakt_core::net::NeighborEntry;

use crate::bindings::{Binding, BindingStore};

/// Disposition of one observed (interface, MAC, IP) against a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// A binding matched; `ip_checked` is false for MAC-only bindings with
    /// no declared IP to compare against.
    Ok { ip_checked: bool },
    /// No binding exists for the (interface, MAC) pair.
    UnknownMac,
    /// The authoritative binding declares a different IP.
    Mismatch { bound: Binding },
}

/// Classifies the entries of one interface group against its binding store.
pub struct Classifier<'a> {
    store: &'a BindingStore,
    interfaces: &'a [String],
}

impl<'a> Classifier<'a> {
    pub fn new(store: &'a BindingStore, interfaces: &'a [String]) -> Self {
        Self { store, interfaces }
    }

    /// Pure disposition of a single entry against the store.
    pub fn classify_entry(store: &BindingStore, entry: &NeighborEntry) -> Disposition {
        match store.lookup(&entry.interface, entry.mac) {
            None => Disposition::UnknownMac,
            Some(binding) => match binding.ip {
                None => Disposition::Ok { ip_checked: false },
                Some(bound_ip) if bound_ip == entry.ip => Disposition::Ok { ip_checked: true },
                Some(_) => Disposition::Mismatch { bound: binding },
            },
        }
    }

    /// Runs the group's entries through classification, emitting alarm
    /// events for anomalies and debug lines for clean matches.
    pub fn classify(&self, working_set: &[NeighborEntry]) -> Vec<AlarmEvent> {
        let mut events = Vec::new();
        for entry in working_set {
            if !self.interfaces.contains(&entry.interface) {
                continue;
            }
            match Self::classify_entry(self.store, entry) {
                Disposition::Ok { ip_checked } => {
                    debug!(
                        interface = %entry.interface,
                        mac = %entry.mac,
                        ip = %entry.ip,
                        ip_checked,
                        "binding ok"
                    );
                }
                Disposition::UnknownMac => {
                    warn!(
                        interface = %entry.interface,
                        mac = %entry.mac,
                        ip = %entry.ip,
                        "unknown MAC"
                    );
                    events.push(AlarmEvent::unknown_mac(&entry.interface, entry.mac, entry.ip));
                }
                Disposition::Mismatch { bound } => {
                    warn!(
                        interface = %entry.interface,
                        mac = %entry.mac,
                        observed_ip = %entry.ip,
                        bound_ip = ?bound.ip,
                        "binding mismatch"
                    );
                    events.push(AlarmEvent::binding_mismatch(
                        &entry.interface,
                        entry.mac,
                        entry.ip,
                        bound.mac,
                    ));
                }
            }
        }
        events
    }
}
