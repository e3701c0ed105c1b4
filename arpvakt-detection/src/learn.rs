//! Growth-only dynamic learning.
//!
//! Runs immediately before classification of the dynamic group. A MAC with
//! no existing dynamic binding is appended with its observed IP, so the
//! classifier finds it and reports ok in the same cycle. Learned bindings
//! are never removed or expired within a run.

use tracing::info;

use arpvakt_core::events::AlarmEvent;
use arpvakt_core::net::NeighborEntry;

use crate::bindings::{Binding, BindingStore};

pub struct LearningEngine<'a> {
    store: &'a BindingStore,
    interfaces: &'a [String],
}

impl<'a> LearningEngine<'a> {
    pub fn new(store: &'a BindingStore, interfaces: &'a [String]) -> Self {
        Self { store, interfaces }
    }

    /// Appends first-seen MACs on dynamic interfaces and returns the
    /// `Learned` events. A first-seen device switches the loop to the
    /// attack cadence, so new arrivals get watched closely.
    pub fn learn(&self, working_set: &[NeighborEntry]) -> Vec<AlarmEvent> {
        let mut events = Vec::new();
        for entry in working_set {
            if !self.interfaces.contains(&entry.interface) {
                continue;
            }
            if self.store.lookup(&entry.interface, entry.mac).is_some() {
                continue;
            }
            info!(
                interface = %entry.interface,
                mac = %entry.mac,
                ip = %entry.ip,
                "learned new binding"
            );
            self.store.binding_add(Binding {
                interface: entry.interface.clone(),
                mac: entry.mac,
                ip: Some(entry.ip),
            });
            events.push(AlarmEvent::learned(&entry.interface, entry.mac, entry.ip));
        }
        events
    }
}
