//! Denylist/allowlist pre-screen.
//!
//! Runs before classification. An allowlist hit removes the entry from the
//! cycle's working set, so no further check ever sees it. A denylist hit
//! raises an alarm but the entry still flows on to classification.
//!
//! List format, line-oriented: `<interface[,interface,...]|all> <MAC>`,
//! with any trailing fields ignored.

use std::io;
use std::path::Path;

use tracing::warn;

use arpvakt_core::events::AlarmEvent;
use arpvakt_core::net::{MacAddr, NeighborEntry};

/// Interfaces a filter rule applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceScope {
    /// The literal `all` scope: matches every interface.
    All,
    Named(Vec<String>),
}

impl InterfaceScope {
    fn parse(field: &str) -> Self {
        if field == "all" {
            InterfaceScope::All
        } else {
            InterfaceScope::Named(field.split(',').map(str::to_string).collect())
        }
    }

    pub fn covers(&self, interface: &str) -> bool {
        match self {
            InterfaceScope::All => true,
            InterfaceScope::Named(names) => names.iter().any(|n| n == interface),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRule {
    pub scope: InterfaceScope,
    pub mac: MacAddr,
}

/// An ordered set of MAC-level filter rules.
#[derive(Debug, Clone, Default)]
pub struct FilterList {
    rules: Vec<FilterRule>,
}

impl FilterList {
    pub fn parse(text: &str) -> Self {
        let mut rules = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split_whitespace();
            let Some(scope_field) = fields.next() else {
                continue;
            };
            let Some(mac_field) = fields.next() else {
                warn!(line, "filter line missing MAC field, skipped");
                continue;
            };
            let mac: MacAddr = match mac_field.parse() {
                Ok(mac) => mac,
                Err(_) => {
                    warn!(field = mac_field, "filter line with unparseable MAC, skipped");
                    continue;
                }
            };
            // Trailing fields are ignored.
            rules.push(FilterRule {
                scope: InterfaceScope::parse(scope_field),
                mac,
            });
        }
        Self { rules }
    }

    /// Loads a filter list file. A missing file means zero rules and the
    /// feature stays silently inert.
    pub fn load_path(path: impl AsRef<Path>) -> io::Result<Self> {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(text) => Ok(Self::parse(&text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err),
        }
    }

    pub fn matches(&self, interface: &str, mac: MacAddr) -> bool {
        self.rules
            .iter()
            .any(|rule| rule.mac == mac && rule.scope.covers(interface))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Outcome of screening one cycle's working set.
#[derive(Debug, Default)]
pub struct ScreenOutcome {
    pub events: Vec<AlarmEvent>,
    /// Entries that proceed to learning and classification.
    pub retained: Vec<NeighborEntry>,
}

#[derive(Debug, Default)]
pub struct DenyAllowFilter {
    deny: FilterList,
    allow: FilterList,
}

impl DenyAllowFilter {
    pub fn new(deny: FilterList, allow: FilterList) -> Self {
        Self { deny, allow }
    }

    /// Screens the working set. Allowlisted entries are removed before any
    /// other check sees them, which also suppresses denylist alarms for the
    /// same MAC. Denylisted entries alarm and stay in the set.
    pub fn screen(&self, working_set: Vec<NeighborEntry>) -> ScreenOutcome {
        let mut outcome = ScreenOutcome::default();
        for entry in working_set {
            if self.allow.matches(&entry.interface, entry.mac) {
                outcome
                    .events
                    .push(AlarmEvent::allowlisted(&entry.interface, entry.mac, entry.ip));
                continue;
            }
            if self.deny.matches(&entry.interface, entry.mac) {
                outcome
                    .events
                    .push(AlarmEvent::denylisted(&entry.interface, entry.mac, entry.ip));
            }
            outcome.retained.push(entry);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arpvakt_core::events::AlarmKind;

    fn mac(s: &str) -> MacAddr {
        s.parse().unwrap()
    }

    fn entry(interface: &str, ip: &str, mac_s: &str) -> NeighborEntry {
        NeighborEntry::new(ip.parse().unwrap(), mac(mac_s), interface)
    }

    #[test]
    fn all_scope_matches_any_interface() {
        let list = FilterList::parse("all 11:22:33:44:55:66\n");
        assert!(list.matches("eth0", mac("11:22:33:44:55:66")));
        assert!(list.matches("wlan3", mac("11:22:33:44:55:66")));
    }

    #[test]
    fn comma_scope_applies_to_each_named_interface() {
        let list = FilterList::parse("eth0,eth2 11:22:33:44:55:66 trailing text ignored\n");
        assert!(list.matches("eth0", mac("11:22:33:44:55:66")));
        assert!(list.matches("eth2", mac("11:22:33:44:55:66")));
        assert!(!list.matches("eth1", mac("11:22:33:44:55:66")));
    }

    #[test]
    fn denylisted_entries_alarm_but_stay_in_the_set() {
        let filter = DenyAllowFilter::new(
            FilterList::parse("all 11:22:33:44:55:66\n"),
            FilterList::default(),
        );
        let outcome = filter.screen(vec![entry("eth0", "10.0.0.9", "11:22:33:44:55:66")]);
        assert_eq!(outcome.events.len(), 1);
        assert_eq!(outcome.events[0].kind, AlarmKind::Denylisted);
        assert_eq!(outcome.retained.len(), 1);
    }

    #[test]
    fn allowlisted_entries_are_removed_before_classification() {
        let filter = DenyAllowFilter::new(
            FilterList::default(),
            FilterList::parse("eth0 11:22:33:44:55:66\n"),
        );
        let outcome = filter.screen(vec![
            entry("eth0", "10.0.0.9", "11:22:33:44:55:66"),
            entry("eth0", "10.0.0.10", "aa:bb:cc:dd:ee:ff"),
        ]);
        assert_eq!(outcome.events.len(), 1);
        assert_eq!(outcome.events[0].kind, AlarmKind::Allowlisted);
        assert_eq!(outcome.retained.len(), 1);
        assert_eq!(outcome.retained[0].mac, mac("aa:bb:cc:dd:ee:ff"));
    }

    #[test]
    fn allowlist_suppresses_denylist_for_the_same_mac() {
        let filter = DenyAllowFilter::new(
            FilterList::parse("all 11:22:33:44:55:66\n"),
            FilterList::parse("all 11:22:33:44:55:66\n"),
        );
        let outcome = filter.screen(vec![entry("eth0", "10.0.0.9", "11:22:33:44:55:66")]);
        assert_eq!(outcome.events.len(), 1);
        assert_eq!(outcome.events[0].kind, AlarmKind::Allowlisted);
        assert!(outcome.retained.is_empty());
    }

    #[test]
    fn missing_file_is_silently_inert() {
        let list = FilterList::load_path("/nonexistent/denylist").unwrap();
        assert!(list.is_empty());
    }
}
