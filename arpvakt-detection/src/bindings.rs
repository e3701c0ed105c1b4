//! Trusted binding stores.
//!
//! A binding associates an interface and MAC with an optional expected IP.
//! The static store is loaded once from an operator-curated file and never
//! changes; the dynamic store starts empty and grows append-only through
//! the learning engine. Both use the same ordered store with a first-match
//! lookup.
//!
//! List format, line-oriented: `<interface> <MAC> [<IP>] [# comment]`.
//! A line whose first non-whitespace character is `#` is ignored entirely;
//! trailing `#...` after the fields is stripped as a comment.

use std::io;
use std::net::Ipv4Addr;
use std::path::Path;

use parking_lot::RwLock;
use tracing::warn;

use arpvakt_core::net::MacAddr;

/// One trusted (interface, MAC, optional IP) association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub interface: String,
    pub mac: MacAddr,
    /// Absent means the MAC alone is sufficient to match on the interface.
    pub ip: Option<Ipv4Addr>,
}

/// Ordered binding records with a deterministic first-match lookup.
///
/// Insertion order is file order for loaded stores and learning order for
/// dynamic stores. When duplicate lines exist for the same (interface, MAC),
/// the first record wins; later duplicates are retained but never consulted.
#[derive(Debug, Default)]
pub struct BindingStore {
    records: RwLock<Vec<Binding>>,
}

impl BindingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a binding list from text, skipping comment, empty, and
    /// malformed lines.
    pub fn parse(text: &str) -> Self {
        let store = Self::new();
        for line in text.lines() {
            if let Some(binding) = parse_binding_line(line) {
                store.binding_add(binding);
            }
        }
        store
    }

    /// Loads a binding list file. A missing file degrades to an empty
    /// store; that disables the check without failing startup.
    pub fn load_path(path: impl AsRef<Path>) -> io::Result<Self> {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(text) => Ok(Self::parse(&text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::new()),
            Err(err) => Err(err),
        }
    }

    /// Appends a record, preserving insertion order.
    pub fn binding_add(&self, binding: Binding) {
        self.records.write().push(binding);
    }

    /// First record matching the (interface, MAC) pair, in store order.
    /// This is the tie-break policy for duplicate entries.
    pub fn lookup(&self, interface: &str, mac: MacAddr) -> Option<Binding> {
        self.records
            .read()
            .iter()
            .find(|b| b.interface == interface && b.mac == mac)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

fn parse_binding_line(line: &str) -> Option<Binding> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    // Everything after a '#' is a comment.
    let line = line.split('#').next().unwrap_or("");

    let mut fields = line.split_whitespace();
    let interface = fields.next()?;
    let Some(mac_field) = fields.next() else {
        warn!(line, "binding line missing MAC field, skipped");
        return None;
    };
    let mac: MacAddr = match mac_field.parse() {
        Ok(mac) => mac,
        Err(_) => {
            warn!(field = mac_field, "binding line with unparseable MAC, skipped");
            return None;
        }
    };
    let ip = match fields.next() {
        Some(ip_field) => match ip_field.parse::<Ipv4Addr>() {
            Ok(ip) => Some(ip),
            Err(_) => {
                warn!(field = ip_field, "binding line with unparseable IP, skipped");
                return None;
            }
        },
        None => None,
    };

    Some(Binding {
        interface: interface.to_string(),
        mac,
        ip,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mac(s: &str) -> MacAddr {
        s.parse().unwrap()
    }

    #[test]
    fn parses_interface_mac_and_optional_ip() {
        let store = BindingStore::parse(
            "eth0 00:11:22:33:44:55 192.168.1.10\n\
             eth1 aa:bb:cc:dd:ee:ff\n",
        );
        assert_eq!(store.len(), 2);

        let with_ip = store.lookup("eth0", mac("00:11:22:33:44:55")).unwrap();
        assert_eq!(with_ip.ip, Some("192.168.1.10".parse().unwrap()));

        let mac_only = store.lookup("eth1", mac("aa:bb:cc:dd:ee:ff")).unwrap();
        assert_eq!(mac_only.ip, None);
    }

    #[test]
    fn ignores_comments_and_blank_lines() {
        let store = BindingStore::parse(
            "# header comment\n\
             \n\
             eth0 00:11:22:33:44:55 192.168.1.10 # gateway\n",
        );
        assert_eq!(store.len(), 1);
        let binding = store.lookup("eth0", mac("00:11:22:33:44:55")).unwrap();
        assert_eq!(binding.ip, Some("192.168.1.10".parse().unwrap()));
    }

    #[test]
    fn skips_malformed_lines() {
        let store = BindingStore::parse(
            "eth0\n\
             eth0 not-a-mac\n\
             eth0 00:11:22:33:44:55 not-an-ip\n\
             eth0 00:11:22:33:44:55\n",
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn first_match_wins_on_duplicates() {
        let store = BindingStore::parse(
            "eth0 00:11:22:33:44:55 192.168.1.10\n\
             eth0 00:11:22:33:44:55 192.168.1.20\n",
        );
        let binding = store.lookup("eth0", mac("00:11:22:33:44:55")).unwrap();
        assert_eq!(binding.ip, Some("192.168.1.10".parse().unwrap()));
    }

    #[test]
    fn lookup_is_scoped_to_the_interface() {
        let store = BindingStore::parse("eth0 00:11:22:33:44:55 192.168.1.10\n");
        assert!(store.lookup("eth1", mac("00:11:22:33:44:55")).is_none());
    }

    #[test]
    fn missing_file_degrades_to_empty_store() {
        let store = BindingStore::load_path("/nonexistent/bindings").unwrap();
        assert!(store.is_empty());
    }
}
