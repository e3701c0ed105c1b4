//! Hardware (MAC) address newtype.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// A 6-byte link-layer address.
///
/// The all-zero value is the kernel's sentinel for an incomplete neighbor
/// resolution and never appears in a trusted binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddr([u8; 6]);

impl MacAddr {
    pub const ZERO: MacAddr = MacAddr([0; 6]);

    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// True for the kernel's incomplete-resolution sentinel.
    pub fn is_zero(&self) -> bool {
        self.0 == [0; 6]
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

impl FromStr for MacAddr {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut octets = [0u8; 6];
        let mut parts = s.split(':');
        for octet in octets.iter_mut() {
            let part = parts
                .next()
                .ok_or_else(|| CoreError::InvalidMac(s.to_string()))?;
            *octet = u8::from_str_radix(part, 16)
                .map_err(|_| CoreError::InvalidMac(s.to_string()))?;
        }
        if parts.next().is_some() {
            return Err(CoreError::InvalidMac(s.to_string()));
        }
        Ok(MacAddr(octets))
    }
}

impl Serialize for MacAddr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MacAddr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_colon_separated_hex() {
        let mac: MacAddr = "00:11:22:aa:BB:cc".parse().unwrap();
        assert_eq!(mac.octets(), [0x00, 0x11, 0x22, 0xaa, 0xbb, 0xcc]);
    }

    #[test]
    fn rejects_short_and_long_forms() {
        assert!("00:11:22:33:44".parse::<MacAddr>().is_err());
        assert!("00:11:22:33:44:55:66".parse::<MacAddr>().is_err());
        assert!("00:11:22:33:44:zz".parse::<MacAddr>().is_err());
    }

    #[test]
    fn zero_sentinel() {
        let mac: MacAddr = "00:00:00:00:00:00".parse().unwrap();
        assert!(mac.is_zero());
        assert_eq!(mac, MacAddr::ZERO);
    }

    proptest! {
        #[test]
        fn display_parse_round_trip(octets in proptest::array::uniform6(any::<u8>())) {
            let mac = MacAddr::new(octets);
            let parsed: MacAddr = mac.to_string().parse().unwrap();
            prop_assert_eq!(mac, parsed);
        }
    }
}
