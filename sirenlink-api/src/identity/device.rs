use core::fmt;

use serde::{Deserialize, Serialize};

/// Logical device identity within the fleet.
///
/// Ids are stable, unique and fixed by the deployed hardware; variant
/// numbering follows the unit labels printed on the enclosures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DeviceId {
    /// Wall siren, unit 1
    Siren1 = 3,
    /// Wall siren, unit 2
    Siren2 = 4,
    /// Wall siren, unit 3
    Siren3 = 5,
    /// Wall siren, unit 5
    Siren5 = 7,
    /// Wall siren, unit 8 (covers the critical zone)
    Siren8 = 8,
    /// Handheld remote
    Handheld1 = 9,
    /// Central coordinator
    Coordinator = 99,
}

impl DeviceId {
    /// Creates a device id from its wire value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            3 => Some(Self::Siren1),
            4 => Some(Self::Siren2),
            5 => Some(Self::Siren3),
            7 => Some(Self::Siren5),
            8 => Some(Self::Siren8),
            9 => Some(Self::Handheld1),
            99 => Some(Self::Coordinator),
            _ => None,
        }
    }

    /// Returns the wire value
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Returns the role name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Siren1 => "siren1",
            Self::Siren2 => "siren2",
            Self::Siren3 => "siren3",
            Self::Siren5 => "siren5",
            Self::Siren8 => "siren8",
            Self::Handheld1 => "handheld1",
            Self::Coordinator => "coordinator",
        }
    }

    /// True for the distinguished coordinator role
    pub fn is_coordinator(&self) -> bool {
        matches!(self, Self::Coordinator)
    }
}

/// 6-byte hardware address of a radio interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// True when no address has been stamped
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 6]
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            a, b, c, d, e, g
        )
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(octets: [u8; 6]) -> Self {
        Self(octets)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::*;

    const ALL_DEVICES: [DeviceId; 7] = [
        DeviceId::Siren1,
        DeviceId::Siren2,
        DeviceId::Siren3,
        DeviceId::Siren5,
        DeviceId::Siren8,
        DeviceId::Handheld1,
        DeviceId::Coordinator,
    ];

    #[test]
    fn test_device_ids_are_stable() {
        assert_eq!(DeviceId::Siren1.code(), 3);
        assert_eq!(DeviceId::Siren2.code(), 4);
        assert_eq!(DeviceId::Siren3.code(), 5);
        assert_eq!(DeviceId::Siren5.code(), 7);
        assert_eq!(DeviceId::Siren8.code(), 8);
        assert_eq!(DeviceId::Handheld1.code(), 9);
        assert_eq!(DeviceId::Coordinator.code(), 99);
    }

    #[test]
    fn test_device_ids_are_unique() {
        let mut codes: Vec<u8> = ALL_DEVICES.iter().map(|d| d.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ALL_DEVICES.len());
    }

    #[test]
    fn test_device_from_u8_round_trip() {
        for device in ALL_DEVICES {
            assert_eq!(DeviceId::from_u8(device.code()), Some(device));
        }
        assert_eq!(DeviceId::from_u8(0), None);
        assert_eq!(DeviceId::from_u8(6), None);
        assert_eq!(DeviceId::from_u8(100), None);
    }

    #[test]
    fn test_coordinator_is_distinguished_by_role() {
        assert!(DeviceId::Coordinator.is_coordinator());
        for device in ALL_DEVICES.iter().filter(|d| **d != DeviceId::Coordinator) {
            assert!(!device.is_coordinator());
        }
    }

    #[test]
    fn test_mac_address_display() {
        let mac = MacAddress::new([0xCC, 0x7B, 0x5C, 0x31, 0x01, 0x00]);
        assert_eq!(mac.to_string(), "CC:7B:5C:31:01:00");
    }

    #[test]
    fn test_mac_address_zero() {
        assert!(MacAddress::new([0; 6]).is_zero());
        assert!(!MacAddress::new([0, 0, 0, 0, 0, 1]).is_zero());
    }
}
