use core::fmt;

use super::device::{DeviceId, MacAddress};

/// One row of the fleet registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
    /// Logical device identity
    pub device: DeviceId,
    /// Hardware address bound to the device
    pub mac: MacAddress,
    /// Device bridges to a cellular modem; read by the transport layer
    pub modem_uplink: bool,
}

const MAC_SIREN1: MacAddress = MacAddress::new([0x90, 0x15, 0x06, 0xFA, 0x7E, 0x48]);
const MAC_SIREN2: MacAddress = MacAddress::new([0xF0, 0x24, 0xF9, 0xBC, 0x58, 0x24]);
const MAC_SIREN3: MacAddress = MacAddress::new([0xF0, 0x24, 0xF9, 0xBA, 0xDC, 0x10]);
const MAC_SIREN5: MacAddress = MacAddress::new([0xF0, 0x24, 0xF9, 0xBB, 0x43, 0xB8]);
const MAC_SIREN8: MacAddress = MacAddress::new([0xF0, 0x24, 0xF9, 0xBB, 0x4E, 0xD0]);
const MAC_HANDHELD1: MacAddress = MacAddress::new([0xF0, 0x24, 0xF9, 0x98, 0xAD, 0xA8]);
const MAC_COORDINATOR: MacAddress = MacAddress::new([0xCC, 0x7B, 0x5C, 0x31, 0x01, 0x00]);

/// Compiled-in fleet registry.
///
/// Updating an address means rebuilding every firmware image; there is no
/// runtime mutation path.
pub static REGISTRY: [RegistryEntry; 7] = [
    RegistryEntry {
        device: DeviceId::Siren1,
        mac: MAC_SIREN1,
        modem_uplink: false,
    },
    RegistryEntry {
        device: DeviceId::Siren2,
        mac: MAC_SIREN2,
        modem_uplink: false,
    },
    RegistryEntry {
        device: DeviceId::Siren3,
        mac: MAC_SIREN3,
        modem_uplink: false,
    },
    RegistryEntry {
        device: DeviceId::Siren5,
        mac: MAC_SIREN5,
        modem_uplink: false,
    },
    RegistryEntry {
        device: DeviceId::Siren8,
        mac: MAC_SIREN8,
        modem_uplink: false,
    },
    RegistryEntry {
        device: DeviceId::Handheld1,
        mac: MAC_HANDHELD1,
        modem_uplink: false,
    },
    RegistryEntry {
        device: DeviceId::Coordinator,
        mac: MAC_COORDINATOR,
        modem_uplink: true,
    },
];

/// Returns the registry row for a known device
pub fn entry(device: DeviceId) -> &'static RegistryEntry {
    let index = match device {
        DeviceId::Siren1 => 0,
        DeviceId::Siren2 => 1,
        DeviceId::Siren3 => 2,
        DeviceId::Siren5 => 3,
        DeviceId::Siren8 => 4,
        DeviceId::Handheld1 => 5,
        DeviceId::Coordinator => 6,
    };
    &REGISTRY[index]
}

/// Returns the hardware address bound to a known device
pub fn lookup(device: DeviceId) -> MacAddress {
    entry(device).mac
}

/// Resolves a raw wire id against the registry.
///
/// An unknown id is a configuration defect; callers must drop the packet
/// rather than guess a fallback address.
pub fn lookup_raw(id: u8) -> Result<&'static RegistryEntry, RegistryError> {
    match DeviceId::from_u8(id) {
        Some(device) => Ok(entry(device)),
        None => Err(RegistryError::UnknownDevice(id)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// Device id outside the fixed registry
    UnknownDevice(u8),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDevice(id) => write!(f, "Unknown device id: {}", id),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RegistryError {}
