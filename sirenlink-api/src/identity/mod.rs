mod device;
mod registry;

use core::fmt;

use serde::{Deserialize, Serialize};

pub use device::{DeviceId, MacAddress};
pub use registry::{REGISTRY, RegistryEntry, RegistryError, entry, lookup, lookup_raw};

/// The identity a running node is bound to.
///
/// Resolved exactly once at process start and read-only afterwards; every
/// outgoing packet is stamped with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Logical device identity
    pub device: DeviceId,
    /// Hardware address bound to the device
    pub mac: MacAddress,
}

impl Identity {
    /// Binds an identity from the set of selected roles.
    ///
    /// Exactly one role must be selected; zero or several selections are a
    /// configuration error and the node must refuse to start.
    pub fn from_selection(selected: &[DeviceId]) -> Result<Self, IdentityError> {
        match selected {
            [] => Err(IdentityError::NotSelected),
            [device] => Ok(Self {
                device: *device,
                mac: registry::lookup(*device),
            }),
            more => Err(IdentityError::Ambiguous(more.len())),
        }
    }

    /// True when this node bridges to a cellular modem
    pub fn modem_uplink(&self) -> bool {
        registry::entry(self.device).modem_uplink
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.device.name(), self.mac)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityError {
    /// No role selected
    NotSelected,
    /// More than one role selected
    Ambiguous(usize),
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSelected => write!(f, "No device role selected"),
            Self::Ambiguous(count) => {
                write!(f, "Ambiguous identity: {} roles selected", count)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IdentityError {}
