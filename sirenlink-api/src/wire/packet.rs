use serde::{Deserialize, Serialize};

use crate::event::{Event, EventFamily};
use crate::identity::{Identity, MacAddress};

use super::error::WireError;

/// Fixed size of one packet on the wire.
///
/// sender(1) + event(1) + info(4) + source_mac(6). The radio moves raw
/// bytes with no framing or length prefix, so the layout is byte-exact and
/// padding-free by construction.
pub const WIRE_SIZE: usize = 12;

/// One notification as carried on the radio link.
///
/// `sender` and `event` stay raw u8 so a frame from newer firmware decodes
/// on older receivers; typed views go through [`EventFamily::classify`] and
/// the identity registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packet {
    /// Logical device id of the sender
    pub sender: u8,
    /// Event code
    pub event: u8,
    /// Auxiliary payload (uptime ms, ADC reading, ...)
    pub info: u32,
    /// Hardware address of the sender, all-zero when not stamped
    pub source_mac: MacAddress,
}

impl Packet {
    /// Builds an outgoing packet stamped with the node's own identity
    pub fn compose(identity: &Identity, event: Event, info: u32) -> Self {
        Self {
            sender: identity.device.code(),
            event: event.code(),
            info,
            source_mac: identity.mac,
        }
    }

    /// Serializes the packet into its fixed wire layout.
    ///
    /// Field-by-field writes, `info` little-endian; bit-for-bit identical
    /// on every platform.
    pub fn encode(&self) -> [u8; WIRE_SIZE] {
        let mut buffer = [0u8; WIRE_SIZE];
        buffer[0] = self.sender;
        buffer[1] = self.event;
        buffer[2..6].copy_from_slice(&self.info.to_le_bytes());
        buffer[6..12].copy_from_slice(&self.source_mac.octets());
        buffer
    }

    /// Deserializes a packet from a received frame.
    ///
    /// Refuses any input that is not exactly [`WIRE_SIZE`] bytes; callers
    /// drop such frames instead of attempting a partial decode.
    pub fn decode(data: &[u8]) -> Result<Self, WireError> {
        if data.len() != WIRE_SIZE {
            return Err(WireError::Length(data.len()));
        }

        let mut info = [0u8; 4];
        info.copy_from_slice(&data[2..6]);

        let mut mac = [0u8; 6];
        mac.copy_from_slice(&data[6..12]);

        Ok(Self {
            sender: data[0],
            event: data[1],
            info: u32::from_le_bytes(info),
            source_mac: MacAddress::new(mac),
        })
    }

    /// Classifies the event code of this packet
    pub fn event_family(&self) -> EventFamily {
        EventFamily::classify(self.event)
    }
}
