use sirenlink_api::event::Event;
use sirenlink_api::identity::Identity;
use sirenlink_api::wire::Packet;

use crate::configs::Settings;
use crate::errors::Result;
use crate::services::{Dispatcher, DispatcherStats, PacketHandler};

/// A running node: its bound identity plus the inbound dispatch path.
pub struct App {
    identity: Identity,
    dispatcher: Dispatcher,
}

impl App {
    /// Resolves the node identity from settings and wires the dispatcher.
    ///
    /// A missing or ambiguous role selection is fatal here, before any
    /// frame is accepted.
    pub fn new(settings: &Settings) -> Result<Self> {
        let identity = Identity::from_selection(&settings.identity.selected())?;

        if let Some(cellular) = &settings.cellular {
            if cellular.enabled && !identity.modem_uplink() {
                tracing::warn!(
                    device = identity.device.name(),
                    "cellular uplink enabled for a role without modem capability"
                );
            }
        }

        tracing::info!(device = identity.device.name(), mac = %identity.mac, "node identity bound");

        Ok(Self {
            identity,
            dispatcher: Dispatcher::new(),
        })
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn register_handler(&mut self, handler: Box<dyn PacketHandler>) -> u32 {
        self.dispatcher.register_handler(handler)
    }

    pub fn unregister_handler(&mut self, handler_id: u32) -> bool {
        self.dispatcher.unregister_handler(handler_id)
    }

    pub fn stats(&self) -> DispatcherStats {
        self.dispatcher.stats()
    }

    /// Routes one received frame through the dispatcher
    pub fn handle_frame(&mut self, frame: &[u8]) -> Result<()> {
        self.dispatcher.dispatch_frame(frame)
    }

    /// Builds an outgoing packet stamped with this node's identity
    pub fn compose(&self, event: Event, info: u32) -> Packet {
        Packet::compose(&self.identity, event, info)
    }
}
