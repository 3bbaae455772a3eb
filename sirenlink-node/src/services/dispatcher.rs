use std::collections::BTreeMap;

use sirenlink_api::event::EventFamily;
use sirenlink_api::identity;
use sirenlink_api::wire::Packet;

use crate::errors::Result;

/// Packet handler abstraction, implemented by the application layer.
pub trait PacketHandler: Send + Sync {
    /// Process a routed packet
    fn handle_packet(&mut self, packet: &Packet) -> std::result::Result<(), HandlerError>;

    /// Event families this handler subscribes to
    fn families(&self) -> Vec<EventFamily>;

    /// Handler name for logging
    fn name(&self) -> &'static str;
}

#[derive(Debug, thiserror::Error)]
#[error("Handler failure: {0}")]
pub struct HandlerError(pub String);

/// Routes decoded packets to registered handlers by event family.
///
/// Malformed frames and frames from senders outside the registry are
/// dropped and counted; unrecognized event codes are ignorable by design
/// so firmware built against an older vocabulary keeps working.
pub struct Dispatcher {
    handlers: BTreeMap<u32, Box<dyn PacketHandler>>,
    family_handlers: BTreeMap<EventFamily, Vec<u32>>,
    next_handler_id: u32,
    stats: DispatcherStats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatcherStats {
    /// Frames handed to the dispatcher
    pub received: u64,
    /// Frames routed to at least one handler
    pub routed: u64,
    /// Frames dropped for a wrong wire size
    pub dropped_malformed: u64,
    /// Frames dropped for a sender outside the registry
    pub dropped_unknown_sender: u64,
    /// Frames with an event code unknown to this build, ignored
    pub unrecognized: u64,
    /// Frames with no handler registered for their family
    pub unroutable: u64,
    /// Handler invocations that returned an error
    pub handler_failures: u64,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            handlers: BTreeMap::new(),
            family_handlers: BTreeMap::new(),
            next_handler_id: 1,
            stats: DispatcherStats::default(),
        }
    }

    /// Registers a handler, returning its id
    pub fn register_handler(&mut self, handler: Box<dyn PacketHandler>) -> u32 {
        let handler_id = self.next_handler_id;
        self.next_handler_id += 1;

        for family in handler.families() {
            self.family_handlers
                .entry(family)
                .or_default()
                .push(handler_id);
        }
        self.handlers.insert(handler_id, handler);

        handler_id
    }

    /// Unregisters a handler by id
    pub fn unregister_handler(&mut self, handler_id: u32) -> bool {
        if self.handlers.remove(&handler_id).is_some() {
            for ids in self.family_handlers.values_mut() {
                ids.retain(|&id| id != handler_id);
            }
            true
        } else {
            false
        }
    }

    pub fn stats(&self) -> DispatcherStats {
        self.stats
    }

    /// Decodes, validates and routes one received frame.
    ///
    /// Errors mean the frame was dropped; they are never fatal to the run
    /// loop.
    pub fn dispatch_frame(&mut self, frame: &[u8]) -> Result<()> {
        self.stats.received += 1;

        let packet = match Packet::decode(frame) {
            Ok(packet) => packet,
            Err(e) => {
                self.stats.dropped_malformed += 1;
                tracing::warn!(len = frame.len(), "dropping malformed frame");
                return Err(e.into());
            }
        };

        let sender = match identity::lookup_raw(packet.sender) {
            Ok(entry) => entry,
            Err(e) => {
                self.stats.dropped_unknown_sender += 1;
                tracing::warn!(sender = packet.sender, "dropping frame from unknown sender");
                return Err(e.into());
            }
        };

        let family = packet.event_family();
        let handler_ids = self
            .family_handlers
            .get(&family)
            .cloned()
            .unwrap_or_default();

        if handler_ids.is_empty() {
            if family == EventFamily::Unrecognized {
                self.stats.unrecognized += 1;
                tracing::debug!(
                    event = packet.event,
                    sender = sender.device.name(),
                    "ignoring unrecognized event code"
                );
            } else {
                self.stats.unroutable += 1;
                tracing::debug!(event = packet.event, "no handler for event family");
            }
            return Ok(());
        }

        for handler_id in handler_ids {
            if let Some(handler) = self.handlers.get_mut(&handler_id) {
                if let Err(e) = handler.handle_packet(&packet) {
                    self.stats.handler_failures += 1;
                    tracing::warn!(handler = handler.name(), error = %e, "handler failed");
                }
            }
        }

        self.stats.routed += 1;
        Ok(())
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
