use serde::{Deserialize, Serialize};

/// Event codes carried on the wire.
///
/// Codes are globally unique across all families; the numeric values are
/// fixed by the deployed fleet and must not be reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Event {
    /// Outdoor-zone announcement
    AnnounceOutdoor = 1,
    /// Indoor-zone announcement
    AnnounceIndoor = 2,
    /// Critical announcement
    AnnounceCritical = 3,
    /// Arm receivers
    Arm = 30,
    /// Switch receivers to silent operation
    Silence = 31,
    /// Switch receivers to service mode
    Service = 32,
    /// Disarm receivers
    Stop = 33,
    /// Poll node health
    StatusRequest = 40,
    /// Reply to a health poll
    StatusResponse = 41,
}

impl Event {
    /// Creates an event from its wire code
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::AnnounceOutdoor),
            2 => Some(Self::AnnounceIndoor),
            3 => Some(Self::AnnounceCritical),
            30 => Some(Self::Arm),
            31 => Some(Self::Silence),
            32 => Some(Self::Service),
            33 => Some(Self::Stop),
            40 => Some(Self::StatusRequest),
            41 => Some(Self::StatusResponse),
            _ => None,
        }
    }

    /// Returns the wire code
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Returns the family this event belongs to
    pub fn family(&self) -> EventFamily {
        match self {
            Self::AnnounceOutdoor | Self::AnnounceIndoor | Self::AnnounceCritical => {
                EventFamily::Announcement
            }
            Self::Arm | Self::Silence | Self::Service | Self::Stop => EventFamily::Control,
            Self::StatusRequest => EventFamily::StatusRequest,
            Self::StatusResponse => EventFamily::StatusResponse,
        }
    }

    /// Returns the event name
    pub fn name(&self) -> &'static str {
        match self {
            Self::AnnounceOutdoor => "announce_outdoor",
            Self::AnnounceIndoor => "announce_indoor",
            Self::AnnounceCritical => "announce_critical",
            Self::Arm => "arm",
            Self::Silence => "silence",
            Self::Service => "service",
            Self::Stop => "stop",
            Self::StatusRequest => "status_request",
            Self::StatusResponse => "status_response",
        }
    }
}

/// Event family used by receivers to validate and dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventFamily {
    /// Informational or escalating alerts
    Announcement,
    /// Commands that change a receiver's operating mode
    Control,
    /// Node health poll
    StatusRequest,
    /// Node health reply
    StatusResponse,
    /// Code unknown to this firmware; ignorable, never an error
    Unrecognized,
}

impl EventFamily {
    /// Classifies an arbitrary wire code into its family
    pub fn classify(code: u8) -> Self {
        match Event::from_u8(code) {
            Some(event) => event.family(),
            None => Self::Unrecognized,
        }
    }
}
