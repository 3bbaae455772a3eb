use core::fmt;

use alloc::string::String;

use super::packet::WIRE_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    /// Frame length differs from the fixed wire size
    Length(usize),
    /// Link-level read or write failed
    Io(String),
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(len) => {
                write!(f, "Malformed frame: {} bytes, expected {}", len, WIRE_SIZE)
            }
            Self::Io(e) => write!(f, "Link IO error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WireError {}

pub type Result<T> = core::result::Result<T, WireError>;
