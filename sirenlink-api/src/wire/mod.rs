mod error;
mod packet;

pub use error::{Result, WireError};
pub use packet::{Packet, WIRE_SIZE};
