#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod event;
pub mod identity;
pub mod transport;
pub mod wire;
