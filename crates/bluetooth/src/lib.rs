//! Bluetooth audio sink pairing - a non-blocking monitor polled from the
//! navigation loop while the sink comes up.
//!
//! This crate is `no_std` by default; it only uses `core`, `embassy-time`
//! and the platform traits.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![allow(missing_docs)]

pub mod pairing;
pub mod state;

pub use pairing::PairingMonitor;
pub use state::PairingState;
