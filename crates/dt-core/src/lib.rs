//! Core types for the duotone synth.
//!
//! This crate defines the vocabulary shared across the workspace: the
//! decoded command set, the board abstraction the engine drives, and the
//! numeric limits and clock arithmetic everything agrees on. The protocol
//! parser emits [`Command`] values, and the engine consumes them against
//! a [`Board`].
//!
//! Designed to be `no_std` compatible.

#![cfg_attr(not(feature = "std"), no_std)]

mod board;
mod clock;
mod command;
mod limits;

pub use board::Board;
pub use clock::{elapsed, remaining};
pub use command::Command;
pub use limits::{
    clamp_frequency, clamp_volume, CHANNEL_COUNT, FREQ_MAX_HZ, FREQ_MIN_HZ,
    SOFTWARE_TOGGLE_MAX_HZ, TOGGLE_INTERVAL_MIN_US, VOLUME_MAX,
};
