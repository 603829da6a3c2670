//! Playback core for the duotone synth.
//!
//! Owns the two tone channels and runs the cooperative pass loop:
//! waveform generation first, then envelope and duration bookkeeping,
//! then at most one inbound command line. Everything the device does is
//! reachable from [`Synth::pass`].
//!
//! Designed to be `no_std` compatible.

#![cfg_attr(not(feature = "std"), no_std)]

mod channel;
mod envelope;
mod generator;
mod pitch;
mod status;
mod sweep;
mod synth;

#[cfg(test)]
pub(crate) mod test_board;

pub use channel::{Bend, Channel, DEFAULT_VOLUME};
pub use envelope::{Envelope, Phase, ATTACK_MS, RELEASE_MS};
pub use generator::{Generator, Mode};
pub use pitch::note_to_hz;
pub use status::{channel_line, LINE_CAP};
pub use sweep::{Sweep, SWEEP_STEP_MS};
pub use synth::Synth;
