//! Host-side boards for the duotone synth core.
//!
//! [`SimBoard`] renders the device's two output pins as stereo audio
//! frames; [`CpalOutput`] carries those frames to a real output device.

mod cpal_backend;
mod frame;
mod sim;
mod traits;

pub use cpal_backend::CpalOutput;
pub use frame::Frame;
pub use sim::{SimBoard, PIN_LEVEL};
pub use traits::{AudioError, AudioSink};
