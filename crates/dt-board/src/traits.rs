//! Audio output trait and error types.

use crate::frame::Frame;

/// Error type for audio operations.
#[derive(Debug)]
pub enum AudioError {
    /// Failed to initialize audio device
    DeviceInit(String),
    /// Failed to create audio stream
    StreamCreate(String),
    /// Playback error
    Playback(String),
    /// No audio device available
    NoDevice,
}

impl std::fmt::Display for AudioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AudioError::DeviceInit(msg) => write!(f, "Device init error: {}", msg),
            AudioError::StreamCreate(msg) => write!(f, "Stream create error: {}", msg),
            AudioError::Playback(msg) => write!(f, "Playback error: {}", msg),
            AudioError::NoDevice => write!(f, "No audio device available"),
        }
    }
}

impl std::error::Error for AudioError {}

/// Sink for rendered audio frames.
///
/// The render loop produces exactly one frame per pass, so the sink
/// takes frames one at a time and provides the pacing.
pub trait AudioSink {
    /// Get the sample rate.
    fn sample_rate(&self) -> u32;

    /// Write one frame (blocking until the sink has room).
    fn push(&mut self, frame: Frame);
}
