//! Per-channel playback state.

use crate::envelope::Envelope;
use crate::generator::Generator;

/// Volume a channel boots with, and falls back to after `VOLUME`
/// changes it; matches what the stock senders assume.
pub const DEFAULT_VOLUME: u8 = 200;

/// An in-flight frequency glide.
#[derive(Clone, Copy, Debug)]
pub struct Bend {
    /// Timestamp the glide began
    pub start_ms: u32,
    /// Glide length
    pub duration_ms: u32,
    /// Frequency when the glide began
    pub from_hz: f32,
    /// Frequency to land on
    pub to_hz: f32,
}

/// Playback state for a single tone channel.
#[derive(Clone, Debug, Default)]
pub struct Channel {
    /// Is a note active, release tail included?
    pub playing: bool,
    /// Current output frequency in Hz; 0 when idle
    pub frequency: f32,
    /// Timestamp the note began
    pub note_start_ms: u32,
    /// Total note length
    pub note_duration_ms: u32,
    /// Sustain volume of the current note
    pub volume_target: u8,
    /// Persistent volume used when a play command omits one
    pub volume_default: u8,
    /// Envelope output from the last pass, consumed by the generator on
    /// the next
    pub applied_volume: u8,
    /// Envelope state
    pub envelope: Envelope,
    /// Waveform generator state
    pub generator: Generator,
    /// Active frequency glide, if any
    pub bend: Option<Bend>,
}

impl Channel {
    /// Create an idle channel with the stock default volume.
    pub fn new() -> Self {
        Self {
            volume_default: DEFAULT_VOLUME,
            ..Default::default()
        }
    }

    /// Begin a note. The frequency must already be clamped; the
    /// generator is started separately by the dispatcher.
    pub fn start_note(&mut self, hz: f32, duration_ms: u32, target: u8, now_ms: u32) {
        self.playing = true;
        self.frequency = hz;
        self.note_start_ms = now_ms;
        self.note_duration_ms = duration_ms;
        self.volume_target = target;
        self.applied_volume = 0;
        self.envelope.start();
        self.bend = None;
    }

    /// Tear the note down to idle. Generator shutdown is the
    /// dispatcher's job since it needs the board.
    pub fn clear_note(&mut self) {
        self.playing = false;
        self.frequency = 0.0;
        self.applied_volume = 0;
        self.envelope.stop();
        self.bend = None;
    }
}
