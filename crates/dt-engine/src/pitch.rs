//! MIDI note to frequency conversion.

use libm::exp2f;

/// MIDI note number of the A4 reference.
const A4_NOTE: i32 = 69;

/// Reference tuning for A4.
const A4_HZ: f32 = 440.0;

/// Frequency of a MIDI note in 12-TET: `440 · 2^((n − 69) / 12)`.
///
/// No range policing here; out-of-band notes map to extreme frequencies
/// and the band clamp catches them downstream. The offset is computed in
/// f32 so any i32, including the rails, is safe input.
pub fn note_to_hz(note: i32) -> f32 {
    A4_HZ * exp2f((note as f32 - A4_NOTE as f32) / 12.0)
}
