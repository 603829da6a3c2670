//! Numeric limits shared by the parser and the engine.

/// Channels on the device: 0 = left, 1 = right.
pub const CHANNEL_COUNT: usize = 2;

/// Lowest frequency the output stage can render.
pub const FREQ_MIN_HZ: f32 = 20.0;

/// Highest frequency the output stage can render.
pub const FREQ_MAX_HZ: f32 = 8_000.0;

/// Frequencies at or below this toggle the pin in software; anything
/// above is handed to the hardware tone unit.
pub const SOFTWARE_TOGGLE_MAX_HZ: f32 = 1_000.0;

/// Floor for the software toggle half-period.
pub const TOGGLE_INTERVAL_MIN_US: u32 = 100;

/// Full-scale volume.
pub const VOLUME_MAX: u8 = 255;

/// Clamp a requested frequency into the renderable band.
///
/// Applied before any frequency reaches a generator; non-finite input
/// lands on the low edge.
pub fn clamp_frequency(hz: f32) -> f32 {
    if hz.is_nan() || hz < FREQ_MIN_HZ {
        FREQ_MIN_HZ
    } else if hz > FREQ_MAX_HZ {
        FREQ_MAX_HZ
    } else {
        hz
    }
}

/// Clamp a parsed volume field into `0..=VOLUME_MAX`.
pub fn clamp_volume(v: i64) -> u8 {
    v.clamp(0, VOLUME_MAX as i64) as u8
}
