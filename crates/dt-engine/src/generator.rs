//! Dual-mode square wave generation.
//!
//! At or below 1 kHz the pin is toggled in software from the pass loop,
//! which costs nothing extra and lets volume ride on the duty cycle: the
//! high phase of each period lasts `half_period · volume / 255`, the low
//! phase takes the remainder. Above 1 kHz the pass loop can no longer
//! keep the timing honest, so the pin is handed to the board's hardware
//! tone unit, which runs free at a fixed 50 % duty; volume and envelope
//! do not reach it.

use dt_core::{elapsed, Board, SOFTWARE_TOGGLE_MAX_HZ, TOGGLE_INTERVAL_MIN_US, VOLUME_MAX};

/// How a channel's pin is being driven.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Off,
    SoftwareToggle,
    HardwareTone,
}

/// Waveform generator state for one channel.
#[derive(Clone, Debug, Default)]
pub struct Generator {
    mode: Mode,
    /// Full-volume half-period for the software toggle
    interval_us: u32,
    /// Timestamp of the last pin transition
    last_toggle_us: u32,
    pin_high: bool,
}

impl Generator {
    /// Current drive mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Start output for a note. `hz` must already be clamped to the
    /// renderable band; the mode is picked from it here.
    pub fn start<B: Board>(&mut self, board: &mut B, channel: u8, hz: f32, now_us: u32) {
        self.stop(board, channel);
        if hz > SOFTWARE_TOGGLE_MAX_HZ {
            self.mode = Mode::HardwareTone;
            board.start_tone(channel, hz);
        } else {
            self.mode = Mode::SoftwareToggle;
            self.interval_us = half_period_us(hz);
            self.last_toggle_us = now_us;
        }
    }

    /// Follow a frequency change on a running note, re-picking the mode
    /// when the change crosses the hardware threshold.
    pub fn retune<B: Board>(&mut self, board: &mut B, channel: u8, hz: f32, now_us: u32) {
        match (self.mode, hz > SOFTWARE_TOGGLE_MAX_HZ) {
            (Mode::HardwareTone, true) => board.start_tone(channel, hz),
            (Mode::SoftwareToggle, false) => self.interval_us = half_period_us(hz),
            _ => self.start(board, channel, hz, now_us),
        }
    }

    /// Cancel output and force the pin low, whichever mode was active.
    pub fn stop<B: Board>(&mut self, board: &mut B, channel: u8) {
        if self.mode == Mode::HardwareTone {
            board.stop_tone(channel);
        }
        board.set_pin(channel, false);
        self.mode = Mode::Off;
        self.pin_high = false;
    }

    /// One pass of the software toggle. `level` is the envelope output
    /// from the previous pass; hardware tone ignores it by design of the
    /// tone unit, not by choice here.
    pub fn advance<B: Board>(&mut self, board: &mut B, channel: u8, now_us: u32, level: u8) {
        if self.mode != Mode::SoftwareToggle {
            return;
        }
        let high_us = (self.interval_us as u64 * level as u64 / VOLUME_MAX as u64) as u32;
        let waited = elapsed(now_us, self.last_toggle_us);
        if self.pin_high {
            if waited >= high_us {
                board.set_pin(channel, false);
                self.pin_high = false;
                self.last_toggle_us = now_us;
            }
        } else {
            let low_us = (self.interval_us * 2).saturating_sub(high_us);
            if waited >= low_us {
                if high_us > 0 {
                    board.set_pin(channel, true);
                    self.pin_high = true;
                }
                self.last_toggle_us = now_us;
            }
        }
    }
}

/// Half-period in microseconds for a software-toggled frequency,
/// floored so a runaway value cannot starve the pass loop.
fn half_period_us(hz: f32) -> u32 {
    ((500_000.0 / hz) as u32).max(TOGGLE_INTERVAL_MIN_US)
}
