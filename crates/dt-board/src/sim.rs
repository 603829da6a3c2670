//! Simulated board: pins and tone units rendered as stereo audio.

use dt_core::{Board, CHANNEL_COUNT};

use crate::frame::Frame;

/// Sample value of a pin driven high.
pub const PIN_LEVEL: i16 = 12_000;

/// Autonomous square-wave unit attached to one pin.
#[derive(Clone, Copy)]
struct Tone {
    hz: f32,
    /// Cycle position in [0, 1); high for the first half.
    phase: f64,
}

/// A virtual board with a microsecond clock.
///
/// Channel 0 renders on the left side, channel 1 on the right. A pin
/// contributes [`PIN_LEVEL`] while high and 0 while low. An active tone
/// unit overrides its channel's pin with a 50% duty square wave at the
/// same level.
pub struct SimBoard {
    clock_us: u64,
    pins: [bool; CHANNEL_COUNT],
    tones: [Option<Tone>; CHANNEL_COUNT],
    console: Vec<String>,
}

impl SimBoard {
    pub fn new() -> Self {
        Self {
            clock_us: 0,
            pins: [false; CHANNEL_COUNT],
            tones: [None; CHANNEL_COUNT],
            console: Vec::new(),
        }
    }

    /// Advance the virtual clock and the tone units by `dt_us`.
    pub fn advance(&mut self, dt_us: u64) {
        self.clock_us += dt_us;
        let dt_s = dt_us as f64 / 1_000_000.0;
        for tone in self.tones.iter_mut().flatten() {
            tone.phase = (tone.phase + tone.hz as f64 * dt_s).fract();
        }
    }

    /// Render the current pin levels as one stereo frame.
    pub fn sample(&self) -> Frame {
        Frame {
            left: self.level(0),
            right: self.level(1),
        }
    }

    fn level(&self, channel: usize) -> i16 {
        let high = match &self.tones[channel] {
            Some(tone) => tone.phase < 0.5,
            None => self.pins[channel],
        };
        if high {
            PIN_LEVEL
        } else {
            0
        }
    }

    /// Drain the lines written to the serial console so far.
    pub fn take_console(&mut self) -> Vec<String> {
        std::mem::take(&mut self.console)
    }
}

impl Default for SimBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for SimBoard {
    fn now_ms(&self) -> u32 {
        (self.clock_us / 1000) as u32
    }

    fn now_us(&self) -> u32 {
        self.clock_us as u32
    }

    fn set_pin(&mut self, channel: u8, high: bool) {
        if let Some(pin) = self.pins.get_mut(channel as usize) {
            *pin = high;
        }
    }

    fn start_tone(&mut self, channel: u8, hz: f32) {
        if let Some(slot) = self.tones.get_mut(channel as usize) {
            match slot {
                // Retune in place so the wave stays continuous.
                Some(tone) => tone.hz = hz,
                None => *slot = Some(Tone { hz, phase: 0.0 }),
            }
        }
    }

    fn stop_tone(&mut self, channel: u8) {
        if let Some(slot) = self.tones.get_mut(channel as usize) {
            *slot = None;
        }
    }

    fn write_line(&mut self, line: &str) {
        log::debug!("console: {}", line);
        self.console.push(line.to_string());
    }
}
