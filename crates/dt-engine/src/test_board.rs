//! In-crate board stub for unit tests.

use dt_core::Board;

/// Records pin writes, tone calls, and console lines against a manually
/// advanced clock.
pub struct TestBoard {
    clock_us: u64,
    pub pins: [bool; 2],
    pub tones: [Option<f32>; 2],
    pub lines: Vec<String>,
}

impl TestBoard {
    pub fn new() -> Self {
        Self {
            clock_us: 0,
            pins: [false; 2],
            tones: [None; 2],
            lines: Vec::new(),
        }
    }

    pub fn tick_us(&mut self, dt: u64) {
        self.clock_us += dt;
    }

    pub fn tick_ms(&mut self, dt: u64) {
        self.clock_us += dt * 1000;
    }

    pub fn last_line(&self) -> &str {
        self.lines.last().map(String::as_str).unwrap_or("")
    }
}

impl Board for TestBoard {
    fn now_ms(&self) -> u32 {
        (self.clock_us / 1000) as u32
    }

    fn now_us(&self) -> u32 {
        self.clock_us as u32
    }

    fn set_pin(&mut self, channel: u8, high: bool) {
        self.pins[channel as usize] = high;
    }

    fn start_tone(&mut self, channel: u8, hz: f32) {
        self.tones[channel as usize] = Some(hz);
    }

    fn stop_tone(&mut self, channel: u8) {
        self.tones[channel as usize] = None;
    }

    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
}
