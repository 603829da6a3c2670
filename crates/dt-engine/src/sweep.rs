//! Frequency sweep diagnostic.
//!
//! `TEST` walks an octave ladder from the bottom of the band to its
//! ceiling, one short note at a time on channel 0, scheduled through the
//! normal play path so the sweep exercises exactly what real commands
//! exercise. The ladder crosses the 1 kHz threshold, so both generator
//! modes get driven.

/// Length of each sweep note.
pub const SWEEP_STEP_MS: u32 = 120;

/// Octave ladder, ends pinned to the renderable band.
const STEPS: [f32; 10] = [
    20.0, 40.0, 80.0, 160.0, 320.0, 640.0, 1280.0, 2560.0, 5120.0, 8000.0,
];

/// Progress through the diagnostic sweep.
#[derive(Clone, Debug, Default)]
pub struct Sweep {
    active: bool,
    step: usize,
}

impl Sweep {
    /// Begin (or restart) the sweep from the bottom of the ladder.
    pub fn start(&mut self) {
        self.active = true;
        self.step = 0;
    }

    /// Abandon the sweep without a completion report.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Next frequency to play, or `None` once the ladder is exhausted
    /// (which also deactivates the sweep).
    pub fn next_step(&mut self) -> Option<f32> {
        if !self.active {
            return None;
        }
        match STEPS.get(self.step) {
            Some(&hz) => {
                self.step += 1;
                Some(hz)
            }
            None => {
                self.active = false;
                None
            }
        }
    }
}
