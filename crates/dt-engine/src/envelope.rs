//! Attack/sustain/release volume shaping.
//!
//! The envelope works in the elapsed-time domain: each pass it is handed
//! the note's elapsed milliseconds, total duration, and sustain target,
//! and yields the volume the generator should apply. Release is entered
//! proactively at `duration − RELEASE_MS` so the fade lands inside the
//! note; the expiry cutoff at `duration` itself belongs to the caller.

/// Attack ramp length.
pub const ATTACK_MS: u32 = 30;

/// Release fade length.
pub const RELEASE_MS: u32 = 50;

/// Envelope phase. A silent channel is `Idle`; a note walks
/// `Attack → Sustain → Release` and short notes truncate the later
/// phases rather than skip them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Attack,
    Sustain,
    Release,
}

/// Runtime envelope state for one channel.
#[derive(Clone, Debug, Default)]
pub struct Envelope {
    phase: Phase,
    /// Volume captured when Release was entered.
    release_start_volume: u8,
    /// Most recent output.
    level: u8,
}

impl Envelope {
    /// Begin a new note at the start of Attack.
    pub fn start(&mut self) {
        self.phase = Phase::Attack;
        self.release_start_volume = 0;
        self.level = 0;
    }

    /// Drop to Idle immediately.
    pub fn stop(&mut self) {
        self.phase = Phase::Idle;
        self.level = 0;
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Most recent output volume.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Advance to `elapsed_ms` into a note of `duration_ms`, returning
    /// the volume to apply. Phase transitions cascade within one call so
    /// a coarse caller still lands in the right phase.
    pub fn advance(&mut self, elapsed_ms: u32, duration_ms: u32, target: u8) -> u8 {
        loop {
            match self.phase {
                Phase::Idle => {
                    self.level = 0;
                    return 0;
                }
                Phase::Attack => {
                    if elapsed_ms >= ATTACK_MS {
                        self.phase = Phase::Sustain;
                        continue;
                    }
                    self.level = ((target as u32 * elapsed_ms) / ATTACK_MS) as u8;
                    return self.level;
                }
                Phase::Sustain => {
                    if elapsed_ms >= duration_ms.saturating_sub(RELEASE_MS) {
                        // Capture the live output, not the target, so a
                        // note released mid-attack fades from where it was
                        self.release_start_volume = self.level;
                        self.phase = Phase::Release;
                        continue;
                    }
                    self.level = target;
                    return self.level;
                }
                Phase::Release => {
                    let release_at = duration_ms.saturating_sub(RELEASE_MS);
                    let into = elapsed_ms.saturating_sub(release_at);
                    let fade = RELEASE_MS.saturating_sub(into);
                    self.level =
                        ((self.release_start_volume as u32 * fade) / RELEASE_MS) as u8;
                    return self.level;
                }
            }
        }
    }
}
