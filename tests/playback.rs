//! Integration test: command lines in, rendered audio out.
//!
//! Drives the synth over the simulated board one pass per sample and
//! checks the waveform itself: pitch via rising-edge counting, loudness
//! via mean level.

use dt_board::{Frame, SimBoard, PIN_LEVEL};
use dt_engine::Synth;

/// Microseconds per rendered frame (a 40 kHz session).
const DT_US: u64 = 25;
const FRAMES_PER_MS: u32 = 40;

struct Session {
    synth: Synth,
    board: SimBoard,
}

impl Session {
    fn new() -> Self {
        let mut s = Session {
            synth: Synth::new(),
            board: SimBoard::new(),
        };
        s.synth.boot(&mut s.board);
        s
    }

    fn send(&mut self, line: &str) {
        self.synth.pass(&mut self.board, Some(line));
    }

    fn render_ms(&mut self, ms: u32) -> Vec<Frame> {
        (0..ms * FRAMES_PER_MS)
            .map(|_| {
                self.synth.pass(&mut self.board, None);
                let frame = self.board.sample();
                self.board.advance(DT_US);
                frame
            })
            .collect()
    }
}

fn rising_edges(samples: &[i16]) -> usize {
    samples.windows(2).filter(|w| w[0] == 0 && w[1] > 0).count()
}

fn measured_hz(samples: &[i16]) -> f32 {
    let seconds = samples.len() as f32 * DT_US as f32 / 1_000_000.0;
    rising_edges(samples) as f32 / seconds
}

fn left(frames: &[Frame]) -> Vec<i16> {
    frames.iter().map(|f| f.left).collect()
}

fn right(frames: &[Frame]) -> Vec<i16> {
    frames.iter().map(|f| f.right).collect()
}

fn mean_level(samples: &[i16]) -> f32 {
    samples.iter().map(|&s| s as f32).sum::<f32>() / samples.len() as f32
}

#[test]
fn software_toggle_hits_the_requested_pitch() {
    let mut s = Session::new();
    s.send("FREQ,440,2000,0,255");
    s.render_ms(200); // settle past the attack
    let frames = s.render_ms(1_000);

    let hz = measured_hz(&left(&frames));
    assert!(
        (hz - 440.0).abs() < 440.0 * 0.05,
        "measured {} Hz, wanted about 440",
        hz
    );
    assert!(right(&frames).iter().all(|&v| v == 0));
}

#[test]
fn hardware_tone_hits_the_requested_pitch() {
    let mut s = Session::new();
    s.send("FREQ,4000,1000,0,255");
    s.render_ms(100);
    let frames = s.render_ms(500);

    let hz = measured_hz(&left(&frames));
    assert!(
        (hz - 4_000.0).abs() < 4_000.0 * 0.05,
        "measured {} Hz, wanted about 4000",
        hz
    );
}

#[test]
fn hardware_tone_ignores_the_volume_envelope() {
    let mut s = Session::new();
    s.send("FREQ,4000,1000,0,10");
    let frames = s.render_ms(500);
    let peak = left(&frames).into_iter().max().unwrap_or(0);
    assert_eq!(peak, PIN_LEVEL, "tone unit output is not level-scaled");
}

#[test]
fn software_duty_cycle_tracks_the_envelope() {
    let mut s = Session::new();
    s.send("FREQ,440,2000,0,255");
    let early = s.render_ms(10); // mid-attack
    s.render_ms(90);
    let sustained = s.render_ms(200);

    let early_mean = mean_level(&left(&early));
    let sustained_mean = mean_level(&left(&sustained));
    assert!(
        early_mean < sustained_mean * 0.6,
        "attack should be quieter: early {} vs sustained {}",
        early_mean,
        sustained_mean
    );
}

#[test]
fn volume_zero_never_raises_the_pin() {
    let mut s = Session::new();
    s.send("FREQ,440,500,0,0");
    let frames = s.render_ms(600);
    assert!(frames.iter().all(|f| *f == Frame::silence()));
}

#[test]
fn stop_yields_immediate_silence() {
    let mut s = Session::new();
    s.send("FREQ,440,5000,0,255");
    s.render_ms(200);
    s.send("STOP,0");
    let frames = s.render_ms(100);
    assert!(frames.iter().all(|f| *f == Frame::silence()));
}

#[test]
fn a_chord_puts_each_note_on_its_own_side() {
    let mut s = Session::new();
    s.send("CHORD,57,69,2000");
    s.render_ms(200);
    let frames = s.render_ms(1_000);

    let left_hz = measured_hz(&left(&frames));
    let right_hz = measured_hz(&right(&frames));
    assert!(
        (left_hz - 220.0).abs() < 220.0 * 0.05,
        "left measured {} Hz",
        left_hz
    );
    assert!(
        (right_hz - 440.0).abs() < 440.0 * 0.05,
        "right measured {} Hz",
        right_hz
    );
}

#[test]
fn a_note_fades_out_and_ends_in_silence() {
    let mut s = Session::new();
    s.send("FREQ,440,300,0,255");
    let during = s.render_ms(300);
    let after = s.render_ms(100);

    assert!(during.iter().any(|f| f.left > 0));
    assert!(after.iter().all(|f| *f == Frame::silence()));
}
