//! Command dispatch and the per-pass control loop.

use core::fmt::Write;

use dt_core::{
    clamp_frequency, elapsed, Board, Command, CHANNEL_COUNT, FREQ_MAX_HZ, FREQ_MIN_HZ,
};
use dt_proto::parse_line;
use heapless::String;

use crate::channel::{Bend, Channel};
use crate::pitch::note_to_hz;
use crate::status::{channel_line, LINE_CAP};
use crate::sweep::{Sweep, SWEEP_STEP_MS};

type Line = String<LINE_CAP>;

/// The whole device: two channels plus the sweep scheduler.
///
/// [`Synth::pass`] is the cooperative loop body. Each pass advances the
/// generators, settles envelopes and note lifetimes, then applies at
/// most one command line; a command's effects reach the generators on
/// the following pass.
pub struct Synth {
    channels: [Channel; CHANNEL_COUNT],
    sweep: Sweep,
}

impl Synth {
    pub fn new() -> Self {
        Self {
            channels: core::array::from_fn(|_| Channel::new()),
            sweep: Sweep::default(),
        }
    }

    /// Device bring-up: everything idle, pins low, banner on the wire.
    pub fn boot<B: Board>(&mut self, board: &mut B) {
        *self = Self::new();
        for i in 0..CHANNEL_COUNT {
            board.set_pin(i as u8, false);
        }
        let mut line: Line = String::new();
        let _ = write!(
            line,
            "duotone ready: {} channels, {:.0}-{:.0} Hz",
            CHANNEL_COUNT, FREQ_MIN_HZ, FREQ_MAX_HZ
        );
        board.write_line(&line);
    }

    /// One iteration of the control loop.
    pub fn pass<B: Board>(&mut self, board: &mut B, line: Option<&str>) {
        let now_ms = board.now_ms();
        let now_us = board.now_us();

        // 1) waveform generation, both channels
        for (i, ch) in self.channels.iter_mut().enumerate() {
            let level = ch.applied_volume;
            ch.generator.advance(board, i as u8, now_us, level);
        }

        // 2) note lifetime, bend, and envelope bookkeeping
        for i in 0..CHANNEL_COUNT {
            self.update_channel(board, i, now_ms, now_us);
        }
        self.step_sweep(board, now_ms, now_us);

        // 3) at most one command line per pass
        if let Some(line) = line {
            self.handle_line(board, line, now_ms, now_us);
        }
    }

    /// Channel state, for inspection.
    pub fn channel(&self, index: usize) -> &Channel {
        &self.channels[index]
    }

    /// Is the diagnostic sweep still scheduled?
    pub fn is_sweeping(&self) -> bool {
        self.sweep.is_active()
    }

    /// True when nothing is sounding and no sweep is scheduled.
    pub fn is_idle(&self) -> bool {
        !self.sweep.is_active() && self.channels.iter().all(|ch| !ch.playing)
    }

    fn update_channel<B: Board>(&mut self, board: &mut B, idx: usize, now_ms: u32, now_us: u32) {
        let ch = &mut self.channels[idx];
        if !ch.playing {
            return;
        }

        let elapsed_ms = elapsed(now_ms, ch.note_start_ms);
        if elapsed_ms >= ch.note_duration_ms {
            ch.generator.stop(board, idx as u8);
            ch.clear_note();
            return;
        }

        if let Some(bend) = ch.bend {
            let into = elapsed(now_ms, bend.start_ms);
            if into >= bend.duration_ms {
                ch.frequency = clamp_frequency(bend.to_hz);
                ch.bend = None;
            } else {
                let t = into as f32 / bend.duration_ms as f32;
                ch.frequency = clamp_frequency(bend.from_hz + (bend.to_hz - bend.from_hz) * t);
            }
            let hz = ch.frequency;
            ch.generator.retune(board, idx as u8, hz, now_us);
        }

        ch.applied_volume = ch
            .envelope
            .advance(elapsed_ms, ch.note_duration_ms, ch.volume_target);
    }

    fn step_sweep<B: Board>(&mut self, board: &mut B, now_ms: u32, now_us: u32) {
        if !self.sweep.is_active() || self.channels[0].playing {
            return;
        }
        match self.sweep.next_step() {
            Some(hz) => self.play(board, 0, hz, SWEEP_STEP_MS, None, now_ms, now_us),
            None => board.write_line("sweep complete"),
        }
    }

    fn handle_line<B: Board>(&mut self, board: &mut B, line: &str, now_ms: u32, now_us: u32) {
        let cmd = parse_line(line);
        if cmd == Command::Unknown {
            let mut out: Line = String::new();
            let _ = write!(out, "unknown command: {}", line.trim());
            board.write_line(&out);
            return;
        }
        self.apply(board, cmd, now_ms, now_us);
    }

    fn apply<B: Board>(&mut self, board: &mut B, cmd: Command, now_ms: u32, now_us: u32) {
        match cmd {
            Command::Freq {
                hz,
                duration_ms,
                channel,
                volume,
            } => self.play(board, channel, hz, duration_ms, volume, now_ms, now_us),
            Command::Note {
                note,
                duration_ms,
                channel,
                volume,
            } => self.play(
                board,
                channel,
                note_to_hz(note),
                duration_ms,
                volume,
                now_ms,
                now_us,
            ),
            Command::Chord {
                note0,
                note1,
                duration_ms,
            } => {
                self.play(board, 0, note_to_hz(note0), duration_ms, None, now_ms, now_us);
                self.play(board, 1, note_to_hz(note1), duration_ms, None, now_ms, now_us);
            }
            Command::Mono { note, duration_ms } => {
                let hz = note_to_hz(note);
                self.play(board, 0, hz, duration_ms, None, now_ms, now_us);
                self.play(board, 1, hz, duration_ms, None, now_ms, now_us);
            }
            Command::Bend {
                channel,
                target_hz,
                duration_ms,
            } => self.bend(board, channel, target_hz, duration_ms, now_ms, now_us),
            Command::Volume { volume, channel } => self.set_volume(board, volume, channel),
            Command::Stop { channel } => self.stop(board, channel),
            Command::Status => self.report_status(board, now_ms),
            Command::Test => {
                self.sweep.start();
                board.write_line("starting sweep");
            }
            Command::Unknown => {}
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn play<B: Board>(
        &mut self,
        board: &mut B,
        channel: i32,
        hz: f32,
        duration_ms: u32,
        volume: Option<u8>,
        now_ms: u32,
        now_us: u32,
    ) {
        let idx = match channel_index(channel) {
            Some(idx) => idx,
            None => return, // out-of-range channels are dropped without a report
        };
        let hz = clamp_frequency(hz);
        let ch = &mut self.channels[idx];
        let target = volume.unwrap_or(ch.volume_default);
        ch.start_note(hz, duration_ms, target, now_ms);
        ch.generator.start(board, idx as u8, hz, now_us);

        let mut line: Line = String::new();
        let _ = write!(
            line,
            "playing {:.2} Hz for {} ms on ch{} vol {}",
            hz, duration_ms, idx, target
        );
        board.write_line(&line);
    }

    fn bend<B: Board>(
        &mut self,
        board: &mut B,
        channel: i32,
        target_hz: f32,
        duration_ms: u32,
        now_ms: u32,
        now_us: u32,
    ) {
        let idx = match channel_index(channel) {
            Some(idx) => idx,
            None => return,
        };
        let ch = &mut self.channels[idx];
        if !ch.playing {
            let mut line: Line = String::new();
            let _ = write!(line, "bend ignored: ch{} idle", idx);
            board.write_line(&line);
            return;
        }

        let target = clamp_frequency(target_hz);
        if duration_ms == 0 {
            ch.frequency = target;
            ch.generator.retune(board, idx as u8, target, now_us);
            ch.bend = None;
        } else {
            ch.bend = Some(Bend {
                start_ms: now_ms,
                duration_ms,
                from_hz: ch.frequency,
                to_hz: target,
            });
        }

        let mut line: Line = String::new();
        let _ = write!(
            line,
            "bending ch{} to {:.2} Hz over {} ms",
            idx, target, duration_ms
        );
        board.write_line(&line);
    }

    fn set_volume<B: Board>(&mut self, board: &mut B, volume: u8, channel: Option<i32>) {
        let mut line: Line = String::new();
        match channel {
            None => {
                for ch in &mut self.channels {
                    ch.volume_default = volume;
                }
                let _ = write!(line, "volume {} on both channels", volume);
            }
            Some(c) => {
                let idx = match channel_index(c) {
                    Some(idx) => idx,
                    None => return,
                };
                self.channels[idx].volume_default = volume;
                let _ = write!(line, "volume {} on ch{}", volume, idx);
            }
        }
        board.write_line(&line);
    }

    fn stop<B: Board>(&mut self, board: &mut B, channel: Option<i32>) {
        match channel {
            None => {
                for i in 0..CHANNEL_COUNT {
                    self.stop_channel(board, i);
                }
                self.sweep.cancel();
                board.write_line("stopped all channels");
            }
            Some(c) => {
                let idx = match channel_index(c) {
                    Some(idx) => idx,
                    None => return,
                };
                self.stop_channel(board, idx);
                if idx == 0 {
                    self.sweep.cancel();
                }
                let mut line: Line = String::new();
                let _ = write!(line, "stopped ch{}", idx);
                board.write_line(&line);
            }
        }
    }

    fn stop_channel<B: Board>(&mut self, board: &mut B, idx: usize) {
        let ch = &mut self.channels[idx];
        ch.generator.stop(board, idx as u8);
        ch.clear_note();
    }

    fn report_status<B: Board>(&self, board: &mut B, now_ms: u32) {
        for (i, ch) in self.channels.iter().enumerate() {
            board.write_line(&channel_line(i, ch, now_ms));
        }
    }
}

impl Default for Synth {
    fn default() -> Self {
        Self::new()
    }
}

/// Valid channel index, or `None` for anything outside the device.
fn channel_index(channel: i32) -> Option<usize> {
    if (0..CHANNEL_COUNT as i32).contains(&channel) {
        Some(channel as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::Phase;
    use crate::generator::Mode;
    use crate::test_board::TestBoard;

    fn setup() -> (Synth, TestBoard) {
        (Synth::new(), TestBoard::new())
    }

    fn cmd(synth: &mut Synth, board: &mut TestBoard, line: &str) {
        synth.pass(board, Some(line));
    }

    /// Run idle passes at a 1 ms cadence.
    fn run_ms(synth: &mut Synth, board: &mut TestBoard, ms: u64) {
        for _ in 0..ms {
            board.tick_ms(1);
            synth.pass(board, None);
        }
    }

    #[test]
    fn boot_forces_pins_low_and_prints_a_banner() {
        let (mut synth, mut board) = setup();
        synth.boot(&mut board);
        assert_eq!(board.pins, [false, false]);
        assert_eq!(board.lines.len(), 1);
        assert!(board.lines[0].contains("duotone ready"));
    }

    #[test]
    fn freq_command_starts_a_note() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "FREQ,440,300,0,200");
        let ch = synth.channel(0);
        assert!(ch.playing);
        assert_eq!(ch.frequency, 440.0);
        assert_eq!(ch.note_duration_ms, 300);
        assert_eq!(ch.volume_target, 200);
        assert_eq!(ch.generator.mode(), Mode::SoftwareToggle);
        assert!(board.last_line().contains("playing 440.00 Hz"));
    }

    #[test]
    fn legacy_line_plays_channel_zero() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "440,300");
        assert!(synth.channel(0).playing);
        assert!(!synth.channel(1).playing);
        assert_eq!(synth.channel(0).frequency, 440.0);
    }

    #[test]
    fn note_command_maps_midi_to_hertz() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "NOTE,69,250,1");
        let ch = synth.channel(1);
        assert!(ch.playing);
        assert!((ch.frequency - 440.0).abs() < 0.01);
    }

    #[test]
    fn extreme_note_numbers_play_at_the_band_edges() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "NOTE,-2147483648,100");
        assert!(synth.channel(0).playing);
        assert_eq!(synth.channel(0).frequency, FREQ_MIN_HZ);

        cmd(&mut synth, &mut board, "NOTE,2147483647,100,1");
        assert!(synth.channel(1).playing);
        assert_eq!(synth.channel(1).frequency, FREQ_MAX_HZ);
    }

    #[test]
    fn frequencies_are_clamped_into_the_band() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "FREQ,5,100");
        assert_eq!(synth.channel(0).frequency, 20.0);

        cmd(&mut synth, &mut board, "FREQ,99999,100,1");
        let ch = synth.channel(1);
        assert_eq!(ch.frequency, 8000.0);
        assert_eq!(ch.generator.mode(), Mode::HardwareTone);
        assert_eq!(board.tones[1], Some(8000.0));
    }

    #[test]
    fn out_of_range_channel_is_dropped_without_a_report() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "FREQ,440,300,7");
        cmd(&mut synth, &mut board, "STOP,-1");
        cmd(&mut synth, &mut board, "VOLUME,90,5");
        assert!(!synth.channel(0).playing);
        assert!(!synth.channel(1).playing);
        assert_eq!(synth.channel(0).volume_default, crate::DEFAULT_VOLUME);
        assert!(board.lines.is_empty());
    }

    #[test]
    fn non_numeric_channel_falls_back_to_channel_zero() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "FREQ,440,300,left");
        assert!(synth.channel(0).playing);
    }

    #[test]
    fn chord_starts_both_channels_on_one_timestamp() {
        let (mut synth, mut board) = setup();
        board.tick_ms(5);
        cmd(&mut synth, &mut board, "CHORD,60,64,500");
        let (ch0, ch1) = (synth.channel(0), synth.channel(1));
        assert!(ch0.playing && ch1.playing);
        assert!((ch0.frequency - 261.63).abs() < 0.1);
        assert!((ch1.frequency - 329.63).abs() < 0.1);
        assert_eq!(ch0.note_start_ms, ch1.note_start_ms);
        assert_eq!(ch0.note_duration_ms, 500);
        assert_eq!(ch1.note_duration_ms, 500);
    }

    #[test]
    fn mono_plays_the_same_note_on_both_channels() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "MONO,57,200");
        assert!((synth.channel(0).frequency - 220.0).abs() < 0.01);
        assert_eq!(synth.channel(0).frequency, synth.channel(1).frequency);
    }

    #[test]
    fn volume_sets_the_default_without_starting_a_note() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "VOLUME,90,1");
        assert!(!synth.channel(1).playing);
        assert_eq!(synth.channel(1).volume_default, 90);
        assert_eq!(synth.channel(0).volume_default, crate::DEFAULT_VOLUME);

        cmd(&mut synth, &mut board, "VOLUME,70");
        assert_eq!(synth.channel(0).volume_default, 70);
        assert_eq!(synth.channel(1).volume_default, 70);
    }

    #[test]
    fn default_volume_seeds_notes_that_omit_one() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "VOLUME,90,1");
        cmd(&mut synth, &mut board, "NOTE,69,250,1");
        assert_eq!(synth.channel(1).volume_target, 90);
    }

    #[test]
    fn explicit_volume_beats_the_default_for_one_note() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "FREQ,440,300,0,30");
        assert_eq!(synth.channel(0).volume_target, 30);
        assert_eq!(synth.channel(0).volume_default, crate::DEFAULT_VOLUME);
    }

    #[test]
    fn stop_one_channel_leaves_the_other_playing() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "CHORD,60,64,5000");
        cmd(&mut synth, &mut board, "STOP,0");
        assert!(!synth.channel(0).playing);
        assert_eq!(synth.channel(0).frequency, 0.0);
        assert_eq!(synth.channel(0).envelope.phase(), Phase::Idle);
        assert!(synth.channel(1).playing);
        assert!(board.last_line().contains("stopped ch0"));
    }

    #[test]
    fn stop_is_idempotent_on_an_idle_channel() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "STOP,0");
        cmd(&mut synth, &mut board, "STOP,0");
        assert!(!synth.channel(0).playing);
        assert!(!board.pins[0]);
    }

    #[test]
    fn stop_without_a_channel_stops_everything() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "CHORD,60,64,5000");
        cmd(&mut synth, &mut board, "STOP");
        assert!(!synth.channel(0).playing);
        assert!(!synth.channel(1).playing);
        assert!(board.last_line().contains("stopped all channels"));
    }

    #[test]
    fn notes_expire_at_their_duration() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "FREQ,440,50,0,255");
        run_ms(&mut synth, &mut board, 49);
        assert!(synth.channel(0).playing);
        run_ms(&mut synth, &mut board, 2);
        let ch = synth.channel(0);
        assert!(!ch.playing);
        assert_eq!(ch.frequency, 0.0);
        assert_eq!(ch.generator.mode(), Mode::Off);
        assert!(!board.pins[0]);
    }

    #[test]
    fn zero_duration_note_expires_on_the_next_pass() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "FREQ,440,0");
        assert!(synth.channel(0).playing);
        synth.pass(&mut board, None);
        assert!(!synth.channel(0).playing);
    }

    #[test]
    fn envelope_rides_the_note() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "FREQ,440,300,0,200");

        run_ms(&mut synth, &mut board, 15);
        assert_eq!(synth.channel(0).applied_volume, 100);
        assert_eq!(synth.channel(0).envelope.phase(), Phase::Attack);

        run_ms(&mut synth, &mut board, 30);
        assert_eq!(synth.channel(0).applied_volume, 200);
        assert_eq!(synth.channel(0).envelope.phase(), Phase::Sustain);

        run_ms(&mut synth, &mut board, 225);
        assert_eq!(synth.channel(0).envelope.phase(), Phase::Release);
        assert_eq!(synth.channel(0).applied_volume, 120);
    }

    #[test]
    fn retrigger_restarts_the_attack() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "FREQ,440,300,0,200");
        run_ms(&mut synth, &mut board, 100);
        assert_eq!(synth.channel(0).applied_volume, 200);

        cmd(&mut synth, &mut board, "FREQ,220,300,0,200");
        let ch = synth.channel(0);
        assert_eq!(ch.frequency, 220.0);
        assert_eq!(ch.envelope.phase(), Phase::Attack);
        run_ms(&mut synth, &mut board, 15);
        assert_eq!(synth.channel(0).applied_volume, 100);
    }

    #[test]
    fn bend_glides_linearly_to_the_target() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "FREQ,440,1000,0,200");
        cmd(&mut synth, &mut board, "BEND,0,880,100");
        assert!(board.last_line().contains("bending ch0 to 880.00 Hz"));

        run_ms(&mut synth, &mut board, 50);
        assert!((synth.channel(0).frequency - 660.0).abs() < 0.01);

        run_ms(&mut synth, &mut board, 60);
        let ch = synth.channel(0);
        assert_eq!(ch.frequency, 880.0);
        assert!(ch.bend.is_none());
        assert!(ch.playing, "bend must not end the note");
    }

    #[test]
    fn bend_crossing_one_kilohertz_switches_generator_mode() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "FREQ,800,1000,0,200");
        assert_eq!(synth.channel(0).generator.mode(), Mode::SoftwareToggle);

        cmd(&mut synth, &mut board, "BEND,0,4000,100");
        run_ms(&mut synth, &mut board, 110);
        assert_eq!(synth.channel(0).generator.mode(), Mode::HardwareTone);
        assert_eq!(board.tones[0], Some(4000.0));
    }

    #[test]
    fn bend_with_zero_duration_jumps_immediately() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "FREQ,440,1000,0,200");
        cmd(&mut synth, &mut board, "BEND,0,880,0");
        assert_eq!(synth.channel(0).frequency, 880.0);
        assert!(synth.channel(0).bend.is_none());
    }

    #[test]
    fn bend_target_is_clamped_to_the_band() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "FREQ,440,1000,0,200");
        cmd(&mut synth, &mut board, "BEND,0,20000,50");
        run_ms(&mut synth, &mut board, 60);
        assert_eq!(synth.channel(0).frequency, 8000.0);
    }

    #[test]
    fn bend_on_an_idle_channel_only_reports() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "BEND,1,880,100");
        assert!(!synth.channel(1).playing);
        assert!(board.last_line().contains("bend ignored: ch1 idle"));
    }

    #[test]
    fn bend_to_an_out_of_range_channel_is_silent() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "BEND,3,880,100");
        assert!(board.lines.is_empty());
    }

    #[test]
    fn status_reports_one_line_per_channel() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "FREQ,440,300,0,200");
        board.lines.clear();
        cmd(&mut synth, &mut board, "STATUS");
        assert_eq!(board.lines.len(), 2);
        assert!(board.lines[0].starts_with("ch0 (left): "));
        assert!(board.lines[0].contains("playing 440.00 Hz"));
        assert_eq!(board.lines[1], "ch1 (right): vol 200 | idle");
    }

    #[test]
    fn unknown_lines_are_reported_verbatim() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "WOBBLE,9");
        assert_eq!(board.last_line(), "unknown command: WOBBLE,9");
        assert!(!synth.channel(0).playing);
    }

    #[test]
    fn sweep_walks_the_ladder_and_reports_completion() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "TEST");
        assert!(board.last_line().contains("starting sweep"));
        assert!(synth.is_sweeping());
        assert!(!synth.channel(0).playing, "sweep must not play inside the TEST pass");

        run_ms(&mut synth, &mut board, 2000);
        assert!(!synth.is_sweeping());
        assert!(!synth.channel(0).playing);
        let played: Vec<_> = board
            .lines
            .iter()
            .filter(|l| l.starts_with("playing "))
            .collect();
        assert_eq!(played.len(), 10);
        assert!(played[0].contains("playing 20.00 Hz"));
        assert!(played[9].contains("playing 8000.00 Hz"));
        assert!(played.iter().all(|l| l.contains("on ch0")));
        assert_eq!(board.last_line(), "sweep complete");
    }

    #[test]
    fn stop_cancels_a_running_sweep() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "TEST");
        run_ms(&mut synth, &mut board, 150);
        assert!(synth.is_sweeping());

        cmd(&mut synth, &mut board, "STOP,0");
        assert!(!synth.is_sweeping());
        run_ms(&mut synth, &mut board, 500);
        assert!(!synth.channel(0).playing);
        assert!(!board.lines.iter().any(|l| l == "sweep complete"));
    }

    #[test]
    fn test_command_restarts_a_running_sweep() {
        let (mut synth, mut board) = setup();
        cmd(&mut synth, &mut board, "TEST");
        run_ms(&mut synth, &mut board, 400);
        board.lines.clear();

        cmd(&mut synth, &mut board, "TEST");
        run_ms(&mut synth, &mut board, 2500);
        let played: Vec<_> = board
            .lines
            .iter()
            .filter(|l| l.starts_with("playing "))
            .collect();
        assert!(played[0].contains("playing 20.00 Hz"), "restart goes back to the bottom");
    }
}
