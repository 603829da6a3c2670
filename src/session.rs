//! Session loop: one control pass per rendered audio frame.
//!
//! The simulated device runs at the output sample rate. Each frame the
//! session polls its line source for at most one command, runs one pass,
//! samples the board, and advances the virtual clock by one frame
//! period. Device console output goes to stdout.

use std::collections::VecDeque;
use std::io::Read;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use dt_board::{AudioSink, Frame, SimBoard};
use dt_core::Board;
use dt_engine::Synth;
use dt_proto::LineBuffer;

/// Ceiling on a scripted run, in seconds.
pub const MAX_RENDER_SECONDS: u32 = 300;

/// A command line and the session time it should reach the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedLine {
    pub at_ms: u32,
    pub text: String,
}

/// Where command lines come from.
pub enum LineSource {
    /// Raw bytes from another thread, assembled device-side.
    Serial {
        rx: Receiver<Vec<u8>>,
        pending: VecDeque<u8>,
        buffer: LineBuffer,
        closed: bool,
    },
    /// A pre-timed script.
    Script { lines: VecDeque<TimedLine> },
}

impl LineSource {
    pub fn script(lines: Vec<TimedLine>) -> Self {
        LineSource::Script {
            lines: lines.into(),
        }
    }

    /// Wrap a raw byte channel as a serial feed.
    pub fn serial(rx: Receiver<Vec<u8>>) -> Self {
        LineSource::Serial {
            rx,
            pending: VecDeque::new(),
            buffer: LineBuffer::new(),
            closed: false,
        }
    }

    /// Spawn a reader thread that forwards stdin bytes to the session.
    pub fn stdin() -> Self {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let mut stdin = std::io::stdin();
            let mut chunk = [0u8; 256];
            loop {
                match stdin.read(&mut chunk) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        if tx.send(chunk[..n].to_vec()).is_err() {
                            break;
                        }
                    }
                }
            }
        });
        Self::serial(rx)
    }

    /// At most one line per call; bytes beyond the first complete line
    /// wait for the next pass.
    fn poll(&mut self, now_ms: u32) -> Option<String> {
        match self {
            LineSource::Serial {
                rx,
                pending,
                buffer,
                closed,
            } => {
                if !*closed {
                    loop {
                        match rx.try_recv() {
                            Ok(bytes) => pending.extend(bytes),
                            Err(TryRecvError::Empty) => break,
                            Err(TryRecvError::Disconnected) => {
                                *closed = true;
                                break;
                            }
                        }
                    }
                }
                while let Some(byte) = pending.pop_front() {
                    if let Some(line) = buffer.push(byte) {
                        return Some(line.as_str().to_owned());
                    }
                }
                None
            }
            LineSource::Script { lines } => {
                if lines.front().is_some_and(|l| l.at_ms <= now_ms) {
                    lines.pop_front().map(|l| l.text)
                } else {
                    None
                }
            }
        }
    }

    fn is_exhausted(&self) -> bool {
        match self {
            LineSource::Serial {
                pending, closed, ..
            } => *closed && pending.is_empty(),
            LineSource::Script { lines } => lines.is_empty(),
        }
    }
}

/// Parse a script: one command per line, optionally prefixed with
/// `@<ms>` to schedule it on the session clock. A bare `@<ms>` line
/// just moves the clock forward for the lines after it.
pub fn parse_script(text: &str) -> Vec<TimedLine> {
    let mut out = Vec::new();
    let mut last_ms = 0u32;
    for raw in text.lines() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (at_ms, text) = match split_timestamp(trimmed) {
            Some((ms, rest)) => (ms.max(last_ms), rest),
            None => (last_ms, trimmed),
        };
        last_ms = at_ms;
        if !text.is_empty() {
            out.push(TimedLine {
                at_ms,
                text: text.to_string(),
            });
        }
    }
    out
}

fn split_timestamp(line: &str) -> Option<(u32, &str)> {
    let rest = line.strip_prefix('@')?;
    let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let ms = rest[..end].parse().ok()?;
    Some((ms, rest[end..].trim_start()))
}

/// Drive the device until the line source runs dry and all sound dies
/// out, pushing one frame per pass into `sink`. The sink's sample rate
/// must be positive.
pub fn run(sink: &mut dyn AudioSink, mut source: LineSource, max_seconds: Option<u32>) {
    let mut synth = Synth::new();
    let mut board = SimBoard::new();

    let rate = sink.sample_rate() as u64;
    debug_assert!(rate > 0);
    let step_us = 1_000_000 / rate;
    let step_rem = 1_000_000 % rate;
    let mut acc: u64 = 0;

    let cap = max_seconds.map(|s| rate * s as u64);
    let mut frames: u64 = 0;

    synth.boot(&mut board);
    flush_console(&mut board);

    while cap.map_or(true, |c| frames < c) {
        let line = source.poll(board.now_ms());
        synth.pass(&mut board, line.as_deref());
        flush_console(&mut board);

        sink.push(board.sample());
        frames += 1;

        // Spread the fractional microsecond across frames.
        let mut dt = step_us;
        acc += step_rem;
        if acc >= rate {
            acc -= rate;
            dt += 1;
        }
        board.advance(dt);

        if source.is_exhausted() && synth.is_idle() {
            break;
        }
    }
    log::debug!("session ended after {} frames", frames);

    // Tail pad so live output drains before the stream stops.
    for _ in 0..rate / 2 {
        sink.push(Frame::silence());
    }
}

fn flush_console(board: &mut SimBoard) {
    for line in board.take_console() {
        println!("{}", line);
    }
}

/// Collects rendered frames for offline export.
pub struct FrameBuffer {
    rate: u32,
    pub frames: Vec<Frame>,
}

impl FrameBuffer {
    pub fn new(rate: u32) -> Self {
        Self {
            rate,
            frames: Vec::new(),
        }
    }
}

impl AudioSink for FrameBuffer {
    fn sample_rate(&self) -> u32 {
        self.rate
    }

    fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }
}
