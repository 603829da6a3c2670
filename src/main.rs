//! duotone CLI — serial tone commands in, audio out.
//!
//! Usage:
//!   duotone                          interactive: command lines on stdin
//!   duotone demo.txt                 play a command script
//!   duotone demo.txt --wav out.wav   render a command script offline
//!
//! Script lines may carry an `@<ms>` prefix to schedule them on the
//! session clock; bare lines are sent right after the previous one and
//! `#` starts a comment.

mod session;
mod wav;

use std::{env, fs};

use dt_board::CpalOutput;
use session::{FrameBuffer, LineSource, TimedLine, MAX_RENDER_SECONDS};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut script_path: Option<String> = None;
    let mut wav_path: Option<String> = None;
    let mut rate: u32 = 44_100;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--wav" => {
                wav_path = Some(take_value(&args, i));
                i += 2;
            }
            "--rate" => {
                rate = parse_rate(&take_value(&args, i)).unwrap_or_else(|| usage());
                i += 2;
            }
            flag if flag.starts_with('-') => usage(),
            path => {
                if script_path.replace(path.to_string()).is_some() {
                    usage();
                }
                i += 1;
            }
        }
    }

    let script = script_path.map(|path| {
        let text = fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!("Failed to read {}: {}", path, e);
            std::process::exit(1);
        });
        session::parse_script(&text)
    });

    match wav_path {
        Some(out) => {
            let Some(lines) = script else {
                eprintln!("WAV rendering needs a command script");
                usage();
            };
            render_to_wav(lines, rate, &out);
        }
        None => play_live(script),
    }
}

fn take_value(args: &[String], i: usize) -> String {
    args.get(i + 1).cloned().unwrap_or_else(|| usage())
}

/// Output rates must be positive; zero would stall the session clock.
fn parse_rate(text: &str) -> Option<u32> {
    text.parse().ok().filter(|hz| *hz > 0)
}

fn usage() -> ! {
    eprintln!("Usage: duotone [script.txt] [--wav output.wav] [--rate hz]");
    std::process::exit(1);
}

fn play_live(script: Option<Vec<TimedLine>>) {
    let (mut output, consumer) = CpalOutput::new().unwrap_or_else(|e| {
        eprintln!("Audio init failed: {}", e);
        std::process::exit(1);
    });
    output.build_stream(consumer).unwrap_or_else(|e| {
        eprintln!("Audio stream failed: {}", e);
        std::process::exit(1);
    });
    let _ = output.start();

    let (source, cap) = match script {
        Some(lines) => (LineSource::script(lines), Some(MAX_RENDER_SECONDS)),
        None => (LineSource::stdin(), None),
    };
    session::run(&mut output, source, cap);

    let _ = output.stop();
}

fn render_to_wav(lines: Vec<TimedLine>, rate: u32, path: &str) {
    println!("Rendering to {} at {} Hz...", path, rate);

    let mut sink = FrameBuffer::new(rate);
    session::run(&mut sink, LineSource::script(lines), Some(MAX_RENDER_SECONDS));

    let bytes = wav::frames_to_wav(&sink.frames, rate);
    fs::write(path, &bytes).unwrap_or_else(|e| {
        eprintln!("Failed to write {}: {}", path, e);
        std::process::exit(1);
    });
    println!("Wrote {} frames ({} bytes)", sink.frames.len(), bytes.len());
}
