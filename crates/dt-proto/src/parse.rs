//! Line-to-command decoding.
//!
//! Grammar (keywords case-insensitive, fields comma-separated):
//!
//! ```text
//! FREQ,hz,ms[,ch[,vol]]     play a raw frequency
//! NOTE,n,ms[,ch[,vol]]      play a MIDI note
//! CHORD,n0,n1,ms            two notes, channel 0 and 1
//! MONO,n,ms                 one note on both channels
//! BEND,ch,hz,ms             glide an active note to a target
//! VOLUME,vol[,ch]           set persistent default volume
//! STOP[,ch]                 stop one or both channels
//! STATUS                    report channel state
//! TEST                      frequency sweep diagnostic
//! hz,ms                     legacy form, plays on channel 0
//! ```
//!
//! Decoding never fails. Numeric fields take their leading numeric
//! prefix (`440Hz` reads as 440) and fall back to 0 when there is none;
//! absent trailing fields take their documented defaults; volume is
//! clamped to `0..=255` here. Channel values are carried as parsed so
//! the engine can drop out-of-range ones. A line matching no form at
//! all decodes to [`Command::Unknown`].

use dt_core::{clamp_volume, Command};
use heapless::String;

/// Decode one stripped line into a [`Command`].
pub fn parse_line(line: &str) -> Command {
    let line = line.trim();
    let mut fields = line.split(',').map(str::trim);
    let head = fields.next().unwrap_or("");

    let mut key: String<8> = String::new();
    for c in head.chars() {
        if key.push(c.to_ascii_uppercase()).is_err() {
            break;
        }
    }

    match key.as_str() {
        "FREQ" => Command::Freq {
            hz: fields.next().map_or(0.0, float_prefix),
            duration_ms: fields.next().map_or(0, duration_field),
            channel: fields.next().map_or(0, int_field),
            volume: fields.next().map(volume_field),
        },
        "NOTE" => Command::Note {
            note: fields.next().map_or(0, int_field),
            duration_ms: fields.next().map_or(0, duration_field),
            channel: fields.next().map_or(0, int_field),
            volume: fields.next().map(volume_field),
        },
        "CHORD" => Command::Chord {
            note0: fields.next().map_or(0, int_field),
            note1: fields.next().map_or(0, int_field),
            duration_ms: fields.next().map_or(0, duration_field),
        },
        "MONO" => Command::Mono {
            note: fields.next().map_or(0, int_field),
            duration_ms: fields.next().map_or(0, duration_field),
        },
        "BEND" => Command::Bend {
            channel: fields.next().map_or(0, int_field),
            target_hz: fields.next().map_or(0.0, float_prefix),
            duration_ms: fields.next().map_or(0, duration_field),
        },
        "VOLUME" => Command::Volume {
            volume: fields.next().map_or(0, volume_field),
            channel: fields.next().map(int_field),
        },
        "STOP" => Command::Stop {
            channel: fields.next().map(int_field),
        },
        "STATUS" => Command::Status,
        "TEST" => Command::Test,
        _ => legacy_freq(line),
    }
}

/// The keyword-less `hz,ms` form kept for old senders: exactly one
/// comma and a numeric first field, always channel 0.
fn legacy_freq(line: &str) -> Command {
    let mut fields = line.split(',').map(str::trim);
    let (hz, ms) = match (fields.next(), fields.next(), fields.next()) {
        (Some(a), Some(b), None) => (a, b),
        _ => return Command::Unknown,
    };
    if !has_numeric_prefix(hz) {
        return Command::Unknown;
    }
    Command::Freq {
        hz: float_prefix(hz),
        duration_ms: duration_field(ms),
        channel: 0,
        volume: None,
    }
}

fn has_numeric_prefix(s: &str) -> bool {
    let b = s.as_bytes();
    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i = 1;
    }
    if matches!(b.get(i), Some(b'.')) {
        i += 1;
    }
    matches!(b.get(i), Some(c) if c.is_ascii_digit())
}

/// Leading integer prefix of a field, `atoi` style: optional sign, then
/// digits up to the first non-digit. No digits reads as 0; overflow
/// saturates.
fn int_prefix(s: &str) -> i64 {
    let b = s.as_bytes();
    let neg = matches!(b.first(), Some(b'-'));
    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i = 1;
    }
    let mut v: i64 = 0;
    let mut seen = false;
    while let Some(c) = b.get(i) {
        if !c.is_ascii_digit() {
            break;
        }
        seen = true;
        v = v.saturating_mul(10).saturating_add((c - b'0') as i64);
        i += 1;
    }
    if !seen {
        0
    } else if neg {
        -v
    } else {
        v
    }
}

/// Leading decimal prefix of a field, `atof` style (no exponents, the
/// senders never produce them). No digits reads as 0.
fn float_prefix(s: &str) -> f32 {
    let b = s.as_bytes();
    let mut end = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(c) = b.get(end) {
        match c {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return 0.0;
    }
    s[..end].parse().unwrap_or(0.0)
}

fn int_field(f: &str) -> i32 {
    int_prefix(f).clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

fn duration_field(f: &str) -> u32 {
    int_prefix(f).clamp(0, u32::MAX as i64) as u32
}

fn volume_field(f: &str) -> u8 {
    clamp_volume(int_prefix(f))
}
