//! Channel status reporting.

use core::fmt::Write;

use dt_core::{elapsed, remaining};
use heapless::String;

use crate::channel::Channel;

/// Capacity for one outbound console line.
pub const LINE_CAP: usize = 96;

const SIDE_NAMES: [&str; 2] = ["left", "right"];

/// One human-readable line describing a channel. Read-only; the format
/// is advisory and senders must not parse it.
pub fn channel_line(index: usize, ch: &Channel, now_ms: u32) -> String<LINE_CAP> {
    let mut out: String<LINE_CAP> = String::new();
    let side = SIDE_NAMES.get(index).copied().unwrap_or("?");
    let _ = write!(out, "ch{} ({}): vol {} | ", index, side, ch.volume_default);
    if ch.playing {
        let left = remaining(ch.note_duration_ms, elapsed(now_ms, ch.note_start_ms));
        let _ = write!(out, "playing {:.2} Hz, {} ms left", ch.frequency, left);
    } else {
        let _ = write!(out, "idle");
    }
    out
}
