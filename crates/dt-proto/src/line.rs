//! Byte-stream to line assembly.

use core::mem;
use heapless::String;

/// Longest accepted command line; bytes past this are dropped until the
/// next terminator.
pub const MAX_LINE_LEN: usize = 64;

/// Accumulates inbound serial bytes into complete command lines.
///
/// `\n` terminates a line, `\r` and non-ASCII noise are discarded, and
/// blank lines are swallowed so senders can keep the link warm with bare
/// newlines. One instance per link.
#[derive(Default)]
pub struct LineBuffer {
    buf: String<MAX_LINE_LEN>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one byte; returns the finished line when this byte completes
    /// one.
    pub fn push(&mut self, byte: u8) -> Option<String<MAX_LINE_LEN>> {
        match byte {
            b'\n' => {
                if self.buf.is_empty() {
                    None
                } else {
                    Some(mem::take(&mut self.buf))
                }
            }
            b'\r' => None,
            b if b.is_ascii() => {
                // overlong lines are truncated at the cap
                let _ = self.buf.push(b as char);
                None
            }
            _ => None,
        }
    }
}
