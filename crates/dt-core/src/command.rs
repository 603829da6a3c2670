//! Decoded commands from the serial link.

/// A decoded command line.
///
/// Channel fields carry whatever integer the line held; range checking
/// happens when the command is applied, not here. A `None` volume means
/// "use the channel's persistent default".
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Play a raw frequency on one channel
    Freq {
        hz: f32,
        duration_ms: u32,
        channel: i32,
        volume: Option<u8>,
    },
    /// Play a MIDI note on one channel
    Note {
        note: i32,
        duration_ms: u32,
        channel: i32,
        volume: Option<u8>,
    },
    /// Two simultaneous notes, first on channel 0, second on channel 1
    Chord {
        note0: i32,
        note1: i32,
        duration_ms: u32,
    },
    /// The same note on both channels at once
    Mono { note: i32, duration_ms: u32 },
    /// Glide an active note's frequency toward a target
    Bend {
        channel: i32,
        target_hz: f32,
        duration_ms: u32,
    },
    /// Set the persistent default volume for one or both channels
    Volume { volume: u8, channel: Option<i32> },
    /// Stop one channel, or both when no channel is given
    Stop { channel: Option<i32> },
    /// Report the state of both channels
    Status,
    /// Run the frequency sweep diagnostic
    Test,
    /// A line that matched no known form
    Unknown,
}
