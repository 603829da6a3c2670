//! Hardware abstraction the synth core drives.

/// The hardware surface of the device.
///
/// An implementation owns the two output pins, the hardware tone unit,
/// the boot-relative clock, and the outbound side of the serial console.
/// Each pin belongs to exactly one channel index for the lifetime of the
/// board.
pub trait Board {
    /// Milliseconds since boot. Wraps; compare with [`crate::elapsed`].
    fn now_ms(&self) -> u32;

    /// Microseconds since boot. Wraps; compare with [`crate::elapsed`].
    fn now_us(&self) -> u32;

    /// Drive a channel's output pin high or low.
    fn set_pin(&mut self, channel: u8, high: bool);

    /// Start autonomous square-wave generation on a channel's pin.
    ///
    /// The pin toggles on its own until [`Board::stop_tone`]. While a tone
    /// is active, [`Board::set_pin`] writes on that channel are overridden
    /// by the tone unit.
    fn start_tone(&mut self, channel: u8, hz: f32);

    /// Stop autonomous generation on a channel's pin.
    fn stop_tone(&mut self, channel: u8);

    /// Write one advisory line to the serial console.
    fn write_line(&mut self, line: &str);
}
