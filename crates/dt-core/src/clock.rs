//! Wrapping clock arithmetic.
//!
//! Board timestamps are free-running `u32` counters that wrap (about 49
//! days of milliseconds, 71 minutes of microseconds). Durations measured
//! with wrapping subtraction stay correct across a single wrap, so the
//! engine never compares timestamps directly.

/// Ticks elapsed from `since` to `now`, correct across one counter wrap.
#[inline]
pub fn elapsed(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}

/// Ticks left of a duration after `elapsed` have passed, floored at zero.
#[inline]
pub fn remaining(duration: u32, elapsed: u32) -> u32 {
    duration.saturating_sub(elapsed)
}
