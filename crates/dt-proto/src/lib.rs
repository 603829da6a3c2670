//! Serial line protocol for the duotone synth.
//!
//! Inbound control is newline-delimited ASCII: a case-insensitive keyword
//! followed by comma-separated numeric fields, plus a keyword-less legacy
//! two-field form. Parsing is deliberately permissive and never fails a
//! line; see [`parse_line`] for the fallback rules.
//!
//! Designed to be `no_std` compatible.

#![cfg_attr(not(feature = "std"), no_std)]

mod line;
mod parse;

pub use line::{LineBuffer, MAX_LINE_LEN};
pub use parse::parse_line;
