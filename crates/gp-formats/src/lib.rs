//! Pattern state text format for glitchpad.
//!
//! Serializes the non-empty pads of a pattern into the host's state
//! string and parses such strings back into a grid. Field names are
//! supplied by the caller so the persisted format can be versioned
//! without touching this crate.

mod text_format;

pub use text_format::{pattern_from_string, pattern_to_string, PadSymbols};
