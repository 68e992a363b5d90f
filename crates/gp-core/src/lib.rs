//! Core pattern data model for glitchpad.
//!
//! This crate defines the pad grid edited by the plugin UI: the pad
//! value type, change records, the bounded undo/redo journal, and the
//! pattern grid that ties them together. Windowing, rendering, and the
//! host plugin ABI live outside this workspace; they drive the grid
//! through `set_pad`/`store`/`undo`/`redo` and redraw from the returned
//! change batches.
//!
//! Designed to be `no_std` compatible with the `alloc` crate.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod change;
mod journal;
mod pad;
mod pattern;

pub use change::PadChange;
pub use journal::Journal;
pub use pad::Pad;
pub use pattern::{Pattern, MAX_UNDO, NR_SLOTS, NR_STEPS};
