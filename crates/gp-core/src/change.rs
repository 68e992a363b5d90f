//! Change records tying a pad value to its grid coordinates.

use crate::pad::Pad;

/// One cell's coordinates plus a pad value.
///
/// Used for both sides of an edit: "the pad at (slot, step) had this
/// value" in the undo log's old side, "has this value" in the new side
/// and in redraw notifications.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PadChange {
    pub slot: usize,
    pub step: usize,
    pub pad: Pad,
}

impl PadChange {
    /// Create a change record.
    pub const fn new(slot: usize, step: usize, pad: Pad) -> Self {
        Self { slot, step, pad }
    }
}
