//! Headless editor controller for glitchpad.
//!
//! Owns a pattern and maps gesture-level operations (paint a run of
//! steps, erase a region, toggle one pad) onto per-cell mutation plus a
//! commit at the gesture boundary, so every gesture is exactly one undo
//! step. The plugin GUI and the CLI share this API.

use std::ops::Range;

use gp_formats::{pattern_from_string, pattern_to_string};

// Re-export common types so callers don't need gp-core/gp-formats directly.
pub use gp_core::{Pad, PadChange, Pattern, MAX_UNDO, NR_SLOTS, NR_STEPS};
pub use gp_formats::PadSymbols;

/// Headless pattern editor — owns a grid and commits per gesture.
pub struct Editor {
    pattern: Pattern,
    symbols: PadSymbols<'static>,
}

impl Editor {
    /// Create an editor over an empty grid with the conventional state
    /// field names.
    pub fn new(slots: usize, steps: usize) -> Self {
        Self::with_symbols(slots, steps, PadSymbols::DEFAULT)
    }

    /// Create an editor that persists under caller-chosen field names.
    pub fn with_symbols(slots: usize, steps: usize, symbols: PadSymbols<'static>) -> Self {
        Self {
            pattern: Pattern::new(slots, steps),
            symbols,
        }
    }

    /// The underlying grid.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Number of non-empty pads.
    pub fn active_pads(&self) -> usize {
        self.pattern.active_pads()
    }

    // --- Gestures ---

    /// Paint one pad value across a run of steps as a single gesture.
    pub fn paint(&mut self, slot: usize, steps: Range<usize>, pad: Pad) {
        for step in steps {
            self.pattern.set_pad(slot, step, pad);
        }
        self.pattern.store();
    }

    /// Reset a rectangular region to empty pads as a single gesture.
    pub fn erase(&mut self, slots: Range<usize>, steps: Range<usize>) {
        for slot in slots {
            for step in steps.clone() {
                self.pattern.set_pad(slot, step, Pad::empty());
            }
        }
        self.pattern.store();
    }

    /// Toggle one pad: set `pad` if the cell is empty, clear it
    /// otherwise. One gesture either way.
    pub fn toggle(&mut self, slot: usize, step: usize, pad: Pad) {
        let next = if self.pattern.pad(slot, step).is_empty() {
            pad
        } else {
            Pad::empty()
        };
        self.pattern.set_pad(slot, step, next);
        self.pattern.store();
    }

    /// Wipe the grid; the reset becomes the new undo floor.
    pub fn clear(&mut self) {
        self.pattern.clear();
    }

    // --- History ---

    /// Undo the last gesture. Returns the cells to redraw; empty when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> Vec<PadChange> {
        self.pattern.undo().unwrap_or_default()
    }

    /// Redo the next gesture. Returns the cells to redraw; empty when
    /// there is nothing to redo.
    pub fn redo(&mut self) -> Vec<PadChange> {
        self.pattern.redo().unwrap_or_default()
    }

    // --- Persistence ---

    /// Serialize the grid to the host state document.
    pub fn save(&self) -> String {
        pattern_to_string(&self.pattern, &self.symbols)
    }

    /// Import a state document, replacing the grid contents as one
    /// undoable batch. Returns the number of records applied.
    pub fn load(&mut self, text: &str) -> usize {
        pattern_from_string(&mut self.pattern, text, &self.symbols)
    }
}
