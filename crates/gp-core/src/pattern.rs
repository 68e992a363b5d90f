//! Pad grid with transactional batched mutation backed by the journal.

use alloc::vec::Vec;

use crate::change::PadChange;
use crate::journal::Journal;
use crate::pad::Pad;

/// Maximum number of undoable batches retained by a pattern.
pub const MAX_UNDO: usize = 20;

/// Default grid dimensions from the plugin configuration.
pub const NR_SLOTS: usize = 12;
/// Default sequencer resolution.
pub const NR_STEPS: usize = 32;

/// A 2-D grid of pads (effect slots x sequencer steps) with undo/redo.
///
/// Mutations accumulate in a pending buffer; `store` commits the
/// accumulated changes to the journal as one undo step. The editing
/// layer calls `store` at gesture boundaries so a whole drag or paste
/// undoes atomically. Everything runs on the UI thread; there is no
/// locking and no reentrancy.
#[derive(Clone, Debug)]
pub struct Pattern {
    slots: usize,
    steps: usize,
    /// Pad data, stored slot-major: data[slot * steps + step]
    data: Vec<Pad>,
    pending_old: Vec<PadChange>,
    pending_new: Vec<PadChange>,
    journal: Journal<Vec<PadChange>, MAX_UNDO>,
}

impl Pattern {
    /// Create a pattern with every pad empty. Dimensions come from the
    /// host configuration and must both be at least 1.
    pub fn new(slots: usize, steps: usize) -> Self {
        assert!(slots > 0 && steps > 0, "pattern dimensions must be at least 1x1");
        Self {
            slots,
            steps,
            data: alloc::vec![Pad::empty(); slots * steps],
            pending_old: Vec::new(),
            pending_new: Vec::new(),
            journal: Journal::new(),
        }
    }

    /// Number of effect slots (rows).
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Number of sequencer steps (columns).
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Backing index for (slot, step). Out-of-range coordinates are
    /// clamped into the grid, never an error.
    fn index(&self, slot: usize, step: usize) -> usize {
        let slot = slot.min(self.slots - 1);
        let step = step.min(self.steps - 1);
        slot * self.steps + step
    }

    /// Get the pad at the given coordinates (clamped into range).
    pub fn pad(&self, slot: usize, step: usize) -> Pad {
        self.data[self.index(slot, step)]
    }

    /// Write one pad, recording the (old, new) pair in the pending
    /// batch.
    ///
    /// Does not commit: successive calls accumulate into a single undo
    /// step until `store` is called. A cell may appear several times in
    /// one batch (e.g. a drag revisiting it); each touch records the
    /// value seen at that moment.
    pub fn set_pad(&mut self, slot: usize, step: usize, pad: Pad) {
        let idx = self.index(slot, step);
        let slot = idx / self.steps;
        let step = idx % self.steps;
        self.pending_old.push(PadChange::new(slot, step, self.data[idx]));
        self.pending_new.push(PadChange::new(slot, step, pad));
        self.data[idx] = pad;
    }

    /// Commit the pending batch as one undo step. No-op when nothing
    /// has been set since the last commit.
    pub fn store(&mut self) {
        if self.pending_new.is_empty() {
            return;
        }
        self.journal.push(
            core::mem::take(&mut self.pending_old),
            core::mem::take(&mut self.pending_new),
        );
    }

    /// Undo the most recent batch.
    ///
    /// Pending changes are committed first. The batch's recorded old
    /// values are applied in reverse accumulation order, so a cell
    /// touched several times within one gesture unwinds to the value it
    /// had before the first touch. Returns the applied changes for
    /// redraw, or `None` when there is no history (safe no-op).
    pub fn undo(&mut self) -> Option<Vec<PadChange>> {
        self.store();
        let mut batch = self.journal.undo()?.clone();
        batch.reverse();
        for change in &batch {
            self.data[change.slot * self.steps + change.step] = change.pad;
        }
        Some(batch)
    }

    /// Redo the next batch, applying its new values in forward order.
    /// Returns the applied changes, or `None` when there is no history.
    pub fn redo(&mut self) -> Option<Vec<PadChange>> {
        self.store();
        let batch = self.journal.redo()?.clone();
        for change in &batch {
            self.data[change.slot * self.steps + change.step] = change.pad;
        }
        Some(batch)
    }

    /// Reset every pad and make that reset the new undo floor: prior
    /// history is discarded and the wipe commits as a single batch.
    pub fn clear(&mut self) {
        self.journal.clear();
        self.pending_old.clear();
        self.pending_new.clear();
        for slot in 0..self.slots {
            for step in 0..self.steps {
                self.set_pad(slot, step, Pad::empty());
            }
        }
        self.store();
    }

    /// Number of non-empty pads.
    pub fn active_pads(&self) -> usize {
        self.data.iter().filter(|p| !p.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad(gate: f32) -> Pad {
        Pad::new(gate, 0.5, 0.5)
    }

    #[test]
    fn set_pad_reads_back() {
        let mut pattern = Pattern::new(4, 8);
        pattern.set_pad(2, 5, pad(1.0));

        assert_eq!(pattern.pad(2, 5), pad(1.0));
        assert_eq!(pattern.pad(2, 4), Pad::empty());
    }

    #[test]
    #[should_panic(expected = "at least 1x1")]
    fn zero_dimensions_are_rejected() {
        let _ = Pattern::new(0, 8);
    }

    #[test]
    fn coordinates_clamp_into_grid() {
        let mut pattern = Pattern::new(4, 8);
        pattern.set_pad(100, 100, pad(1.0));

        assert_eq!(pattern.pad(3, 7), pad(1.0));
        assert_eq!(pattern.pad(100, 100), pad(1.0));
    }

    #[test]
    fn undo_restores_prior_state_and_reports_cells() {
        let mut pattern = Pattern::new(4, 8);
        pattern.set_pad(0, 0, pad(1.0));
        pattern.set_pad(1, 3, pad(0.8));
        pattern.store();

        let batch = pattern.undo().unwrap();
        assert_eq!(batch.len(), 2);
        assert!(batch.iter().any(|c| c.slot == 0 && c.step == 0));
        assert!(batch.iter().any(|c| c.slot == 1 && c.step == 3));
        assert_eq!(pattern.pad(0, 0), Pad::empty());
        assert_eq!(pattern.pad(1, 3), Pad::empty());
    }

    #[test]
    fn redo_after_undo_restores_edit() {
        let mut pattern = Pattern::new(4, 8);
        pattern.set_pad(0, 0, pad(1.0));
        pattern.store();

        pattern.undo().unwrap();
        assert_eq!(pattern.pad(0, 0), Pad::empty());

        let batch = pattern.redo().unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(pattern.pad(0, 0), pad(1.0));
    }

    #[test]
    fn same_cell_twice_in_one_batch_unwinds_to_first_value() {
        let mut pattern = Pattern::new(4, 8);
        pattern.set_pad(2, 2, pad(0.3));
        pattern.store();

        // One gesture overwriting the same cell repeatedly.
        pattern.set_pad(2, 2, pad(0.6));
        pattern.set_pad(2, 2, pad(0.9));
        pattern.store();

        pattern.undo().unwrap();
        assert_eq!(pattern.pad(2, 2), pad(0.3));
    }

    #[test]
    fn undo_auto_commits_pending_changes() {
        let mut pattern = Pattern::new(4, 8);
        pattern.set_pad(0, 1, pad(1.0));

        // No store() yet: undo must commit and immediately unwind.
        pattern.undo().unwrap();
        assert_eq!(pattern.pad(0, 1), Pad::empty());
    }

    #[test]
    fn undo_on_empty_history_is_noop() {
        let mut pattern = Pattern::new(4, 8);
        assert!(pattern.undo().is_none());
        assert!(pattern.redo().is_none());
    }

    #[test]
    fn new_gesture_after_undo_discards_redo_target() {
        let mut pattern = Pattern::new(4, 8);
        pattern.set_pad(0, 0, pad(0.2));
        pattern.store();
        pattern.set_pad(0, 0, pad(0.4));
        pattern.store();

        pattern.undo().unwrap();
        pattern.set_pad(0, 0, pad(0.9));
        pattern.store();

        // The (0.4) state is gone; redo re-yields the current batch.
        pattern.redo();
        assert_eq!(pattern.pad(0, 0), pad(0.9));
    }

    #[test]
    fn clear_becomes_the_undo_floor() {
        let mut pattern = Pattern::new(2, 2);
        pattern.set_pad(0, 0, pad(1.0));
        pattern.store();
        pattern.clear();

        assert_eq!(pattern.active_pads(), 0);

        // The wipe itself is the single undoable batch left.
        pattern.undo().unwrap();
        assert_eq!(pattern.pad(0, 0), pad(1.0));
        pattern.redo().unwrap();
        assert_eq!(pattern.active_pads(), 0);
    }

    #[test]
    fn history_is_bounded() {
        let mut pattern = Pattern::new(1, 1);
        for i in 1..=(MAX_UNDO + 1) {
            pattern.set_pad(0, 0, pad(i as f32 / 100.0));
            pattern.store();
        }

        for _ in 0..(MAX_UNDO + 5) {
            pattern.undo();
        }

        // The very first batch fell out of the journal, so the initial
        // empty state is unreachable; the floor is the first retained
        // batch's old side.
        assert_eq!(pattern.pad(0, 0), pad(0.01));
    }
}
