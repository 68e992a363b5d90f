//! Bounded undo/redo journal with paired old/new batch sequences.

use arrayvec::ArrayVec;

/// Bounded-depth undo/redo history over batches of type `T`.
///
/// Each committed batch stores its old and new side in two parallel
/// sequences capped at `N`; a single index cursor serves both, since
/// they always have equal length. `undo` walks backward through the
/// old side, `redo` forward through the new side. Committing a fresh
/// batch mid-history discards the entries beyond the cursor, and once
/// the capacity bound is hit the oldest entry is dropped.
///
/// The cursor is a position index, so `Clone` transfers history and
/// cursor offset together.
#[derive(Clone, Debug)]
pub struct Journal<T, const N: usize> {
    older: ArrayVec<T, N>,
    newer: ArrayVec<T, N>,
    /// Current history position (meaningful only when non-empty).
    cursor: usize,
}

impl<T, const N: usize> Journal<T, N> {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self {
            older: ArrayVec::new(),
            newer: ArrayVec::new(),
            cursor: 0,
        }
    }

    /// Drop all history and reset the cursor.
    pub fn clear(&mut self) {
        self.older.clear();
        self.newer.clear();
        self.cursor = 0;
    }

    /// Commit a batch as the newest history entry.
    pub fn push(&mut self, old: T, new: T) {
        // A push mid-history invalidates everything beyond the cursor.
        if self.cursor + 1 < self.older.len() {
            self.older.truncate(self.cursor + 1);
            self.newer.truncate(self.cursor + 1);
        }
        if self.older.is_full() {
            self.older.remove(0);
            self.newer.remove(0);
        }
        self.older.push(old);
        self.newer.push(new);
        self.cursor = self.older.len() - 1;
    }

    /// Step backward: returns the old side at the cursor, then moves
    /// the cursor toward the start. At the bottom of the history the
    /// oldest entry is returned again rather than failing; `None` only
    /// when the journal is empty.
    pub fn undo(&mut self) -> Option<&T> {
        if self.older.is_empty() {
            return None;
        }
        let at = self.cursor;
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        Some(&self.older[at])
    }

    /// Step forward: moves the cursor toward the end if not already
    /// there, then returns the new side at the cursor. Immediately
    /// after an `undo` this yields the batch that was just undone.
    /// `None` only when the journal is empty.
    pub fn redo(&mut self) -> Option<&T> {
        if self.newer.is_empty() {
            return None;
        }
        if self.cursor + 1 < self.newer.len() {
            self.cursor += 1;
        }
        Some(&self.newer[self.cursor])
    }

    /// Number of batches currently held.
    pub fn len(&self) -> usize {
        self.older.len()
    }

    /// Returns true if no batch has been committed.
    pub fn is_empty(&self) -> bool {
        self.older.is_empty()
    }

    /// History capacity bound.
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<T, const N: usize> Default for Journal<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
