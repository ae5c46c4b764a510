//! Discrete focus selection over a fixed set of slots.

/// The focused slot index, re-clamped to `[0, len - 1]` after every
/// mutation. Advance/retreat requests at the ends leave it unchanged.
#[derive(Clone, Copy, Debug)]
pub struct TargetSelector {
    index: usize,
    len: usize,
}

impl TargetSelector {
    /// Selector over `len` slots, starting focused on slot 0.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Jump directly to `index`, clamped to the valid range.
    pub fn set(&mut self, index: usize) {
        self.index = index.min(self.len.saturating_sub(1));
    }

    /// Move focus one slot toward the end.
    pub fn advance(&mut self) {
        self.set(self.index.saturating_add(1));
    }

    /// Move focus one slot toward the start.
    pub fn retreat(&mut self) {
        self.set(self.index.saturating_sub(1));
    }
}
