//! Per-item spin memory for the focused highlight.

use crate::constants::SPIN_STEP_DEG;

/// Persisted spin phase per item plus the active accumulator.
///
/// While an item stays focused its phase advances by a fixed step every
/// frame, without bound and without wraparound. On a selection change the
/// outgoing item's phase is parked in its slot and the incoming item's
/// parked phase becomes active, so re-selecting an item resumes its spin
/// where it left off instead of resetting to zero.
#[derive(Clone, Debug)]
pub struct SpinTracker {
    rotators: Vec<f64>,
    curr: f64,
}

impl SpinTracker {
    pub fn new(len: usize) -> Self {
        Self {
            rotators: vec![0.0; len],
            curr: 0.0,
        }
    }

    /// Transition from focused slot `old` to focused slot `new`.
    ///
    /// Park-then-activate order makes `old == new` an identity.
    pub fn retarget(&mut self, old: usize, new: usize) {
        if let Some(slot) = self.rotators.get_mut(old) {
            *slot = self.curr;
        }
        if let Some(slot) = self.rotators.get(new) {
            self.curr = *slot;
        }
    }

    /// Advance the focused item's phase by one frame.
    pub fn tick(&mut self) {
        self.curr += SPIN_STEP_DEG;
    }

    /// Active phase of the focused item, in degrees.
    pub fn current(&self) -> f64 {
        self.curr
    }
}
