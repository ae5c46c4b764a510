//! Engine façade tying selection, kinematics, spin, and placement together.
//!
//! One [`Coverflow`] value owns all per-session mutable state; the host
//! calls the input mutators between frames and [`Coverflow::update`] once
//! per frame, then hands the returned placements to its renderer. Within a
//! frame the ordering is strict: input mutation, controller step, spin
//! tick, placement fill.

use crate::config::{ConfigError, FlowConfig};
use crate::constants::{MAX_FRAME_DT, SPACING};
use crate::controller::{self, ControllerState};
use crate::field::{self, Placement};
use crate::selector::TargetSelector;
use crate::spin::SpinTracker;

/// One browsing session over a fixed set of items.
pub struct Coverflow {
    config: FlowConfig,
    selector: TargetSelector,
    state: ControllerState,
    spin: SpinTracker,
    placements: Vec<Placement>,
}

impl Coverflow {
    /// Build a session over `item_count` slots, starting at rest on slot 0.
    ///
    /// The configuration is validated once here; a zero approach width or
    /// an out-of-bounds scalar is a fatal misconfiguration, never a
    /// per-frame condition.
    pub fn new(item_count: usize, config: FlowConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            selector: TargetSelector::new(item_count),
            state: ControllerState::default(),
            spin: SpinTracker::new(item_count),
            placements: vec![Placement::default(); item_count],
        })
    }

    /// Move focus one slot toward the end; at the last slot this is a no-op.
    pub fn advance(&mut self) {
        let old = self.selector.index();
        self.selector.advance();
        self.on_focus_change(old);
    }

    /// Move focus one slot toward the start; at slot 0 this is a no-op.
    pub fn retreat(&mut self) {
        let old = self.selector.index();
        self.selector.retreat();
        self.on_focus_change(old);
    }

    /// Jump focus directly to `index` (clamped).
    pub fn focus(&mut self, index: usize) {
        let old = self.selector.index();
        self.selector.set(index);
        self.on_focus_change(old);
    }

    fn on_focus_change(&mut self, old: usize) {
        let new = self.selector.index();
        self.spin.retarget(old, new);
        if old != new {
            log::debug!("focus {old} -> {new}");
        }
    }

    /// Advance the session by one frame and lay out every item.
    ///
    /// `dt` is clamped to [`MAX_FRAME_DT`] before integration so a stalled
    /// frame cannot destabilize the bounded-acceleration stepping. Returns
    /// the placement triple for every slot; the focused item carries its
    /// spin phase on top of the base rotation field.
    pub fn update(&mut self, dt: f64) -> &[Placement] {
        let dt = dt.min(MAX_FRAME_DT);
        let target = self.selector.index() as f64;
        controller::step(&mut self.state, dt, target, &self.config);
        self.spin.tick();
        let focused = self.selector.index();
        for (i, p) in self.placements.iter_mut().enumerate() {
            let z = i as f64 * SPACING - self.state.position;
            *p = field::placement(z, &self.config);
            if i == focused {
                p.angle_deg -= self.spin.current();
            }
        }
        &self.placements
    }

    /// Focused slot index.
    pub fn focused(&self) -> usize {
        self.selector.index()
    }

    /// Read-only controller diagnostics (position, velocity).
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Active spin phase of the focused item, in degrees.
    pub fn spin_deg(&self) -> f64 {
        self.spin.current()
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Editor write access between frames; callers keep values in bounds.
    pub fn config_mut(&mut self) -> &mut FlowConfig {
        &mut self.config
    }

    /// Placements from the most recent [`update`](Self::update).
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn item_count(&self) -> usize {
        self.placements.len()
    }
}
