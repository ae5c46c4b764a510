//! Bounded-dynamics tracking controller for the browsing position.
//!
//! The controller drives a continuous scalar position toward the discrete
//! focus index. Velocity is clamped to `v_max`; velocity changes are clamped
//! to `a_max` only while speeding up, never while slowing down, which keeps
//! arrivals snappy instead of mushy. Each frame is integrated in
//! [`SUBSTEPS`](crate::constants::SUBSTEPS) equal substeps for stability.

use crate::config::FlowConfig;
use crate::constants::SUBSTEPS;

/// Continuous browsing state: where we are and how fast we are moving.
///
/// Created once at (0, 0) when a session starts and mutated only by
/// [`step`]; exposed read-only elsewhere for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControllerState {
    pub position: f64,
    pub velocity: f64,
}

/// Unimodal catch-up bump `(x/a) * exp(1 - x/a)`, peaking at `x == a`.
///
/// Plain proportional control decays too slowly once the remaining distance
/// gets small; this adds extra speed in exactly that regime. `a` must be
/// nonzero (validated at session startup).
#[inline]
pub fn impulse(x: f64, a: f64) -> f64 {
    let over_a = 1.0 / a;
    over_a * x * (1.0 - over_a * x).exp()
}

/// Advance `state` toward `target` over one frame of `dt` seconds.
///
/// `dt` is expected to be pre-clamped by the caller (see
/// [`MAX_FRAME_DT`](crate::constants::MAX_FRAME_DT)). Deterministic given
/// the same inputs; `dt = 0` moves nothing. A discontinuous jump in
/// `target` jumps the error term, but the acceleration bound keeps the
/// position trajectory itself continuous.
pub fn step(state: &mut ControllerState, dt: f64, target: f64, cfg: &FlowConfig) {
    let h = dt / SUBSTEPS as f64;
    for _ in 0..SUBSTEPS {
        let e = target - state.position;

        // Proportional term sets the base speed.
        let pv = e * cfg.kp;

        // Catch-up speed when the distance is short, sign-matched to pv.
        let mut nv = impulse(e.abs(), cfg.approach_width) * cfg.approach;
        if pv < 0.0 {
            nv = -nv;
        }

        let mut v = (pv + nv).clamp(-cfg.v_max, cfg.v_max);

        // Limit acceleration only; deceleration stays unclamped.
        if state.velocity.abs() < v.abs() {
            let amax = cfg.a_max * h;
            let a = (v - state.velocity).clamp(-amax, amax);
            v = state.velocity + a;
        }

        state.velocity = v;
        state.position += state.velocity * h;
    }
}
