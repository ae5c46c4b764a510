//! Closed-form placement fields.
//!
//! Pure functions of the signed slot offset `z = slot * SPACING - position`.
//! All three are continuous over the whole axis, so items never pop as they
//! cross the focus.

use crate::config::FlowConfig;
use std::f64::consts::PI;

/// Placement triple for one item, consumed by an external renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    /// Displacement along the principal axis.
    pub offset: f64,
    /// Inward rotation in degrees; 0 faces the viewer.
    pub angle_deg: f64,
    /// Displacement toward the viewer.
    pub depth: f64,
}

/// Axis displacement: `Integrate[t + w*exp(-(x/s)^2), {x, 0, z}]`.
///
/// `t` = `edge_slope`, `w` = `center_area`, `s` = `position_roughness`.
/// The Gaussian term widens spacing across the middle area; far from the
/// focus spacing settles to the `t` slope. Exactly odd in `z`.
#[inline]
pub fn axis_displacement(z: f64, cfg: &FlowConfig) -> f64 {
    let s = cfg.position_roughness;
    0.5 * PI.sqrt() * s * cfg.center_area * libm::erf(z / s) + cfg.edge_slope * z
}

/// Inward rotation in degrees: 0 at the focus, saturating toward
/// ∓`rotation_deg` per side as `|z|` grows.
#[inline]
pub fn rotation_angle(z: f64, cfg: &FlowConfig) -> f64 {
    let s = cfg.rotation_area;
    let v = (-(z * z) / (s * s)).exp() - 1.0;
    cfg.rotation_deg * if 0.0 < z { v } else { -v }
}

/// Depth displacement: a Gaussian peaking at `zoom` on the focused item and
/// decaying to 0 away from it.
#[inline]
pub fn depth_displacement(z: f64, cfg: &FlowConfig) -> f64 {
    let s = cfg.zoom_area;
    cfg.zoom * (-(z * z) / (s * s)).exp()
}

/// Evaluate all three fields at one slot offset.
#[inline]
pub fn placement(z: f64, cfg: &FlowConfig) -> Placement {
    Placement {
        offset: axis_displacement(z, cfg),
        angle_deg: rotation_angle(z, cfg),
        depth: depth_displacement(z, cfg),
    }
}
