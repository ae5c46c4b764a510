//! Scalar tuning parameters for the coverflow engine.
//!
//! [`FlowConfig`] is a plain value struct deserialized with
//! `#[serde(default)]`, so a partial settings file overrides only the keys
//! it names; everything else falls back to the compile-time defaults in
//! [`crate::constants`]. The engine never mutates a config mid-frame; an
//! external editor writes new values between frames and is responsible for
//! keeping them inside the bounds reported by [`FlowConfig::params`].

use crate::constants::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One named scalar with its current value and editor bounds.
///
/// This is the typed, already-resolved view handed to external editors; the
/// core performs no runtime type inspection of its own.
#[derive(Clone, Copy, Debug)]
pub struct Param {
    pub name: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

/// Tuning scalars for the placement fields and the approach controller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub edge_slope: f64,
    pub position_roughness: f64,
    pub center_area: f64,
    pub rotation_area: f64,
    pub rotation_deg: f64,
    pub zoom_area: f64,
    pub zoom: f64,
    pub kp: f64,
    pub v_max: f64,
    pub a_max: f64,
    pub approach: f64,
    pub approach_width: f64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            edge_slope: DEFAULT_EDGE_SLOPE,
            position_roughness: DEFAULT_POSITION_ROUGHNESS,
            center_area: DEFAULT_CENTER_AREA,
            rotation_area: DEFAULT_ROTATION_AREA,
            rotation_deg: DEFAULT_ROTATION_DEG,
            zoom_area: DEFAULT_ZOOM_AREA,
            zoom: DEFAULT_ZOOM,
            kp: DEFAULT_KP,
            v_max: DEFAULT_V_MAX,
            a_max: DEFAULT_A_MAX,
            approach: DEFAULT_APPROACH,
            approach_width: DEFAULT_APPROACH_WIDTH,
        }
    }
}

/// Fatal misconfiguration detected at session startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} = {value} is outside [{min}, {max}]")]
    OutOfBounds {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("approach_width must be nonzero")]
    ZeroApproachWidth,
}

impl FlowConfig {
    /// Every tunable as a `(name, value, min, max)` row, in a stable order.
    pub fn params(&self) -> [Param; 12] {
        [
            Param {
                name: "edge_slope",
                value: self.edge_slope,
                min: EDGE_SLOPE_MIN,
                max: EDGE_SLOPE_MAX,
            },
            Param {
                name: "position_roughness",
                value: self.position_roughness,
                min: POSITION_ROUGHNESS_MIN,
                max: POSITION_ROUGHNESS_MAX,
            },
            Param {
                name: "center_area",
                value: self.center_area,
                min: CENTER_AREA_MIN,
                max: CENTER_AREA_MAX,
            },
            Param {
                name: "rotation_area",
                value: self.rotation_area,
                min: ROTATION_AREA_MIN,
                max: ROTATION_AREA_MAX,
            },
            Param {
                name: "rotation_deg",
                value: self.rotation_deg,
                min: ROTATION_DEG_MIN,
                max: ROTATION_DEG_MAX,
            },
            Param {
                name: "zoom_area",
                value: self.zoom_area,
                min: ZOOM_AREA_MIN,
                max: ZOOM_AREA_MAX,
            },
            Param {
                name: "zoom",
                value: self.zoom,
                min: ZOOM_MIN,
                max: ZOOM_MAX,
            },
            Param {
                name: "kp",
                value: self.kp,
                min: KP_MIN,
                max: KP_MAX,
            },
            Param {
                name: "v_max",
                value: self.v_max,
                min: V_MAX_MIN,
                max: V_MAX_MAX,
            },
            Param {
                name: "a_max",
                value: self.a_max,
                min: A_MAX_MIN,
                max: A_MAX_MAX,
            },
            Param {
                name: "approach",
                value: self.approach,
                min: APPROACH_MIN,
                max: APPROACH_MAX,
            },
            Param {
                name: "approach_width",
                value: self.approach_width,
                min: APPROACH_WIDTH_MIN,
                max: APPROACH_WIDTH_MAX,
            },
        ]
    }

    /// Startup validation.
    ///
    /// Checked once when a session is built, not per frame: inside a session
    /// the editor contract keeps every value within bounds. A zero
    /// `approach_width` would divide by zero in the controller's catch-up
    /// term and is rejected here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for p in self.params() {
            if !(p.min <= p.value && p.value <= p.max) {
                return Err(ConfigError::OutOfBounds {
                    name: p.name,
                    value: p.value,
                    min: p.min,
                    max: p.max,
                });
            }
        }
        if self.approach_width == 0.0 {
            return Err(ConfigError::ZeroApproachWidth);
        }
        Ok(())
    }
}
