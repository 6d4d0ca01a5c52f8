//! Camera fly-to requests.
//!
//! The tracker never moves the camera itself; it hands the host a framed
//! bounding volume plus the approach parameters and the host animates it.

use foundation::bounds::BoundingSphere;

use crate::config::TrackerConfig;

/// Camera offset relative to the framed volume.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HeadingPitchRange {
    pub heading_rad: f64,
    pub pitch_rad: f64,
    pub range_m: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Easing {
    QuadraticInOut,
}

impl Easing {
    /// Eased progress for `t` in [0, 1].
    pub fn eval(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = 1.0 - t;
                    1.0 - 2.0 * u * u
                }
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraFlight {
    pub sphere: BoundingSphere,
    pub offset: HeadingPitchRange,
    pub duration_s: f64,
    pub easing: Easing,
}

impl CameraFlight {
    /// Frame `sphere` the way query results are framed: straight-down view
    /// from the configured range, eased over the configured duration.
    pub fn frame(sphere: BoundingSphere, config: &TrackerConfig) -> Self {
        Self {
            sphere,
            offset: HeadingPitchRange {
                heading_rad: 0.0,
                pitch_rad: config.camera_pitch_deg.to_radians(),
                range_m: config.camera_range_m,
            },
            duration_s: config.camera_duration_s,
            easing: Easing::QuadraticInOut,
        }
    }
}
