//! Raised geodesic arcs between airports.
//!
//! The renderer draws flight paths as polylines; this module produces the
//! polyline vertices: points sampled along the geodesic between two
//! positions, bowed upward so the path lifts off the surface and returns to
//! it exactly at the endpoints.

use foundation::math::{Ecef, Ellipsoid, EllipsoidGeodesic};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ArcError {
    /// Degenerate or numerically invalid endpoint pair: coincident points,
    /// or a surface distance the geodesic solver could not produce.
    #[error("invalid geometry between endpoints (surface distance {surface_distance_m} m)")]
    InvalidGeometry { surface_distance_m: f64 },

    /// Every sample was skipped; nothing to draw.
    #[error("no valid arc samples produced")]
    EmptyResult,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcParams {
    /// Peak height added at the arc's midpoint (meters).
    pub height_offset_m: f64,
    /// Target spacing between consecutive samples along the surface path
    /// (meters). Sampling is distance-adaptive: short hops and long-haul
    /// routes both come out proportionally smooth.
    pub sample_spacing_m: f64,
}

impl Default for ArcParams {
    fn default() -> Self {
        Self {
            height_offset_m: 1_000.0,
            sample_spacing_m: 10_000.0,
        }
    }
}

/// Straight-line (chord) distance between two positions, in meters.
pub fn distance(a: Ecef, b: Ecef) -> f64 {
    a.distance(b)
}

/// Sample a raised geodesic arc from `start` to `end`.
///
/// The returned sequence is ordered by fraction-of-distance, includes both
/// endpoints, and is ready to hand to a polyline feature. Individual
/// samples that fail to interpolate are logged and dropped without
/// aborting the arc; a fully-degenerate input pair or an all-skipped arc
/// is an error the caller should treat as "skip this flight".
pub fn generate_arc(start: Ecef, end: Ecef, params: ArcParams) -> Result<Vec<Ecef>, ArcError> {
    let ellipsoid = Ellipsoid::WGS84;
    let start_geo = ellipsoid.to_geodetic(start);
    let end_geo = ellipsoid.to_geodetic(end);

    let geodesic = EllipsoidGeodesic::new(start_geo, end_geo, ellipsoid);
    let surface_distance_m = geodesic.surface_distance_m();
    if !surface_distance_m.is_finite() || surface_distance_m <= 0.0 {
        return Err(ArcError::InvalidGeometry { surface_distance_m });
    }

    let segments = ((surface_distance_m / params.sample_spacing_m).ceil() as usize).max(1);

    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let fraction = i as f64 / segments as f64;

        let Some(mut geo) = geodesic.interpolate_fraction(fraction) else {
            warn!(fraction, "geodesic interpolation failed, skipping sample");
            continue;
        };

        let bulge = (std::f64::consts::PI * fraction).sin();

        // Sideways bow for visual separation of stacked routes: a meter
        // offset turned into an angular latitude delta. Cosmetic, not
        // geodesically correct; zero at both endpoints.
        geo.lat_rad += params.height_offset_m * bulge * bulge / ellipsoid.maximum_radius();

        let height =
            lerp(start_geo.height_m, end_geo.height_m, fraction) + params.height_offset_m * bulge;
        if !height.is_finite() {
            warn!(fraction, "non-finite sample height, skipping sample");
            continue;
        }
        geo.height_m = height;

        points.push(ellipsoid.to_ecef(geo));
    }

    if points.is_empty() {
        return Err(ArcError::EmptyResult);
    }

    Ok(points)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
