use super::{Ellipsoid, Geodetic};

const CONVERGENCE_EPS: f64 = 1e-12;
const MAX_ITERATIONS: usize = 200;

/// Shortest path on the ellipsoid between two geodetic coordinates,
/// solved with the Vincenty formulation.
///
/// Construction runs the inverse problem once (surface distance and
/// departure azimuth); `interpolate_fraction` runs the direct problem to
/// place a point a given fraction of the surface distance along the path.
///
/// Degenerate inputs are reported through the surface distance rather than
/// a constructor error: coincident endpoints yield `0.0`, and the
/// near-antipodal region where the longitude iteration oscillates yields
/// NaN. Callers gate on `surface_distance_m().is_finite()` and `> 0.0`.
#[derive(Debug, Copy, Clone)]
pub struct EllipsoidGeodesic {
    ellipsoid: Ellipsoid,
    start: Geodetic,
    surface_distance_m: f64,
    start_azimuth_rad: f64,
}

impl EllipsoidGeodesic {
    pub fn new(start: Geodetic, end: Geodetic, ellipsoid: Ellipsoid) -> Self {
        let (surface_distance_m, start_azimuth_rad) = inverse(start, end, ellipsoid);
        Self {
            ellipsoid,
            start,
            surface_distance_m,
            start_azimuth_rad,
        }
    }

    /// Surface distance between the endpoints, in meters.
    ///
    /// `0.0` for coincident endpoints, NaN if the inverse solution did not
    /// converge (near-antipodal endpoints).
    pub fn surface_distance_m(&self) -> f64 {
        self.surface_distance_m
    }

    /// Forward azimuth at the start point, in radians clockwise from north.
    pub fn start_azimuth_rad(&self) -> f64 {
        self.start_azimuth_rad
    }

    /// Point on the geodesic at `fraction` of the surface distance from the
    /// start. This follows the true geodesic curve; it is not a linear
    /// lon/lat blend. The returned height is always `0.0` — callers own the
    /// height law.
    ///
    /// Returns `None` when the geodesic is degenerate or the direct
    /// solution fails to converge at this fraction.
    pub fn interpolate_fraction(&self, fraction: f64) -> Option<Geodetic> {
        if !self.surface_distance_m.is_finite() {
            return None;
        }
        self.interpolate_distance(fraction * self.surface_distance_m)
    }

    /// Point on the geodesic `distance_m` meters from the start.
    pub fn interpolate_distance(&self, distance_m: f64) -> Option<Geodetic> {
        if !distance_m.is_finite() {
            return None;
        }
        direct(self.start, self.start_azimuth_rad, distance_m, self.ellipsoid)
    }
}

/// Vincenty inverse problem: (surface distance, start azimuth).
fn inverse(start: Geodetic, end: Geodetic, ellipsoid: Ellipsoid) -> (f64, f64) {
    let a = ellipsoid.a;
    let b = ellipsoid.b;
    let f = ellipsoid.f;

    let u1 = ((1.0 - f) * start.lat_rad.tan()).atan();
    let u2 = ((1.0 - f) * end.lat_rad.tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let l = normalize_longitude(end.lon_rad - start.lon_rad);

    let mut lambda = l;
    let mut converged = false;
    let mut sin_sigma = 0.0;
    let mut cos_sigma = 0.0;
    let mut sigma = 0.0;
    let mut cos_sq_alpha = 0.0;
    let mut cos_2sigma_m = 0.0;

    for _ in 0..MAX_ITERATIONS {
        let sin_lambda = lambda.sin();
        let cos_lambda = lambda.cos();

        let cross = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
        sin_sigma = ((cos_u2 * sin_lambda).powi(2) + cross * cross).sqrt();
        if sin_sigma == 0.0 {
            // Coincident endpoints.
            return (0.0, 0.0);
        }
        cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        sigma = sin_sigma.atan2(cos_sigma);

        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        cos_2sigma_m = if cos_sq_alpha != 0.0 {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        } else {
            // Equatorial line.
            0.0
        };

        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
        let lambda_next = l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m
                            + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        if (lambda_next - lambda).abs() < CONVERGENCE_EPS {
            lambda = lambda_next;
            converged = true;
            break;
        }
        lambda = lambda_next;
    }

    if !converged {
        // Near-antipodal: the longitude iteration oscillates.
        return (f64::NAN, f64::NAN);
    }

    let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
    let big_a =
        1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let delta_sigma = big_b
        * sin_sigma
        * (cos_2sigma_m
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                    - big_b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

    let distance = b * big_a * (sigma - delta_sigma);

    let sin_lambda = lambda.sin();
    let cos_lambda = lambda.cos();
    let azimuth = (cos_u2 * sin_lambda).atan2(cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda);

    (distance, azimuth)
}

/// Vincenty direct problem: the point `distance_m` along the geodesic
/// leaving `start` at `azimuth_rad`.
fn direct(
    start: Geodetic,
    azimuth_rad: f64,
    distance_m: f64,
    ellipsoid: Ellipsoid,
) -> Option<Geodetic> {
    let a = ellipsoid.a;
    let b = ellipsoid.b;
    let f = ellipsoid.f;

    let (sin_alpha1, cos_alpha1) = azimuth_rad.sin_cos();

    let tan_u1 = (1.0 - f) * start.lat_rad.tan();
    let cos_u1 = 1.0 / (1.0 + tan_u1 * tan_u1).sqrt();
    let sin_u1 = tan_u1 * cos_u1;

    let sigma1 = tan_u1.atan2(cos_alpha1);
    let sin_alpha = cos_u1 * sin_alpha1;
    let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;

    let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
    let big_a =
        1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

    let sigma_base = distance_m / (b * big_a);
    let mut sigma = sigma_base;
    let mut cos_2sigma_m = 0.0;
    let mut converged = false;

    for _ in 0..MAX_ITERATIONS {
        cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
        let sin_sigma = sigma.sin();
        let cos_sigma = sigma.cos();
        let delta_sigma = big_b
            * sin_sigma
            * (cos_2sigma_m
                + big_b / 4.0
                    * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                        - big_b / 6.0
                            * cos_2sigma_m
                            * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                            * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));
        let sigma_next = sigma_base + delta_sigma;
        if (sigma_next - sigma).abs() < CONVERGENCE_EPS {
            sigma = sigma_next;
            converged = true;
            break;
        }
        sigma = sigma_next;
    }

    if !converged {
        return None;
    }

    let (sin_sigma, cos_sigma) = sigma.sin_cos();
    let tmp = sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_alpha1;
    let lat = (sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_alpha1)
        .atan2((1.0 - f) * (sin_alpha * sin_alpha + tmp * tmp).sqrt());
    let lambda = (sin_sigma * sin_alpha1).atan2(cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_alpha1);
    let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
    let l = lambda
        - (1.0 - c)
            * f
            * sin_alpha
            * (sigma
                + c * sigma.sin()
                    * (cos_2sigma_m
                        + c * sigma.cos() * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

    let lon = normalize_longitude(start.lon_rad + l);

    Some(Geodetic::new(lon, lat, 0.0))
}

/// Wrap a longitude into (-PI, PI].
fn normalize_longitude(lon_rad: f64) -> f64 {
    let two_pi = 2.0 * std::f64::consts::PI;
    let mut lon = lon_rad % two_pi;
    if lon > std::f64::consts::PI {
        lon -= two_pi;
    } else if lon <= -std::f64::consts::PI {
        lon += two_pi;
    }
    lon
}

#[cfg(test)]
mod tests {
    use super::EllipsoidGeodesic;
    use crate::math::{Ellipsoid, Geodetic};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    fn geodesic(start: Geodetic, end: Geodetic) -> EllipsoidGeodesic {
        EllipsoidGeodesic::new(start, end, Ellipsoid::WGS84)
    }

    #[test]
    fn equatorial_distance_is_arc_of_semi_major_circle() {
        // Along the equator the geodesic is the equator itself, so the
        // surface distance is a * delta_lon.
        let start = Geodetic::new(0.0, 0.0, 0.0);
        let end = Geodetic::new(0.01, 0.0, 0.0);
        let g = geodesic(start, end);
        assert_close(g.surface_distance_m(), Ellipsoid::WGS84.a * 0.01, 1e-4);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Geodetic::from_degrees(-118.4085, 33.9416, 0.0);
        let b = Geodetic::from_degrees(-73.7781, 40.6413, 0.0);
        let ab = geodesic(a, b).surface_distance_m();
        let ba = geodesic(b, a).surface_distance_m();
        assert_close(ab, ba, 1e-4);
        assert!(ab > 3.9e6 && ab < 4.1e6, "LAX-JFK is about 3 970 km, got {ab}");
    }

    #[test]
    fn coincident_endpoints_have_zero_distance() {
        let p = Geodetic::from_degrees(8.5, 47.45, 432.0);
        assert_eq!(geodesic(p, p).surface_distance_m(), 0.0);
    }

    #[test]
    fn antipodal_equator_points_do_not_converge() {
        let start = Geodetic::from_degrees(0.0, 0.0, 0.0);
        let end = Geodetic::from_degrees(180.0, 0.0, 0.0);
        assert!(geodesic(start, end).surface_distance_m().is_nan());
    }

    #[test]
    fn interpolation_reproduces_endpoints() {
        let start = Geodetic::from_degrees(-118.4085, 33.9416, 0.0);
        let end = Geodetic::from_degrees(-73.7781, 40.6413, 0.0);
        let g = geodesic(start, end);

        let at_start = g.interpolate_fraction(0.0).expect("fraction 0");
        assert_close(at_start.lon_rad, start.lon_rad, 1e-9);
        assert_close(at_start.lat_rad, start.lat_rad, 1e-9);

        let at_end = g.interpolate_fraction(1.0).expect("fraction 1");
        assert_close(at_end.lon_rad, end.lon_rad, 1e-9);
        assert_close(at_end.lat_rad, end.lat_rad, 1e-9);
    }

    #[test]
    fn equatorial_midpoint_bisects_longitude() {
        let start = Geodetic::new(0.0, 0.0, 0.0);
        let end = Geodetic::new(0.01, 0.0, 0.0);
        let g = geodesic(start, end);
        let mid = g.interpolate_fraction(0.5).expect("midpoint");
        assert_close(mid.lon_rad, 0.005, 1e-9);
        assert_close(mid.lat_rad, 0.0, 1e-9);
    }

    #[test]
    fn meridional_path_keeps_longitude() {
        let start = Geodetic::from_degrees(11.0, 0.0, 0.0);
        let end = Geodetic::from_degrees(11.0, 45.0, 0.0);
        let g = geodesic(start, end);
        assert_close(g.start_azimuth_rad(), 0.0, 1e-12);
        for i in 0..=4 {
            let p = g.interpolate_fraction(f64::from(i) / 4.0).expect("sample");
            assert_close(p.lon_rad, start.lon_rad, 1e-9);
        }
        let at_end = g.interpolate_fraction(1.0).expect("fraction 1");
        assert_close(at_end.lat_rad, end.lat_rad, 1e-9);
    }

    #[test]
    fn interpolation_is_unavailable_for_degenerate_geodesics() {
        let p = Geodetic::from_degrees(10.0, 10.0, 0.0);
        let g = geodesic(p, p);
        // Distance 0: interpolation is defined (it stays at the start)...
        assert!(g.interpolate_fraction(0.5).is_some());
        // ...but a non-convergent pair has nothing to interpolate.
        let anti = geodesic(
            Geodetic::from_degrees(0.0, 0.0, 0.0),
            Geodetic::from_degrees(180.0, 0.0, 0.0),
        );
        assert!(anti.interpolate_fraction(0.5).is_none());
    }
}
