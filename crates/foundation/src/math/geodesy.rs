use super::Ecef;

/// Reference ellipsoid of revolution.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (meters).
    pub a: f64,
    /// Semi-minor axis (meters).
    pub b: f64,
    /// Flattening.
    pub f: f64,
}

impl Ellipsoid {
    /// WGS84 parameters.
    pub const WGS84: Ellipsoid = {
        let a = 6_378_137.0;
        let f = 1.0 / 298.257_223_563;
        Ellipsoid {
            a,
            b: a * (1.0 - f),
            f,
        }
    };

    /// First eccentricity squared.
    pub fn e2(&self) -> f64 {
        self.f * (2.0 - self.f)
    }

    /// Second eccentricity squared.
    pub fn ep2(&self) -> f64 {
        (self.a * self.a - self.b * self.b) / (self.b * self.b)
    }

    /// Largest radius of the ellipsoid (the semi-major axis).
    ///
    /// Used to convert linear meter offsets into angular deltas.
    pub fn maximum_radius(&self) -> f64 {
        self.a
    }

    pub fn to_ecef(&self, geo: Geodetic) -> Ecef {
        let sin_lat = geo.lat_rad.sin();
        let cos_lat = geo.lat_rad.cos();
        let sin_lon = geo.lon_rad.sin();
        let cos_lon = geo.lon_rad.cos();

        let e2 = self.e2();
        let n = self.a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        let x = (n + geo.height_m) * cos_lat * cos_lon;
        let y = (n + geo.height_m) * cos_lat * sin_lon;
        let z = (n * (1.0 - e2) + geo.height_m) * sin_lat;

        Ecef::new(x, y, z)
    }

    pub fn to_geodetic(&self, ecef: Ecef) -> Geodetic {
        let e2 = self.e2();
        let ep2 = self.ep2();

        let p = (ecef.x * ecef.x + ecef.y * ecef.y).sqrt();
        let lon = ecef.y.atan2(ecef.x);

        let theta = (ecef.z * self.a).atan2(p * self.b);
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        let lat = (ecef.z + ep2 * self.b * sin_theta * sin_theta * sin_theta)
            .atan2(p - e2 * self.a * cos_theta * cos_theta * cos_theta);

        let sin_lat = lat.sin();
        let n = self.a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        let height = p / lat.cos() - n;

        Geodetic::new(lon, lat, height)
    }
}

/// Geodetic coordinates: longitude/latitude in radians, height above the
/// ellipsoid in meters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Geodetic {
    pub lon_rad: f64,
    pub lat_rad: f64,
    pub height_m: f64,
}

impl Geodetic {
    pub fn new(lon_rad: f64, lat_rad: f64, height_m: f64) -> Self {
        Self {
            lon_rad,
            lat_rad,
            height_m,
        }
    }

    pub fn from_degrees(lon_deg: f64, lat_deg: f64, height_m: f64) -> Self {
        Self::new(lon_deg.to_radians(), lat_deg.to_radians(), height_m)
    }
}
