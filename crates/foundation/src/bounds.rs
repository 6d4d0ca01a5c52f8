use crate::math::Ecef;

/// Axis-aligned bounding box in world (ECEF) coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb3 {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Aabb3 {
    pub fn new(min: [f64; 3], max: [f64; 3]) -> Self {
        Aabb3 { min, max }
    }

    pub fn from_points(points: &[Ecef]) -> Option<Self> {
        let first = points.first()?;
        let mut b = Aabb3::new(first.as_array(), first.as_array());
        for p in &points[1..] {
            b = b.union(&Aabb3::new(p.as_array(), p.as_array()));
        }
        Some(b)
    }

    pub fn union(&self, other: &Self) -> Self {
        Aabb3::new(
            [
                self.min[0].min(other.min[0]),
                self.min[1].min(other.min[1]),
                self.min[2].min(other.min[2]),
            ],
            [
                self.max[0].max(other.max[0]),
                self.max[1].max(other.max[1]),
                self.max[2].max(other.max[2]),
            ],
        )
    }

    pub fn intersects(&self, other: &Self) -> bool {
        (0..3).all(|axis| self.min[axis] <= other.max[axis] && self.max[axis] >= other.min[axis])
    }

    pub fn contains(&self, point: [f64; 3]) -> bool {
        (0..3).all(|axis| point[axis] >= self.min[axis] && point[axis] <= self.max[axis])
    }

    pub fn center(&self) -> [f64; 3] {
        [
            (self.min[0] + self.max[0]) * 0.5,
            (self.min[1] + self.max[1]) * 0.5,
            (self.min[2] + self.max[2]) * 0.5,
        ]
    }
}

/// Bounding sphere in world (ECEF) coordinates.
///
/// This is the volume the camera fly-to operation frames: either a fixed
/// radius around one marker, or the tight-enough sphere over a set of path
/// endpoints.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingSphere {
    pub center: Ecef,
    pub radius_m: f64,
}

impl BoundingSphere {
    pub fn from_center_radius(center: Ecef, radius_m: f64) -> Self {
        Self { center, radius_m }
    }

    /// Sphere centered on the points' box center, sized to the farthest
    /// point. Not minimal, but deterministic and tight enough for framing.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_points(points: &[Ecef]) -> Option<Self> {
        let aabb = Aabb3::from_points(points)?;
        let c = aabb.center();
        let center = Ecef::new(c[0], c[1], c[2]);
        let radius_m = points
            .iter()
            .map(|p| center.distance(*p))
            .fold(0.0_f64, f64::max);
        Some(Self { center, radius_m })
    }
}

#[cfg(test)]
mod tests {
    use super::{Aabb3, BoundingSphere};
    use crate::math::Ecef;

    #[test]
    fn aabb_union_and_intersects() {
        let a = Aabb3::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        let b = Aabb3::new([0.5, 0.5, 0.5], [2.0, 2.0, 2.0]);
        let u = a.union(&b);
        assert_eq!(u, Aabb3::new([0.0, 0.0, 0.0], [2.0, 2.0, 2.0]));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&Aabb3::new([3.0, 3.0, 3.0], [4.0, 4.0, 4.0])));
    }

    #[test]
    fn aabb_from_points_covers_all() {
        let pts = [
            Ecef::new(1.0, -2.0, 3.0),
            Ecef::new(-1.0, 4.0, 0.0),
            Ecef::new(0.0, 0.0, 5.0),
        ];
        let b = Aabb3::from_points(&pts).expect("non-empty");
        assert_eq!(b.min, [-1.0, -2.0, 0.0]);
        assert_eq!(b.max, [1.0, 4.0, 5.0]);
        for p in pts {
            assert!(b.contains(p.as_array()));
        }
        assert!(Aabb3::from_points(&[]).is_none());
    }

    #[test]
    fn sphere_from_points_encloses_all() {
        let pts = [
            Ecef::new(-10.0, 0.0, 0.0),
            Ecef::new(10.0, 0.0, 0.0),
            Ecef::new(0.0, 4.0, 0.0),
        ];
        let s = BoundingSphere::from_points(&pts).expect("non-empty");
        assert_eq!(s.center, Ecef::new(0.0, 2.0, 0.0));
        for p in pts {
            assert!(s.center.distance(p) <= s.radius_m + 1e-12);
        }
        assert!(BoundingSphere::from_points(&[]).is_none());
    }
}
