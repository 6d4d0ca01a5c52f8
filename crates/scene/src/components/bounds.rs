use foundation::bounds::Aabb3;
use foundation::math::Ecef;

/// World-space pick/query volume of a feature.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComponentBounds {
    pub aabb: Aabb3,
}

impl ComponentBounds {
    pub fn new(aabb: Aabb3) -> Self {
        Self { aabb }
    }

    /// Cube of half-extent `radius_m` around a marker position.
    pub fn around_point(position: Ecef, radius_m: f64) -> Self {
        Self::new(Aabb3::new(
            [
                position.x - radius_m,
                position.y - radius_m,
                position.z - radius_m,
            ],
            [
                position.x + radius_m,
                position.y + radius_m,
                position.z + radius_m,
            ],
        ))
    }

    /// Tight box over a polyline's vertices. `None` for an empty polyline.
    pub fn around_points(points: &[Ecef]) -> Option<Self> {
        Aabb3::from_points(points).map(Self::new)
    }
}
