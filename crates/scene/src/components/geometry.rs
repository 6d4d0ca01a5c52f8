use foundation::math::Ecef;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    Marker,
    Path,
}

/// Straight-alpha color, 0..=1 per channel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
    pub const YELLOW: Rgba = Rgba::new(1.0, 1.0, 0.0, 1.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Geometry carried by a scene feature.
///
/// Markers are point features (airports). Paths are polylines with render
/// width and color (flight paths).
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureGeometry {
    Marker {
        position: Ecef,
    },
    Path {
        vertices: Vec<Ecef>,
        width: f64,
        color: Rgba,
    },
}

impl FeatureGeometry {
    pub fn kind(&self) -> FeatureKind {
        match self {
            FeatureGeometry::Marker { .. } => FeatureKind::Marker,
            FeatureGeometry::Path { .. } => FeatureKind::Path,
        }
    }
}
