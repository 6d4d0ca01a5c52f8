//! Flight-path features and the rendered-path list.

use foundation::math::Ecef;
use scene::World;
use scene::components::{ComponentBounds, ComponentProperties, FeatureGeometry, Rgba};
use scene::entity::EntityId;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PathStyle {
    pub width: f64,
    pub color: Rgba,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            width: 12.0,
            color: Rgba::RED,
        }
    }
}

impl PathStyle {
    pub fn colored(color: Rgba) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }
}

/// Spawn a keyed polyline feature for one flight.
///
/// Returns `None` if `key` is already on the map (the flight is drawn
/// once) or if `vertices` is empty.
pub fn spawn_flight_path(
    world: &mut World,
    key: &str,
    vertices: Vec<Ecef>,
    style: PathStyle,
    properties: Vec<(String, String)>,
) -> Option<EntityId> {
    let bounds = ComponentBounds::around_points(&vertices)?;
    let entity = world.spawn_keyed(key)?;
    world.set_feature(
        entity,
        FeatureGeometry::Path {
            vertices,
            width: style.width,
            color: style.color,
        },
    );
    world.set_bounds(entity, bounds);
    world.set_properties(entity, ComponentProperties::new(properties));
    Some(entity)
}

/// The list of flight paths currently on the map.
///
/// A query replaces the whole set: `clear` despawns every tracked path
/// before the next batch is added.
#[derive(Debug, Default)]
pub struct FlightPaths {
    entities: Vec<EntityId>,
}

impl FlightPaths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entity: EntityId) {
        self.entities.push(entity);
    }

    pub fn entities(&self) -> &[EntityId] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Remove every tracked path from the scene.
    pub fn clear(&mut self, world: &mut World) {
        for entity in self.entities.drain(..) {
            world.despawn(entity);
        }
    }

    /// First and last vertex of each tracked path, in path order.
    ///
    /// This is the point set the camera frames after an aircraft query.
    /// Paths with fewer than two vertices contribute nothing.
    pub fn endpoints(&self, world: &World) -> Vec<Ecef> {
        let mut out = Vec::new();
        for entity in &self.entities {
            let Some(vertices) = world.path_vertices(*entity) else {
                continue;
            };
            if vertices.len() >= 2 {
                out.push(vertices[0]);
                out.push(vertices[vertices.len() - 1]);
            }
        }
        out
    }
}
