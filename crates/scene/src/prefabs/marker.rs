use foundation::math::Ecef;

use crate::World;
use crate::components::{ComponentBounds, ComponentProperties, FeatureGeometry};
use crate::entity::EntityId;

/// Spawn a point marker with a pick volume of `pick_radius_m` around it.
///
/// Airports are unkeyed: they are resolved by their `ICAO Code` property,
/// not by key.
pub fn spawn_marker(
    world: &mut World,
    position: Ecef,
    pick_radius_m: f64,
    properties: Vec<(String, String)>,
) -> EntityId {
    let entity = world.spawn();
    init_marker(world, entity, position, pick_radius_m, properties);
    entity
}

/// Keyed variant; returns `None` if `key` is already taken.
pub fn spawn_marker_keyed(
    world: &mut World,
    key: &str,
    position: Ecef,
    pick_radius_m: f64,
    properties: Vec<(String, String)>,
) -> Option<EntityId> {
    let entity = world.spawn_keyed(key)?;
    init_marker(world, entity, position, pick_radius_m, properties);
    Some(entity)
}

fn init_marker(
    world: &mut World,
    entity: EntityId,
    position: Ecef,
    pick_radius_m: f64,
    properties: Vec<(String, String)>,
) {
    world.set_feature(entity, FeatureGeometry::Marker { position });
    world.set_bounds(entity, ComponentBounds::around_point(position, pick_radius_m));
    world.set_properties(entity, ComponentProperties::new(properties));
}

#[cfg(test)]
mod tests {
    use super::{spawn_marker, spawn_marker_keyed};
    use crate::World;
    use crate::components::FeatureKind;
    use foundation::math::Ecef;

    #[test]
    fn spawns_marker_with_bounds_and_properties() {
        let mut world = World::new();
        let e = spawn_marker(
            &mut world,
            Ecef::new(100.0, 0.0, 0.0),
            5.0,
            vec![("ICAO Code".into(), "KLAX".into())],
        );

        assert_eq!(world.features_by_entity(), vec![(e, FeatureKind::Marker)]);
        assert_eq!(
            world.properties(e).and_then(|p| p.get("ICAO Code")),
            Some("KLAX")
        );
        let b = world.bounds(e).expect("bounds");
        assert_eq!(b.aabb.min, [95.0, -5.0, -5.0]);
    }

    #[test]
    fn keyed_markers_refuse_duplicates() {
        let mut world = World::new();
        let p = Ecef::new(0.0, 0.0, 0.0);
        assert!(spawn_marker_keyed(&mut world, "m", p, 1.0, Vec::new()).is_some());
        assert!(spawn_marker_keyed(&mut world, "m", p, 1.0, Vec::new()).is_none());
    }
}
