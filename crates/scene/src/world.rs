use std::collections::BTreeMap;

use foundation::handles::Handle;
use foundation::math::Ecef;

use crate::components::{ComponentBounds, ComponentProperties, FeatureGeometry, FeatureKind};
use crate::entity::EntityId;

/// The scene's feature collection.
///
/// Components live in parallel arrays indexed by entity index. Entities may
/// carry a stable string key ("flight-AAL123"); keys are unique and are
/// released on despawn. Indices are never reused, so ascending-index
/// iteration is also spawn order.
#[derive(Debug, Default)]
pub struct World {
    next_index: u32,
    alive: Vec<bool>,
    features: Vec<Option<FeatureGeometry>>,
    properties: Vec<Option<ComponentProperties>>,
    bounds: Vec<Option<ComponentBounds>>,
    visible: Vec<bool>,
    keys: BTreeMap<String, EntityId>,
    key_of: Vec<Option<String>>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self) -> EntityId {
        let id = EntityId(Handle::new(self.next_index, 0));
        self.next_index += 1;
        let idx = id.index() as usize;
        self.ensure_capacity(idx);
        self.alive[idx] = true;
        self.visible[idx] = true;
        id
    }

    /// Spawn an entity under a stable key.
    ///
    /// Returns `None` if the key is already taken — callers treat that as
    /// "this feature is already on the map".
    pub fn spawn_keyed(&mut self, key: &str) -> Option<EntityId> {
        if self.keys.contains_key(key) {
            return None;
        }
        let id = self.spawn();
        self.keys.insert(key.to_owned(), id);
        self.key_of[id.index() as usize] = Some(key.to_owned());
        Some(id)
    }

    /// Remove an entity and all of its components, releasing its key.
    ///
    /// Removing an already-removed or unknown entity is a no-op.
    pub fn despawn(&mut self, entity: EntityId) {
        let idx = entity.index() as usize;
        if idx >= self.alive.len() || !self.alive[idx] {
            return;
        }
        self.alive[idx] = false;
        self.visible[idx] = false;
        self.features[idx] = None;
        self.properties[idx] = None;
        self.bounds[idx] = None;
        if let Some(key) = self.key_of[idx].take() {
            self.keys.remove(&key);
        }
    }

    pub fn is_alive(&self, entity: EntityId) -> bool {
        self.alive
            .get(entity.index() as usize)
            .copied()
            .unwrap_or(false)
    }

    pub fn entity_by_key(&self, key: &str) -> Option<EntityId> {
        self.keys.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    pub fn set_feature(&mut self, entity: EntityId, feature: FeatureGeometry) {
        let idx = entity.index() as usize;
        if self.is_alive(entity) {
            self.features[idx] = Some(feature);
        }
    }

    pub fn feature(&self, entity: EntityId) -> Option<&FeatureGeometry> {
        self.features.get(entity.index() as usize)?.as_ref()
    }

    pub fn set_properties(&mut self, entity: EntityId, properties: ComponentProperties) {
        let idx = entity.index() as usize;
        if self.is_alive(entity) {
            self.properties[idx] = Some(properties);
        }
    }

    pub fn properties(&self, entity: EntityId) -> Option<&ComponentProperties> {
        self.properties.get(entity.index() as usize)?.as_ref()
    }

    pub fn set_bounds(&mut self, entity: EntityId, bounds: ComponentBounds) {
        let idx = entity.index() as usize;
        if self.is_alive(entity) {
            self.bounds[idx] = Some(bounds);
        }
    }

    pub fn bounds(&self, entity: EntityId) -> Option<ComponentBounds> {
        *self.bounds.get(entity.index() as usize)?
    }

    pub fn set_visible(&mut self, entity: EntityId, visible: bool) {
        let idx = entity.index() as usize;
        if self.is_alive(entity) {
            self.visible[idx] = visible;
        }
    }

    pub fn is_visible(&self, entity: EntityId) -> bool {
        self.visible
            .get(entity.index() as usize)
            .copied()
            .unwrap_or(false)
    }

    /// Position of a marker feature.
    pub fn marker_position(&self, entity: EntityId) -> Option<Ecef> {
        match self.feature(entity)? {
            FeatureGeometry::Marker { position } => Some(*position),
            FeatureGeometry::Path { .. } => None,
        }
    }

    /// Vertices of a path feature.
    pub fn path_vertices(&self, entity: EntityId) -> Option<&[Ecef]> {
        match self.feature(entity)? {
            FeatureGeometry::Path { vertices, .. } => Some(vertices),
            FeatureGeometry::Marker { .. } => None,
        }
    }

    /// Visible features in ascending entity-index order.
    pub fn features_by_entity(&self) -> Vec<(EntityId, FeatureKind)> {
        let mut out = Vec::new();
        for (idx, feature) in self.features.iter().enumerate() {
            let Some(feature) = feature else { continue };
            if !self.visible[idx] {
                continue;
            }
            out.push((EntityId(Handle::new(idx as u32, 0)), feature.kind()));
        }
        out
    }

    fn ensure_capacity(&mut self, idx: usize) {
        if self.alive.len() <= idx {
            let new_len = idx + 1;
            self.alive.resize(new_len, false);
            self.features.resize(new_len, None);
            self.properties.resize(new_len, None);
            self.bounds.resize(new_len, None);
            self.visible.resize(new_len, false);
            self.key_of.resize(new_len, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::World;
    use crate::components::{ComponentProperties, FeatureGeometry, FeatureKind};
    use foundation::math::Ecef;

    fn marker(x: f64) -> FeatureGeometry {
        FeatureGeometry::Marker {
            position: Ecef::new(x, 0.0, 0.0),
        }
    }

    #[test]
    fn spawn_and_collect_features() {
        let mut world = World::new();
        let entity = world.spawn();
        world.set_feature(entity, marker(1.0));

        let features = world.features_by_entity();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0], (entity, FeatureKind::Marker));
    }

    #[test]
    fn hidden_entities_are_filtered() {
        let mut world = World::new();
        let entity = world.spawn();
        world.set_feature(entity, marker(1.0));
        world.set_visible(entity, false);

        assert!(world.features_by_entity().is_empty());
    }

    #[test]
    fn keys_are_unique_and_released_on_despawn() {
        let mut world = World::new();
        let first = world.spawn_keyed("flight-AAL123").expect("fresh key");
        assert!(world.spawn_keyed("flight-AAL123").is_none());
        assert_eq!(world.entity_by_key("flight-AAL123"), Some(first));

        world.despawn(first);
        assert!(!world.contains_key("flight-AAL123"));
        assert!(!world.is_alive(first));

        let second = world.spawn_keyed("flight-AAL123").expect("key released");
        assert_ne!(first, second);
    }

    #[test]
    fn despawn_clears_components() {
        let mut world = World::new();
        let entity = world.spawn();
        world.set_feature(entity, marker(2.0));
        world.set_properties(
            entity,
            ComponentProperties::new(vec![("Name".into(), "x".into())]),
        );

        world.despawn(entity);
        assert!(world.feature(entity).is_none());
        assert!(world.properties(entity).is_none());
        assert!(world.features_by_entity().is_empty());

        // A second despawn is a no-op.
        world.despawn(entity);
    }

    #[test]
    fn marker_and_path_accessors_are_kind_checked() {
        let mut world = World::new();
        let m = world.spawn();
        world.set_feature(m, marker(3.0));
        let p = world.spawn();
        world.set_feature(
            p,
            FeatureGeometry::Path {
                vertices: vec![Ecef::new(0.0, 0.0, 0.0), Ecef::new(1.0, 1.0, 1.0)],
                width: 12.0,
                color: crate::components::Rgba::WHITE,
            },
        );

        assert_eq!(world.marker_position(m), Some(Ecef::new(3.0, 0.0, 0.0)));
        assert!(world.marker_position(p).is_none());
        assert_eq!(world.path_vertices(p).map(|v| v.len()), Some(2));
        assert!(world.path_vertices(m).is_none());
    }
}
