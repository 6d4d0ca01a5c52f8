use foundation::bounds::Aabb3;

use crate::World;
use crate::components::FeatureKind;
use crate::entity::EntityId;
use crate::selection::SelectionSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyOp {
    Eq,
    Contains,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyFilter {
    pub key: String,
    pub op: PropertyOp,
    pub value: String,
}

impl PropertyFilter {
    pub fn eq(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            op: PropertyOp::Eq,
            value: value.into(),
        }
    }
}

/// Feature query: an intersection over kind, spatial bounds, and tagged
/// attributes. Visibility gating is inherited from
/// `World::features_by_entity`.
///
/// Ordering contract:
/// - `query_features` returns a `SelectionSet` whose iteration is in
///   ascending `EntityId::index()` order.
#[derive(Debug, Clone)]
pub struct FeatureQuery {
    pub kind: Option<FeatureKind>,
    pub bbox_world_ecef: Option<Aabb3>,
    pub properties: Vec<PropertyFilter>,
    pub limit: usize,
}

impl Default for FeatureQuery {
    fn default() -> Self {
        Self {
            kind: None,
            bbox_world_ecef: None,
            properties: Vec::new(),
            limit: 1000,
        }
    }
}

fn properties_match(world: &World, entity: EntityId, filters: &[PropertyFilter]) -> bool {
    if filters.is_empty() {
        return true;
    }
    let Some(props) = world.properties(entity) else {
        return false;
    };

    'filters: for f in filters {
        let mut found = false;
        for (k, v) in &props.pairs {
            if k != &f.key {
                continue;
            }
            found = match f.op {
                PropertyOp::Eq => v == &f.value,
                PropertyOp::Contains => v.contains(&f.value),
            };
            if found {
                continue 'filters;
            }
        }
        if !found {
            return false;
        }
    }

    true
}

pub fn query_features(world: &World, query: &FeatureQuery) -> SelectionSet {
    let mut out = SelectionSet::new();

    for (entity, kind) in world.features_by_entity() {
        if let Some(k) = query.kind
            && kind != k
        {
            continue;
        }

        if let Some(bbox) = query.bbox_world_ecef {
            // With a bbox set, features without explicit bounds are excluded.
            let Some(b) = world.bounds(entity) else {
                continue;
            };
            if !b.aabb.intersects(&bbox) {
                continue;
            }
        }

        if !properties_match(world, entity, &query.properties) {
            continue;
        }

        out.insert(entity);
        if out.len() >= query.limit {
            break;
        }
    }

    out
}

/// First (lowest-index) visible feature of `kind` whose property `key`
/// equals `value` — the find-by-attribute lookup the glue layer uses to
/// resolve airport markers by ICAO code.
pub fn find_by_property(
    world: &World,
    kind: FeatureKind,
    key: &str,
    value: &str,
) -> Option<EntityId> {
    let query = FeatureQuery {
        kind: Some(kind),
        properties: vec![PropertyFilter::eq(key, value)],
        limit: 1,
        ..Default::default()
    };
    query_features(world, &query).iter_entities().next()
}
