use foundation::math::Vec3;
use foundation::math::precision::stable_total_cmp_f64;

use crate::World;
use crate::components::{ComponentBounds, FeatureKind};
use crate::entity::EntityId;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickHit {
    pub entity: EntityId,
    pub kind: FeatureKind,
    pub distance: f64,
    pub point: Vec3,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickOptions {
    pub max_distance: f64,
}

impl Default for PickOptions {
    fn default() -> Self {
        Self {
            max_distance: 1.0e30,
        }
    }
}

/// Deterministic ray picking over feature bounds.
///
/// Ordering contract:
/// - If multiple entities are hit at the same distance, the lower
///   `EntityId::index()` wins.
/// - Otherwise, the closest hit along the (normalized) ray wins.
///
/// Notes:
/// - Entities without explicit bounds are ignored.
/// - Visibility gating is inherited from `World::features_by_entity()`.
pub fn pick_ray(world: &World, ray: Ray, opts: PickOptions) -> Option<PickHit> {
    let dir = normalize(ray.dir)?;
    let origin = [ray.origin.x, ray.origin.y, ray.origin.z];
    let dir_a = [dir.x, dir.y, dir.z];

    let mut best: Option<(f64, EntityId, FeatureKind)> = None;

    for (entity, kind) in world.features_by_entity() {
        let Some(b) = world.bounds(entity) else {
            continue;
        };
        let Some(t) = ray_aabb_hit_t(origin, dir_a, b, 0.0, opts.max_distance) else {
            continue;
        };

        best = match best {
            None => Some((t, entity, kind)),
            Some((bt, be, bk)) => {
                let ord = stable_total_cmp_f64(t, bt).then_with(|| entity.index().cmp(&be.index()));
                if ord.is_lt() {
                    Some((t, entity, kind))
                } else {
                    Some((bt, be, bk))
                }
            }
        };
    }

    let (t, entity, kind) = best?;
    let point = Vec3::new(
        ray.origin.x + dir.x * t,
        ray.origin.y + dir.y * t,
        ray.origin.z + dir.z * t,
    );

    Some(PickHit {
        entity,
        kind,
        distance: t,
        point,
    })
}

/// Screen picking wrapper.
///
/// The caller supplies a deterministic screen->ray mapping via `make_ray`
/// (the camera owns that projection; this crate does not).
pub fn pick_screen<F>(
    world: &World,
    x_px: f64,
    y_px: f64,
    mut make_ray: F,
    opts: PickOptions,
) -> Option<PickHit>
where
    F: FnMut(f64, f64) -> Option<Ray>,
{
    let ray = make_ray(x_px, y_px)?;
    pick_ray(world, ray, opts)
}

fn normalize(v: Vec3) -> Option<Vec3> {
    let l2 = v.dot(v);
    if l2 <= 0.0 {
        return None;
    }
    let inv = 1.0 / l2.sqrt();
    Some(Vec3::new(v.x * inv, v.y * inv, v.z * inv))
}

fn ray_aabb_hit_t(
    origin: [f64; 3],
    dir: [f64; 3],
    bounds: ComponentBounds,
    mut t_min: f64,
    mut t_max: f64,
) -> Option<f64> {
    // Slabs intersection; returns entry distance.
    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        let min = bounds.aabb.min[axis];
        let max = bounds.aabb.max[axis];

        if d.abs() < 1e-12 {
            if o < min || o > max {
                return None;
            }
            continue;
        }

        let inv = 1.0 / d;
        let mut t1 = (min - o) * inv;
        let mut t2 = (max - o) * inv;
        if t1 > t2 {
            std::mem::swap(&mut t1, &mut t2);
        }

        t_min = t_min.max(t1);
        t_max = t_max.min(t2);
        if t_max < t_min {
            return None;
        }
    }

    Some(t_min.max(0.0))
}
