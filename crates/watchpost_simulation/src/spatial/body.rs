//! Collider shapes для сенсоров

use bevy::math::bounding::{Aabb3d, BoundingSphere, IntersectsVolume, RayCast3d};
use bevy::prelude::*;

/// Коллайдер entity (позиция берётся из `Transform::translation`)
///
/// Cuboid: axis-aligned, rotation игнорируется.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub enum Body {
    Sphere { radius: f32 },
    Cuboid { half_extents: Vec3 },
}

impl Default for Body {
    fn default() -> Self {
        // Примерно капсула персонажа
        Self::Sphere { radius: 0.5 }
    }
}

impl Body {
    pub fn sphere(radius: f32) -> Self {
        Self::Sphere { radius }
    }

    pub fn cuboid(half_extents: Vec3) -> Self {
        Self::Cuboid { half_extents }
    }

    /// Пересекает ли тело в `position` сферу (center, radius)
    pub fn overlaps_sphere(&self, position: Vec3, center: Vec3, radius: f32) -> bool {
        let probe = BoundingSphere::new(center, radius);
        match *self {
            Body::Sphere { radius: own } => BoundingSphere::new(position, own).intersects(&probe),
            Body::Cuboid { half_extents } => Aabb3d::new(position, half_extents).intersects(&probe),
        }
    }

    /// Дистанция вдоль луча до поверхности (0.0 если origin внутри)
    pub fn ray_distance(&self, position: Vec3, ray: &RayCast3d) -> Option<f32> {
        match *self {
            Body::Sphere { radius } => ray.sphere_intersection_at(&BoundingSphere::new(position, radius)),
            Body::Cuboid { half_extents } => ray.aabb_intersection_at(&Aabb3d::new(position, half_extents)),
        }
    }
}
