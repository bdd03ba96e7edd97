//! SpatialQuery trait + ECS реализация

use bevy::ecs::system::SystemParam;
use bevy::math::bounding::RayCast3d;
use bevy::prelude::*;

use super::Body;

/// Результат ray cast: первое тело на луче
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: Entity,
    pub distance: f32,
}

/// Сервис пространственных запросов (read-only)
///
/// Сенсор только спрашивает, никогда не мутирует мир.
pub trait SpatialQuery {
    /// Все тела, пересекающие сферу (порядок не гарантирован)
    fn overlap_sphere(&self, center: Vec3, radius: f32) -> Vec<Entity>;

    /// Ближайшее тело вдоль `direction` (не нормализуется вызывающим), не дальше `max_distance`
    fn cast_ray(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        exclude: Option<Entity>,
    ) -> Option<RayHit>;

    fn name_of(&self, entity: Entity) -> Option<&str>;

    fn position_of(&self, entity: Entity) -> Option<Vec3>;
}

pub fn overlapping_bodies(
    bodies: impl IntoIterator<Item = (Entity, Vec3, Body)>,
    center: Vec3,
    radius: f32,
) -> Vec<Entity> {
    bodies
        .into_iter()
        .filter(|(_, position, body)| body.overlaps_sphere(*position, center, radius))
        .map(|(entity, _, _)| entity)
        .collect()
}

pub fn nearest_ray_hit(
    bodies: impl IntoIterator<Item = (Entity, Vec3, Body)>,
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
    exclude: Option<Entity>,
) -> Option<RayHit> {
    // Нулевой вектор (цель в точке камеры): луча нет
    let Ok(direction) = Dir3::new(direction) else {
        return None;
    };
    let ray = RayCast3d::new(origin, direction, max_distance);

    bodies
        .into_iter()
        .filter(|(entity, _, _)| Some(*entity) != exclude)
        .filter_map(|(entity, position, body)| {
            body.ray_distance(position, &ray)
                .map(|distance| RayHit { entity, distance })
        })
        .min_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.entity.cmp(&b.entity))
        })
}

/// ECS реализация SpatialQuery поверх `Body` + `Transform`
///
/// Headless режим: позиции из `Transform` (GlobalTransform не пропагируется без TransformPlugin).
#[derive(SystemParam)]
pub struct WorldBodies<'w, 's> {
    bodies: Query<'w, 's, (Entity, &'static Transform, &'static Body)>,
    placed: Query<'w, 's, (&'static Transform, Option<&'static Name>)>,
}

impl WorldBodies<'_, '_> {
    fn iter_bodies(&self) -> impl Iterator<Item = (Entity, Vec3, Body)> + '_ {
        self.bodies
            .iter()
            .map(|(entity, transform, body)| (entity, transform.translation, *body))
    }
}

impl SpatialQuery for WorldBodies<'_, '_> {
    fn overlap_sphere(&self, center: Vec3, radius: f32) -> Vec<Entity> {
        overlapping_bodies(self.iter_bodies(), center, radius)
    }

    fn cast_ray(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        exclude: Option<Entity>,
    ) -> Option<RayHit> {
        nearest_ray_hit(self.iter_bodies(), origin, direction, max_distance, exclude)
    }

    fn name_of(&self, entity: Entity) -> Option<&str> {
        self.placed
            .get(entity)
            .ok()
            .and_then(|(_, name)| name)
            .map(|name| name.as_str())
    }

    fn position_of(&self, entity: Entity) -> Option<Vec3> {
        self.placed
            .get(entity)
            .ok()
            .map(|(transform, _)| transform.translation)
    }
}
