//! Sensing algorithm (acquisition → LOS confirmation → loss)
//!
//! Чистые функции без ECS: принимают `Sensor`, `DetectionState` и
//! `SpatialQuery`, возвращают что сделать с idle sweep. Systems в
//! `detection::systems` только достают данные из World и применяют результат.

use bevy::prelude::*;

use crate::detection::components::{DetectionState, IndicatorColor, Sensor};
use crate::spatial::SpatialQuery;

/// Что сделать с idle sweep коллаборатором после шага сенсора
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepDirective {
    Keep,
    /// Выключить sweep (камера следит за целью)
    Suspend,
    /// Включить обратно, если был выключен
    Resume,
}

/// Startup-only: имена → живые entity. Ненайденные молча пропускаются.
pub fn resolve_targets(
    names: &[String],
    mut lookup: impl FnMut(&str) -> Option<Entity>,
) -> Vec<Entity> {
    names
        .iter()
        .filter_map(|name| {
            let found = lookup(name);
            if found.is_none() {
                crate::logger::log(&format!("Sensor: target '{}' not found, dropped", name));
            }
            found
        })
        .collect()
}

/// Центр scan volume: перед камерой на `view_range`
pub fn scan_center(sensor: &Sensor, origin: Vec3, forward: Vec3) -> Vec3 {
    origin + forward * sensor.config.view_range
}

/// Ищет цель внутри scan volume
///
/// Порядок: тела ближе к центру scan volume первыми (ничья: по Entity),
/// для каждого тела цели в порядке `target_names`. Совпадение по имени.
pub fn acquire_target<S: SpatialQuery>(
    sensor: &Sensor,
    origin: Vec3,
    forward: Vec3,
    space: &S,
) -> Option<Entity> {
    if sensor.resolved_targets.is_empty() {
        return None;
    }

    let center = scan_center(sensor, origin, forward);
    let mut bodies = space.overlap_sphere(center, sensor.config.detection_radius);

    let distance_to_center = |entity: Entity| {
        space
            .position_of(entity)
            .map(|position| position.distance_squared(center))
            .unwrap_or(f32::INFINITY)
    };
    bodies.sort_by(|a, b| {
        distance_to_center(*a)
            .total_cmp(&distance_to_center(*b))
            .then_with(|| a.cmp(b))
    });

    bodies.into_iter().find_map(|body| {
        let body_name = space.name_of(body)?;
        sensor
            .resolved_targets
            .iter()
            .copied()
            .find(|target| space.name_of(*target) == Some(body_name))
    })
}

/// Detected цель ушла дальше `lose_range` (или больше не существует)
pub fn target_out_of_range<S: SpatialQuery>(sensor: &Sensor, origin: Vec3, space: &S) -> bool {
    let Some(target) = sensor.current_target else {
        return false;
    };

    match space.position_of(target) {
        Some(position) => position.distance(origin) > sensor.config.lose_range,
        None => true,
    }
}

/// Re-evaluation шаг тика: захват, WithinRange, потеря
pub fn update_detection_state<S: SpatialQuery>(
    sensor: &mut Sensor,
    state: &mut DetectionState,
    origin: Vec3,
    forward: Vec3,
    space: &S,
) -> SweepDirective {
    // Цель despawn'нулась пока была WithinRange: отпускаем, иначе застрянем
    if let Some(target) = sensor.current_target {
        if !state.is_detected() && space.position_of(target).is_none() {
            state.mark_lost();
            sensor.current_target = None;
            return SweepDirective::Resume;
        }
    }

    if sensor.current_target.is_none() && !state.is_within_range() && !state.is_detected() {
        sensor.current_target = acquire_target(sensor, origin, forward, space);
    }

    if sensor.current_target.is_some() && !state.is_detected() {
        state.mark_within_range();
        SweepDirective::Keep
    } else if sensor.current_target.is_some()
        && state.is_detected()
        && target_out_of_range(sensor, origin, space)
    {
        state.mark_lost();
        sensor.current_target = None;
        SweepDirective::Resume
    } else {
        // Detected и в пределах lose_range: держим без повторного LOS
        SweepDirective::Keep
    }
}

/// Line-of-sight проверка текущей цели одним лучом
///
/// Луч идёт вдоль сырого вектора камера→цель. Без `sight_range` длина луча
/// равна длине этого вектора, т.е. дистанции до цели.
pub fn confirm_sighting<S: SpatialQuery>(
    sensor: &Sensor,
    state: &mut DetectionState,
    watcher: Entity,
    origin: Vec3,
    space: &S,
) -> SweepDirective {
    let Some(target) = sensor.current_target else {
        return SweepDirective::Keep;
    };
    let Some(target_position) = space.position_of(target) else {
        return SweepDirective::Keep;
    };

    let direction = target_position - origin;
    let max_distance = sensor.config.sight_range.unwrap_or_else(|| direction.length());
    let hit = space.cast_ray(origin, direction, max_distance, Some(watcher));

    let target_name = space.name_of(target);
    let sees_target = match (hit, target_name) {
        (Some(hit), Some(name)) => space.name_of(hit.entity) == Some(name),
        _ => false,
    };

    if sees_target {
        state.mark_detected();
        SweepDirective::Suspend
    } else {
        // Окклюзия или пустой луч
        state.mark_within_range();
        SweepDirective::Resume
    }
}

pub fn indicator_color(state: &DetectionState) -> IndicatorColor {
    if state.is_detected() {
        IndicatorColor::Alarm
    } else {
        IndicatorColor::Clear
    }
}
