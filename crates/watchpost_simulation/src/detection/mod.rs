//! Detection module: сенсор камеры и её awareness FSM
//!
//! Порядок в FixedUpdate (один тик):
//! 0. advance_sensor_clock / resolve_new_sensor_targets: резолв целей (один раз)
//! 1. run_pending_sightings: LOS задачи с прошлого тика
//! 2. update_indicator_lights: лампа (косметика)
//! 3. update_detection_states: захват / WithinRange / потеря
//! 4. schedule_sightings: LOS задачи для WithinRange (выполнятся на след. тике)
//! 5. face_detected_targets: Detected камера смотрит на цель
//! 6. sweep_idle_rotation: idle качание (если не выключено сенсором)
//! 7. collect_sensor_gizmos: debug проекция

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod gizmos;
pub mod sensing;
pub mod sighting;
pub mod systems;

#[cfg(test)]
mod sensing_tests;

pub use components::*;
pub use events::DetectionChanged;
pub use gizmos::{GizmoColor, GizmoShape, SensorGizmos};
pub use sensing::SweepDirective;
pub use sighting::{PendingSightings, SensorClock};

use crate::spatial::Body;
use crate::sweep::{sweep_idle_rotation, IdleSweep};

/// Все detection системы (для ordering снаружи)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SensorSet;

pub struct DetectionPlugin;

impl Plugin for DetectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SensorClock>()
            .init_resource::<PendingSightings>()
            .init_resource::<SensorGizmos>()
            .add_event::<DetectionChanged>()
            .register_type::<DetectionState>()
            .register_type::<Sensor>()
            .register_type::<IndicatorLight>()
            .register_type::<IdleSweep>()
            .register_type::<Body>();

        app.add_systems(
            FixedUpdate,
            (
                systems::advance_sensor_clock,
                systems::resolve_new_sensor_targets,
                systems::run_pending_sightings,
                systems::update_indicator_lights,
                systems::update_detection_states,
                systems::schedule_sightings,
                systems::face_detected_targets,
                sweep_idle_rotation,
                systems::collect_sensor_gizmos,
            )
                .chain() // Последовательное выполнение для детерминизма
                .in_set(SensorSet),
        );
    }
}

/// Параметры спавна камеры
#[derive(Debug, Clone)]
pub struct SecurityCamera {
    pub name: String,
    pub transform: Transform,
    pub config: SensorConfig,
    /// None: камера без idle качания
    pub sweep: Option<IdleSweep>,
    pub with_indicator: bool,
    pub body: Body,
}

impl SecurityCamera {
    pub fn new(name: impl Into<String>, transform: Transform, config: SensorConfig) -> Self {
        Self {
            name: name.into(),
            transform,
            config,
            sweep: Some(IdleSweep::default()),
            with_indicator: true,
            body: Body::sphere(0.3),
        }
    }
}

/// Spawn helper: камера с сенсором, состоянием, sweep и лампой на одном entity
///
/// Коллабораторы передаются сенсору явными handles (здесь: сам entity).
pub fn spawn_security_camera(world: &mut World, camera: SecurityCamera) -> Entity {
    let watcher = world
        .spawn((
            Name::new(camera.name),
            camera.transform,
            camera.body,
            DetectionState::default(),
        ))
        .id();

    let mut sensor = Sensor::new(camera.config);
    if let Some(sweep) = camera.sweep {
        world.entity_mut(watcher).insert(sweep);
        sensor = sensor.with_idle_sweep(watcher);
    }
    if camera.with_indicator {
        world.entity_mut(watcher).insert(IndicatorLight::default());
        sensor = sensor.with_indicator(watcher);
    }
    world.entity_mut(watcher).insert(sensor);

    crate::logger::log(&format!("📷 Spawned security camera {:?}", watcher));
    watcher
}
