//! Debug visualization: read-only проекция состояния сенсора
//!
//! Рендера в headless нет: формы складываются в `SensorGizmos`, внешний
//! renderer (Godot/bevy_gizmos) рисует их как хочет.

use bevy::prelude::*;

use crate::detection::components::{DetectionState, Sensor};
use crate::detection::sensing::scan_center;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GizmoColor {
    Red,
    Yellow,
    Green,
    Cyan,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GizmoShape {
    Line { from: Vec3, to: Vec3, color: GizmoColor },
    WireSphere { center: Vec3, radius: f32, color: GizmoColor },
}

/// Формы за текущий тик, по камерам
#[derive(Resource, Debug, Default)]
pub struct SensorGizmos {
    pub shapes: Vec<(Entity, GizmoShape)>,
}

impl SensorGizmos {
    pub fn for_watcher(&self, watcher: Entity) -> impl Iterator<Item = &GizmoShape> + '_ {
        self.shapes
            .iter()
            .filter(move |(owner, _)| *owner == watcher)
            .map(|(_, shape)| shape)
    }
}

pub fn state_color(state: &DetectionState) -> GizmoColor {
    if state.is_detected() {
        GizmoColor::Red
    } else if state.is_within_range() {
        GizmoColor::Yellow
    } else {
        GizmoColor::Green
    }
}

/// Луч взгляда + scan sphere цветом состояния, cyan лучи ко всем целям
pub fn sensor_gizmos(
    sensor: &Sensor,
    state: &DetectionState,
    origin: Vec3,
    forward: Vec3,
    target_positions: impl IntoIterator<Item = Vec3>,
) -> Vec<GizmoShape> {
    if !sensor.config.draw_gizmos {
        return Vec::new();
    }

    let color = state_color(state);
    let center = scan_center(sensor, origin, forward);

    let mut shapes = vec![
        GizmoShape::Line { from: origin, to: center, color },
        GizmoShape::WireSphere {
            center,
            radius: sensor.config.detection_radius,
            color,
        },
    ];
    shapes.extend(target_positions.into_iter().map(|to| GizmoShape::Line {
        from: origin,
        to,
        color: GizmoColor::Cyan,
    }));
    shapes
}
