//! Facing: Detected камера непрерывно смотрит на цель

use bevy::prelude::*;

use crate::detection::components::{DetectionState, Sensor};

/// System: шаг 4 тика: look_at цели каждый тик, пока Detected
pub fn face_detected_targets(
    sensors: Query<(Entity, &Sensor, &DetectionState)>,
    mut transforms: Query<&mut Transform>,
) {
    for (watcher, sensor, state) in sensors.iter() {
        if !state.is_detected() {
            continue;
        }
        let Some(target) = sensor.current_target else {
            continue;
        };
        let Ok(target_position) = transforms.get(target).map(|transform| transform.translation) else {
            continue;
        };
        let Ok(mut transform) = transforms.get_mut(watcher) else {
            continue;
        };

        transform.look_at(target_position, Vec3::Y);
    }
}
