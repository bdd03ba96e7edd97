//! Debug gizmos collection

use bevy::prelude::*;

use crate::detection::components::{DetectionState, Sensor};
use crate::detection::gizmos::{sensor_gizmos, SensorGizmos};

/// System: пересобирает `SensorGizmos` на текущем тике
pub fn collect_sensor_gizmos(
    sensors: Query<(Entity, &Sensor, &DetectionState, &Transform)>,
    targets: Query<&Transform>,
    mut gizmos: ResMut<SensorGizmos>,
) {
    gizmos.shapes.clear();

    for (watcher, sensor, state, transform) in sensors.iter() {
        let target_positions = sensor
            .resolved_targets
            .iter()
            .filter_map(|target| targets.get(*target).ok())
            .map(|target| target.translation);

        let shapes = sensor_gizmos(
            sensor,
            state,
            transform.translation,
            transform.forward().as_vec3(),
            target_positions,
        );
        gizmos.shapes.extend(shapes.into_iter().map(|shape| (watcher, shape)));
    }
}
