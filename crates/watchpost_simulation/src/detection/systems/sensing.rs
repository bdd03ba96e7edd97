//! Re-evaluation system (захват / WithinRange / потеря)

use bevy::prelude::*;

use crate::detection::components::{DetectionState, Sensor};
use crate::detection::events::DetectionChanged;
use crate::detection::sensing::update_detection_state;
use crate::spatial::WorldBodies;
use crate::sweep::IdleSweep;

use super::{apply_sweep_directive, report_change};

/// System: шаг 2 тика: пересчёт уровня по scan volume и lose_range
pub fn update_detection_states(
    mut watchers: Query<(Entity, &mut Sensor, &mut DetectionState, &Transform)>,
    bodies: WorldBodies,
    mut sweeps: Query<&mut IdleSweep>,
    mut changes: EventWriter<DetectionChanged>,
) {
    for (watcher, mut sensor, mut state, transform) in watchers.iter_mut() {
        let before = state.level();
        let origin = transform.translation;
        let forward = transform.forward().as_vec3();

        let directive = update_detection_state(&mut sensor, &mut state, origin, forward, &bodies);

        apply_sweep_directive(&mut sensor, directive, &mut sweeps);
        report_change(watcher, before, &state, &sensor, &mut changes);
    }
}
