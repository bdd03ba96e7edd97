//! Deferred LOS: постановка и выполнение задач

use bevy::prelude::*;

use crate::detection::components::{DetectionState, Sensor};
use crate::detection::events::DetectionChanged;
use crate::detection::sensing::confirm_sighting;
use crate::detection::sighting::{PendingSightings, SensorClock};
use crate::spatial::WorldBodies;
use crate::sweep::IdleSweep;

use super::{apply_sweep_directive, report_change};

/// System: новый тик сенсоров
pub fn advance_sensor_clock(mut clock: ResMut<SensorClock>) {
    clock.tick += 1;
}

/// System: выполняет LOS задачи, поставленные на прошлых тиках
pub fn run_pending_sightings(
    clock: Res<SensorClock>,
    mut pending: ResMut<PendingSightings>,
    mut watchers: Query<(&mut Sensor, &mut DetectionState, &Transform)>,
    bodies: WorldBodies,
    mut sweeps: Query<&mut IdleSweep>,
    mut changes: EventWriter<DetectionChanged>,
) {
    for task in pending.take_due(clock.tick) {
        // Камера despawn'нулась: задача выполняется вхолостую
        let Ok((mut sensor, mut state, transform)) = watchers.get_mut(task.watcher) else {
            continue;
        };

        let before = state.level();
        let directive = confirm_sighting(&sensor, &mut state, task.watcher, transform.translation, &bodies);

        apply_sweep_directive(&mut sensor, directive, &mut sweeps);
        report_change(task.watcher, before, &state, &sensor, &mut changes);
    }
}

/// System: шаг 3 тика: LOS задача для каждой камеры в WithinRange
pub fn schedule_sightings(
    clock: Res<SensorClock>,
    watchers: Query<(Entity, &DetectionState), With<Sensor>>,
    mut pending: ResMut<PendingSightings>,
) {
    for (watcher, state) in watchers.iter() {
        if state.is_within_range() {
            pending.schedule(watcher, clock.tick);
        }
    }
}
