//! Startup-only резолв целей по имени

use bevy::prelude::*;

use crate::detection::components::Sensor;
use crate::detection::sensing::resolve_targets;

/// System: резолвит `target_names` для сенсоров, которые ещё не резолвились
///
/// Выполняется один раз на сенсор (первый тик после спавна). Ненайденные
/// имена выбрасываются навсегда: повторных попыток нет.
pub fn resolve_new_sensor_targets(
    mut sensors: Query<(Entity, &mut Sensor)>,
    named: Query<(Entity, &Name), With<Transform>>,
) {
    for (watcher, mut sensor) in sensors.iter_mut() {
        if sensor.targets_resolved() {
            continue;
        }

        for warning in sensor.config.validate() {
            crate::logger::log_warning(&format!("Sensor {:?}: {}", watcher, warning));
        }

        // Дубликаты имён: берём наименьший Entity для детерминизма
        let targets = resolve_targets(&sensor.config.target_names, |name| {
            named
                .iter()
                .filter(|(_, entity_name)| entity_name.as_str() == name)
                .map(|(entity, _)| entity)
                .min()
        });

        crate::logger::log(&format!(
            "Sensor {:?}: resolved {}/{} targets",
            watcher,
            targets.len(),
            sensor.config.target_names.len()
        ));
        sensor.bind_targets(targets);
    }
}
