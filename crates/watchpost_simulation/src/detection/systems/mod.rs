//! Detection systems (FixedUpdate, цепочкой)

pub mod facing;
pub mod gizmos;
pub mod indicator;
pub mod resolution;
pub mod sensing;
pub mod sighting;

// Re-export all systems
pub use facing::*;
pub use gizmos::*;
pub use indicator::*;
pub use resolution::*;
pub use sensing::*;
pub use sighting::*;

use bevy::prelude::*;

use crate::detection::components::{DetectionLevel, DetectionState, Sensor};
use crate::detection::events::DetectionChanged;
use crate::detection::sensing::SweepDirective;
use crate::sweep::IdleSweep;

/// Применяет directive к idle sweep коллаборатору (если он есть)
pub(crate) fn apply_sweep_directive(
    sensor: &mut Sensor,
    directive: SweepDirective,
    sweeps: &mut Query<&mut IdleSweep>,
) {
    let enable = match directive {
        SweepDirective::Keep => return,
        SweepDirective::Suspend => false,
        SweepDirective::Resume => true,
    };

    sensor.facing_enabled = !enable;

    let Some(sweep_entity) = sensor.idle_sweep else {
        return;
    };
    let Ok(mut sweep) = sweeps.get_mut(sweep_entity) else {
        return;
    };
    if sweep.enabled != enable {
        sweep.enabled = enable;
    }
}

/// Пишет DetectionChanged + лог, если уровень реально поменялся
pub(crate) fn report_change(
    watcher: Entity,
    from: DetectionLevel,
    state: &DetectionState,
    sensor: &Sensor,
    changes: &mut EventWriter<DetectionChanged>,
) {
    let to = state.level();
    if from == to {
        return;
    }

    let icon = match to {
        DetectionLevel::Detected => "🚨",
        DetectionLevel::WithinRange => "👁️",
        DetectionLevel::Alerted => "⚠️",
        DetectionLevel::NotDetected => "👻",
    };
    crate::logger::log_info(&format!(
        "{} Sensor {:?}: {:?} → {:?} (target {:?})",
        icon, watcher, from, to, sensor.current_target
    ));

    changes.write(DetectionChanged {
        watcher,
        from,
        to,
        target: sensor.current_target,
    });
}
