//! Detection events: исходящий контракт для UI / alarm логики

use bevy::prelude::*;

use crate::detection::components::DetectionLevel;

/// Уровень awareness камеры изменился
///
/// Пишется один раз на каждое реальное изменение уровня (без повторов,
/// если mutator поставил тот же уровень).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct DetectionChanged {
    pub watcher: Entity,
    pub from: DetectionLevel,
    pub to: DetectionLevel,
    /// Цель после перехода (None после потери)
    pub target: Option<Entity>,
}
