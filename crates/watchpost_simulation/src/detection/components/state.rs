//! Awareness level камеры (flat FSM без таблицы переходов)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Уровень awareness
///
/// Любой уровень может следовать за любым: guard'ов нет.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize)]
pub enum DetectionLevel {
    #[default]
    NotDetected,
    Alerted,
    Detected,
    WithinRange,
}

/// Component: текущее состояние детекции одного watcher'а
///
/// Мутируется только своим `Sensor`. Истории нет: важен только текущий уровень.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub struct DetectionState {
    level: DetectionLevel,
}

impl DetectionState {
    pub fn new(level: DetectionLevel) -> Self {
        Self { level }
    }

    pub fn level(&self) -> DetectionLevel {
        self.level
    }

    pub fn alert(&mut self) {
        self.level = DetectionLevel::Alerted;
    }

    pub fn mark_detected(&mut self) {
        self.level = DetectionLevel::Detected;
    }

    pub fn mark_lost(&mut self) {
        self.level = DetectionLevel::NotDetected;
    }

    pub fn mark_within_range(&mut self) {
        self.level = DetectionLevel::WithinRange;
    }

    pub fn is_within_range(&self) -> bool {
        self.level == DetectionLevel::WithinRange
    }

    pub fn is_detected(&self) -> bool {
        self.level == DetectionLevel::Detected
    }

    pub fn is_alerted(&self) -> bool {
        self.level == DetectionLevel::Alerted
    }

    pub fn is_not_detected(&self) -> bool {
        self.level == DetectionLevel::NotDetected
    }
}
