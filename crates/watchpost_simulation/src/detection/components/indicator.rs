//! Индикатор камеры (лампа): красный при Detected, иначе зелёный

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum IndicatorColor {
    /// Зелёный
    #[default]
    Clear,
    /// Красный
    Alarm,
}

/// Component: лампа-индикатор (может висеть на отдельном entity)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct IndicatorLight {
    pub color: IndicatorColor,
}

impl IndicatorLight {
    pub fn is_alarm(&self) -> bool {
        self.color == IndicatorColor::Alarm
    }
}
