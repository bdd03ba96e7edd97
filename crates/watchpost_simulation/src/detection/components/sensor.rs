//! Sensor component + tunable config

use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Tunable параметры сенсора (задаются один раз при спавне)
///
/// Контракт: `lose_range > view_range + detection_radius`, иначе цель
/// теряется на следующем тике после захвата. Runtime это не проверяет,
/// только `validate()` выдаёт предупреждения.
#[derive(Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// Имена целей (резолвятся один раз при старте)
    pub target_names: Vec<String>,
    /// Дистанция от камеры до центра scan volume
    pub view_range: f32,
    /// Радиус scan volume
    pub detection_radius: f32,
    /// Дальше этой дистанции Detected цель теряется
    pub lose_range: f32,
    /// Длина LOS луча. None: длина сырого вектора до цели (= дистанция до цели)
    pub sight_range: Option<f32>,
    pub draw_gizmos: bool,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            target_names: Vec::new(),
            view_range: 8.5,
            detection_radius: 3.0,
            lose_range: 16.0,
            sight_range: None,
            draw_gizmos: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    NoTargets,
    NonPositive { field: &'static str, value: f32 },
    /// lose_range не покрывает дальнюю точку scan volume
    LoseRangeTooShort { lose_range: f32, reach: f32 },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::NoTargets => write!(f, "no target names configured, sensor will never acquire"),
            ConfigWarning::NonPositive { field, value } => {
                write!(f, "{} must be positive (got {})", field, value)
            }
            ConfigWarning::LoseRangeTooShort { lose_range, reach } => write!(
                f,
                "lose_range {:.2} <= view_range + detection_radius {:.2}, target may be lost right after acquisition",
                lose_range, reach
            ),
        }
    }
}

impl SensorConfig {
    pub fn with_targets<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            target_names: names.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Дальняя точка scan volume от камеры
    pub fn reach(&self) -> f32 {
        self.view_range + self.detection_radius
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.target_names.is_empty() {
            warnings.push(ConfigWarning::NoTargets);
        }

        for (field, value) in [
            ("view_range", self.view_range),
            ("detection_radius", self.detection_radius),
            ("lose_range", self.lose_range),
        ] {
            if value <= 0.0 {
                warnings.push(ConfigWarning::NonPositive { field, value });
            }
        }

        if let Some(sight_range) = self.sight_range {
            if sight_range <= 0.0 {
                warnings.push(ConfigWarning::NonPositive { field: "sight_range", value: sight_range });
            }
        }

        if self.lose_range <= self.reach() {
            warnings.push(ConfigWarning::LoseRangeTooShort {
                lose_range: self.lose_range,
                reach: self.reach(),
            });
        }

        warnings
    }
}

/// Component: сенсор watcher'а
///
/// Коллабораторы (idle sweep, индикатор) передаются явными entity handles
/// при спавне. Если handle пустой или entity без нужного компонента -
/// соответствующая фича просто пропускается.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Sensor {
    pub config: SensorConfig,
    /// Живые цели, найденные по `target_names` (не владеем их lifetime)
    pub resolved_targets: Vec<Entity>,
    pub current_target: Option<Entity>,
    /// true пока камера следит за целью (idle sweep при этом выключен)
    pub facing_enabled: bool,
    pub idle_sweep: Option<Entity>,
    pub indicator: Option<Entity>,
    targets_resolved: bool,
}

impl Sensor {
    pub fn new(config: SensorConfig) -> Self {
        Self {
            config,
            resolved_targets: Vec::new(),
            current_target: None,
            facing_enabled: false,
            idle_sweep: None,
            indicator: None,
            targets_resolved: false,
        }
    }

    pub fn with_idle_sweep(mut self, sweep: Entity) -> Self {
        self.idle_sweep = Some(sweep);
        self
    }

    pub fn with_indicator(mut self, indicator: Entity) -> Self {
        self.indicator = Some(indicator);
        self
    }

    pub fn targets_resolved(&self) -> bool {
        self.targets_resolved
    }

    /// Фиксирует набор целей на весь lifetime сенсора (повторно не вызывается)
    pub fn bind_targets(&mut self, targets: Vec<Entity>) {
        self.resolved_targets = targets;
        self.targets_resolved = true;
    }
}
