//! Idle sweep: камера качается влево-вправо по синусу, пока никого не видит
//!
//! Сенсор только включает/выключает `enabled`, внутреннее состояние не читает.

use std::f32::consts::TAU;

use bevy::prelude::*;

/// Component: idle осциллятор вокруг оси Y
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct IdleSweep {
    /// Частота качания (Hz)
    pub speed: f32,
    /// Амплитуда (градусы)
    pub angle: f32,
    pub enabled: bool,
    /// Rotation на первом тике (база для качания)
    pub start_rotation: Option<Quat>,
}

impl Default for IdleSweep {
    fn default() -> Self {
        Self {
            speed: 0.1,
            angle: 45.0,
            enabled: true,
            start_rotation: None,
        }
    }
}

impl IdleSweep {
    /// Чистая функция от времени: start повёрнутый на angle·sin(t·2π·speed)
    pub fn rotation_at(&self, start: Quat, elapsed_secs: f32) -> Quat {
        let degrees = self.angle * (elapsed_secs * TAU * self.speed).sin();
        Quat::from_axis_angle(Vec3::Y, degrees.to_radians()) * start
    }
}

/// System: крутит Transform у всех включённых IdleSweep
pub fn sweep_idle_rotation(mut sweepers: Query<(&mut Transform, &mut IdleSweep)>, time: Res<Time>) {
    let elapsed = time.elapsed_secs();

    for (mut transform, mut sweep) in sweepers.iter_mut() {
        // База фиксируется даже если sweep выключен с самого начала
        if sweep.start_rotation.is_none() {
            sweep.start_rotation = Some(transform.rotation);
        }
        let start = sweep.start_rotation.unwrap_or(transform.rotation);

        if !sweep.enabled {
            continue;
        }

        transform.rotation = sweep.rotation_at(start, elapsed);
    }
}
