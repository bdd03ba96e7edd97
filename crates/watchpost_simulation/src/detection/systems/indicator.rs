//! Indicator light system

use bevy::prelude::*;

use crate::detection::components::{DetectionState, IndicatorLight, Sensor};
use crate::detection::sensing::indicator_color;

/// System: красный при Detected, иначе зелёный. На состояние не влияет.
pub fn update_indicator_lights(
    sensors: Query<(&Sensor, &DetectionState)>,
    mut lights: Query<&mut IndicatorLight>,
) {
    for (sensor, state) in sensors.iter() {
        let Some(light_entity) = sensor.indicator else {
            continue;
        };
        let Ok(mut light) = lights.get_mut(light_entity) else {
            continue;
        };

        let color = indicator_color(state);
        if light.color != color {
            light.color = color;
        }
    }
}
