//! WATCHPOST Simulation Core
//!
//! Headless ECS-симуляция на Bevy 0.16: камеры наблюдения сканируют объём
//! перед собой, захватывают цель, подтверждают её лучом и следят за ней.
//!
//! - detection: awareness FSM + сенсор (ядро)
//! - spatial: overlap/raycast сервис поверх `Body`
//! - sweep: idle качание камеры
//! - logger: глобальный leveled logger

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod detection;
pub mod logger;
pub mod spatial;
pub mod sweep;

// Re-export базовых типов для удобства
pub use detection::{
    spawn_security_camera, DetectionChanged, DetectionLevel, DetectionPlugin, DetectionState,
    IndicatorColor, IndicatorLight, SecurityCamera, Sensor, SensorConfig, SensorSet,
};
pub use logger::{init_logger, log, log_info, log_warning};
pub use spatial::{Body, SpatialQuery, WorldBodies};
pub use sweep::IdleSweep;

/// Главный plugin симуляции
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Fixed timestep 60Hz для simulation tick
        app.insert_resource(Time::<Fixed>::from_hz(60.0));

        // Seed из create_headless_app не перетираем
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app.add_plugins(DetectionPlugin);
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}

/// Ровно один simulation tick (FixedUpdate), без зависимости от wall clock
///
/// `app.update()` крутит FixedUpdate столько раз, сколько накопилось
/// реального времени: для пошаговых тестов нужен явный тик. Часы ведём
/// так же, как fixed main loop Bevy: `Time<Fixed>` сдвигается на timestep,
/// generic `Time` на время тика указывает на fixed clock.
pub fn run_tick(app: &mut App) {
    let world = app.world_mut();

    let timestep = world.resource::<Time<Fixed>>().timestep();
    world.resource_mut::<Time<Fixed>>().advance_by(timestep);
    *world.resource_mut::<Time>() = world.resource::<Time<Fixed>>().as_generic();

    world.run_schedule(FixedUpdate);

    *world.resource_mut::<Time>() = world.resource::<Time<Virtual>>().as_generic();
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
