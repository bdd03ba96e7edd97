//! Headless симуляция WATCHPOST
//!
//! Одна камера, стена и блуждающий "Player". Печатает смену awareness.

use bevy::prelude::*;
use rand::Rng;
use watchpost_simulation::{
    create_headless_app, run_tick, spawn_security_camera, Body, DetectionState, DeterministicRng,
    SecurityCamera, SensorConfig, SimulationPlugin,
};

/// Маркер блуждающей цели
#[derive(Component)]
struct Wanderer {
    speed: f32,
}

/// Случайное блуждание по XZ (seeded RNG → одинаковый прогон при одинаковом seed)
fn wander(
    mut wanderers: Query<(&Wanderer, &mut Transform)>,
    mut rng: ResMut<DeterministicRng>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.timestep().as_secs_f32();

    for (wanderer, mut transform) in wanderers.iter_mut() {
        let step = Vec3::new(rng.rng.gen_range(-1.0..1.0), 0.0, rng.rng.gen_range(-0.6..1.0));
        transform.translation += step * wanderer.speed * delta;
    }
}

fn main() {
    let seed = 42;
    println!("Starting WATCHPOST headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);
    app.add_systems(FixedUpdate, wander.before(watchpost_simulation::SensorSet));

    let world = app.world_mut();
    let camera = spawn_security_camera(
        world,
        SecurityCamera::new(
            "SecurityCamera",
            Transform::from_xyz(0.0, 1.5, 0.0).looking_to(Vec3::Z, Vec3::Y),
            SensorConfig::with_targets(["Player"]),
        ),
    );
    world.spawn((
        Name::new("Wall"),
        Transform::from_xyz(4.0, 1.5, 6.0),
        Body::cuboid(Vec3::new(1.5, 2.0, 0.25)),
    ));
    world.spawn((
        Name::new("Player"),
        Transform::from_xyz(0.0, 1.5, 2.0),
        Body::sphere(0.5),
        Wanderer { speed: 6.0 },
    ));

    // 20 секунд при 60Hz
    for tick in 0..1200 {
        run_tick(&mut app);

        if tick % 120 == 0 {
            let level = app
                .world()
                .get::<DetectionState>(camera)
                .map(|state| state.level());
            println!("Tick {}: camera {:?}", tick, level);
        }
    }

    println!("Simulation complete!");
}
