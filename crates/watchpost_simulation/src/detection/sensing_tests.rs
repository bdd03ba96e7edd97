//! Tests for the sensing algorithm (без ECS, через fake spatial service).

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::detection::components::{DetectionLevel, DetectionState, IndicatorColor, Sensor, SensorConfig};
    use crate::detection::sensing::*;
    use crate::spatial::{nearest_ray_hit, overlapping_bodies, Body, RayHit, SpatialQuery};

    const CAMERA: Entity = Entity::from_raw(1);
    const PLAYER: Entity = Entity::from_raw(2);
    const WALL: Entity = Entity::from_raw(3);
    const DRONE: Entity = Entity::from_raw(4);

    struct FakeBody {
        entity: Entity,
        name: &'static str,
        position: Vec3,
        body: Option<Body>,
    }

    #[derive(Default)]
    struct FakeSpace {
        bodies: Vec<FakeBody>,
    }

    impl FakeSpace {
        fn with(mut self, entity: Entity, name: &'static str, position: Vec3, body: Option<Body>) -> Self {
            self.bodies.push(FakeBody { entity, name, position, body });
            self
        }

        fn move_to(&mut self, entity: Entity, position: Vec3) {
            if let Some(body) = self.bodies.iter_mut().find(|b| b.entity == entity) {
                body.position = position;
            }
        }

        fn remove(&mut self, entity: Entity) {
            self.bodies.retain(|b| b.entity != entity);
        }

        fn lookup(&self, name: &str) -> Option<Entity> {
            self.bodies.iter().find(|b| b.name == name).map(|b| b.entity)
        }

        fn colliders(&self) -> impl Iterator<Item = (Entity, Vec3, Body)> + '_ {
            self.bodies
                .iter()
                .filter_map(|b| b.body.map(|body| (b.entity, b.position, body)))
        }
    }

    impl SpatialQuery for FakeSpace {
        fn overlap_sphere(&self, center: Vec3, radius: f32) -> Vec<Entity> {
            overlapping_bodies(self.colliders(), center, radius)
        }

        fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32, exclude: Option<Entity>) -> Option<RayHit> {
            nearest_ray_hit(self.colliders(), origin, direction, max_distance, exclude)
        }

        fn name_of(&self, entity: Entity) -> Option<&str> {
            self.bodies.iter().find(|b| b.entity == entity).map(|b| b.name)
        }

        fn position_of(&self, entity: Entity) -> Option<Vec3> {
            self.bodies.iter().find(|b| b.entity == entity).map(|b| b.position)
        }
    }

    /// Камера в (0,0,0) смотрит в +Z, игрок в (0,0,9)
    fn scenario_space() -> FakeSpace {
        FakeSpace::default()
            .with(CAMERA, "SecurityCamera", Vec3::ZERO, Some(Body::sphere(0.3)))
            .with(PLAYER, "Player", Vec3::new(0.0, 0.0, 9.0), Some(Body::sphere(0.5)))
    }

    fn armed_sensor(config: SensorConfig, space: &FakeSpace) -> Sensor {
        let mut sensor = Sensor::new(config);
        let targets = resolve_targets(&sensor.config.target_names, |name| space.lookup(name));
        sensor.bind_targets(targets);
        sensor
    }

    #[test]
    fn test_resolve_drops_unknown_names() {
        let space = scenario_space();
        let names = vec!["Ghost".to_string(), "Player".to_string()];

        let resolved = resolve_targets(&names, |name| space.lookup(name));
        assert_eq!(resolved, vec![PLAYER]);
    }

    #[test]
    fn test_acquire_within_scan_volume() {
        let space = scenario_space();
        let sensor = armed_sensor(SensorConfig::with_targets(["Player"]), &space);

        assert_eq!(scan_center(&sensor, Vec3::ZERO, Vec3::Z), Vec3::new(0.0, 0.0, 8.5));
        assert_eq!(acquire_target(&sensor, Vec3::ZERO, Vec3::Z, &space), Some(PLAYER));
        // Смотрим в другую сторону: пусто
        assert_eq!(acquire_target(&sensor, Vec3::ZERO, Vec3::NEG_Z, &space), None);
    }

    #[test]
    fn test_acquire_without_resolved_targets() {
        let space = scenario_space();
        let sensor = armed_sensor(SensorConfig::with_targets(["Ghost"]), &space);

        assert!(sensor.resolved_targets.is_empty());
        assert_eq!(acquire_target(&sensor, Vec3::ZERO, Vec3::Z, &space), None);
    }

    #[test]
    fn test_acquire_prefers_nearest_to_scan_center() {
        let mut space = scenario_space()
            .with(DRONE, "Drone", Vec3::new(0.0, 0.0, 8.0), Some(Body::sphere(0.5)));
        space.move_to(PLAYER, Vec3::new(0.0, 0.0, 10.5));

        // Player первым в конфиге, но Drone ближе к центру (0,0,8.5)
        let sensor = armed_sensor(SensorConfig::with_targets(["Player", "Drone"]), &space);
        assert_eq!(acquire_target(&sensor, Vec3::ZERO, Vec3::Z, &space), Some(DRONE));
    }

    #[test]
    fn test_update_sets_within_range_only_with_target() {
        let mut space = scenario_space();
        space.move_to(PLAYER, Vec3::new(0.0, 0.0, 30.0));
        let mut sensor = armed_sensor(SensorConfig::with_targets(["Player"]), &space);
        let mut state = DetectionState::default();

        let directive = update_detection_state(&mut sensor, &mut state, Vec3::ZERO, Vec3::Z, &space);
        assert_eq!(directive, SweepDirective::Keep);
        assert!(state.is_not_detected());
        assert!(sensor.current_target.is_none());

        space.move_to(PLAYER, Vec3::new(0.0, 0.0, 9.0));
        update_detection_state(&mut sensor, &mut state, Vec3::ZERO, Vec3::Z, &space);
        assert!(state.is_within_range());
        assert_eq!(sensor.current_target, Some(PLAYER));
    }

    #[test]
    fn test_confirm_clear_line_of_sight() {
        let space = scenario_space();
        let mut sensor = armed_sensor(SensorConfig::with_targets(["Player"]), &space);
        let mut state = DetectionState::default();
        update_detection_state(&mut sensor, &mut state, Vec3::ZERO, Vec3::Z, &space);

        let directive = confirm_sighting(&sensor, &mut state, CAMERA, Vec3::ZERO, &space);
        assert_eq!(directive, SweepDirective::Suspend);
        assert!(state.is_detected());
    }

    #[test]
    fn test_confirm_occluded_by_wall() {
        let space = scenario_space().with(
            WALL,
            "Wall",
            Vec3::new(0.0, 0.0, 5.0),
            Some(Body::cuboid(Vec3::new(2.0, 2.0, 0.25))),
        );
        let mut sensor = armed_sensor(SensorConfig::with_targets(["Player"]), &space);
        let mut state = DetectionState::default();
        update_detection_state(&mut sensor, &mut state, Vec3::ZERO, Vec3::Z, &space);

        let directive = confirm_sighting(&sensor, &mut state, CAMERA, Vec3::ZERO, &space);
        assert_eq!(directive, SweepDirective::Resume);
        assert!(state.is_within_range());
    }

    #[test]
    fn test_confirm_without_target_is_noop() {
        let space = scenario_space();
        let sensor = armed_sensor(SensorConfig::with_targets(["Player"]), &space);
        let mut state = DetectionState::new(DetectionLevel::Alerted);

        let directive = confirm_sighting(&sensor, &mut state, CAMERA, Vec3::ZERO, &space);
        assert_eq!(directive, SweepDirective::Keep);
        assert!(state.is_alerted());
    }

    #[test]
    fn test_short_sight_range_misses_target() {
        let space = scenario_space();
        let config = SensorConfig {
            sight_range: Some(4.0),
            ..SensorConfig::with_targets(["Player"])
        };
        let mut sensor = armed_sensor(config, &space);
        let mut state = DetectionState::default();
        update_detection_state(&mut sensor, &mut state, Vec3::ZERO, Vec3::Z, &space);

        let directive = confirm_sighting(&sensor, &mut state, CAMERA, Vec3::ZERO, &space);
        assert_eq!(directive, SweepDirective::Resume);
        assert!(state.is_within_range());
    }

    #[test]
    fn test_loss_beyond_lose_range_clears_target() {
        let mut space = scenario_space();
        let mut sensor = armed_sensor(SensorConfig::with_targets(["Player"]), &space);
        let mut state = DetectionState::default();
        update_detection_state(&mut sensor, &mut state, Vec3::ZERO, Vec3::Z, &space);
        confirm_sighting(&sensor, &mut state, CAMERA, Vec3::ZERO, &space);
        assert!(state.is_detected());

        space.move_to(PLAYER, Vec3::new(0.0, 0.0, 17.0));
        let directive = update_detection_state(&mut sensor, &mut state, Vec3::ZERO, Vec3::Z, &space);

        assert_eq!(directive, SweepDirective::Resume);
        assert!(state.is_not_detected());
        assert!(sensor.current_target.is_none());
    }

    #[test]
    fn test_detected_persists_inside_lose_range_even_if_occluded() {
        let mut space = scenario_space();
        let mut sensor = armed_sensor(SensorConfig::with_targets(["Player"]), &space);
        let mut state = DetectionState::default();
        update_detection_state(&mut sensor, &mut state, Vec3::ZERO, Vec3::Z, &space);
        confirm_sighting(&sensor, &mut state, CAMERA, Vec3::ZERO, &space);

        // Игрок ушёл за стену, но в пределах 16м: LOS повторно не проверяется
        space = space.with(WALL, "Wall", Vec3::new(0.0, 0.0, 5.0), Some(Body::cuboid(Vec3::splat(2.0))));
        space.move_to(PLAYER, Vec3::new(0.0, 0.0, 15.0));

        let directive = update_detection_state(&mut sensor, &mut state, Vec3::ZERO, Vec3::Z, &space);
        assert_eq!(directive, SweepDirective::Keep);
        assert!(state.is_detected());
        assert_eq!(sensor.current_target, Some(PLAYER));
    }

    #[test]
    fn test_acquired_at_far_edge_is_not_lost() {
        let mut space = scenario_space();
        // Дальний край scan volume: 8.5 + 3.0 (+ радиус тела внутри)
        space.move_to(PLAYER, Vec3::new(0.0, 0.0, 11.9));
        let mut sensor = armed_sensor(SensorConfig::with_targets(["Player"]), &space);
        let mut state = DetectionState::default();

        update_detection_state(&mut sensor, &mut state, Vec3::ZERO, Vec3::Z, &space);
        confirm_sighting(&sensor, &mut state, CAMERA, Vec3::ZERO, &space);
        assert!(state.is_detected());

        update_detection_state(&mut sensor, &mut state, Vec3::ZERO, Vec3::Z, &space);
        assert!(state.is_detected());
    }

    #[test]
    fn test_short_lose_range_loses_right_after_detection() {
        let mut space = scenario_space();
        space.move_to(PLAYER, Vec3::new(0.0, 0.0, 11.0));
        let config = SensorConfig {
            lose_range: 10.0,
            ..SensorConfig::with_targets(["Player"])
        };
        let mut sensor = armed_sensor(config, &space);
        let mut state = DetectionState::default();

        update_detection_state(&mut sensor, &mut state, Vec3::ZERO, Vec3::Z, &space);
        confirm_sighting(&sensor, &mut state, CAMERA, Vec3::ZERO, &space);
        assert!(state.is_detected());

        update_detection_state(&mut sensor, &mut state, Vec3::ZERO, Vec3::Z, &space);
        assert!(state.is_not_detected());
    }

    #[test]
    fn test_despawned_target_is_released() {
        let mut space = scenario_space();
        let mut sensor = armed_sensor(SensorConfig::with_targets(["Player"]), &space);
        let mut state = DetectionState::default();
        update_detection_state(&mut sensor, &mut state, Vec3::ZERO, Vec3::Z, &space);
        assert!(state.is_within_range());

        space.remove(PLAYER);
        assert_eq!(
            confirm_sighting(&sensor, &mut state, CAMERA, Vec3::ZERO, &space),
            SweepDirective::Keep
        );

        let directive = update_detection_state(&mut sensor, &mut state, Vec3::ZERO, Vec3::Z, &space);
        assert_eq!(directive, SweepDirective::Resume);
        assert!(state.is_not_detected());
        assert!(sensor.current_target.is_none());
    }

    #[test]
    fn test_indicator_color() {
        assert_eq!(indicator_color(&DetectionState::new(DetectionLevel::Detected)), IndicatorColor::Alarm);
        assert_eq!(indicator_color(&DetectionState::new(DetectionLevel::WithinRange)), IndicatorColor::Clear);
        assert_eq!(indicator_color(&DetectionState::default()), IndicatorColor::Clear);
    }
}
