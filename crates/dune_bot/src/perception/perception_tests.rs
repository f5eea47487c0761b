//! Tests for perception.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use super::super::*;
    use crate::components::{BallInfo, CarInfo};

    fn snapshot_with(car: CarInfo, ball: Vec3) -> WorldSnapshot {
        WorldSnapshot::new(BallInfo::at(ball), vec![car])
    }

    #[test]
    fn test_perceive_basic_fields() {
        let car = CarInfo::new(Vec3::new(-300.0, 400.0, 17.0), Rotation::default());
        let snapshot = snapshot_with(car, Vec3::new(0.0, 0.0, 93.0));

        let derived = perceive(&snapshot, 0, &BotConfig::default()).unwrap();
        assert_eq!(derived.car_location, Vec2::new(-300.0, 400.0));
        assert_eq!(derived.car_height, 17.0);
        assert_eq!(derived.ball_height, 93.0);
        assert_eq!(derived.car_to_ball, Vec2::new(300.0, -400.0));
        assert!((derived.distance_to_ball - 500.0).abs() < 1e-3);
        assert!(derived.within_boundaries);
        assert!(!derived.jumped);
        assert!(!derived.double_jumped);
    }

    #[test]
    fn test_perceive_facing_ball() {
        // yaw = 0 → смотрим в +x, мяч прямо впереди
        let car = CarInfo::new(Vec3::new(0.0, 0.0, 17.0), Rotation::default());
        let snapshot = snapshot_with(car, Vec3::new(1000.0, 0.0, 93.0));

        let derived = perceive(&snapshot, 0, &BotConfig::default()).unwrap();
        assert!(derived.steer_correction.abs() < 1e-5);
        assert!(derived.facing_ball);
    }

    #[test]
    fn test_perceive_ball_behind() {
        let car = CarInfo::new(Vec3::new(0.0, 0.0, 17.0), Rotation::default());
        let snapshot = snapshot_with(car, Vec3::new(-1000.0, 10.0, 93.0));

        let derived = perceive(&snapshot, 0, &BotConfig::default()).unwrap();
        assert!(derived.steer_correction.abs() > 3.0);
        assert!(!derived.facing_ball);
    }

    #[test]
    fn test_perceive_copies_jump_flags() {
        let car = CarInfo::new(Vec3::new(0.0, 0.0, 80.0), Rotation::default()).with_jump_flags(true, true);
        let snapshot = snapshot_with(car, Vec3::ZERO);

        let derived = perceive(&snapshot, 0, &BotConfig::default()).unwrap();
        assert!(derived.jumped);
        assert!(derived.double_jumped);
    }

    #[test]
    fn test_perceive_picks_indexed_car() {
        let snapshot = WorldSnapshot::new(
            BallInfo::at(Vec3::ZERO),
            vec![
                CarInfo::new(Vec3::new(100.0, 0.0, 17.0), Rotation::default()),
                CarInfo::new(Vec3::new(-2500.0, 900.0, 300.0), Rotation::new(0.2, 1.0, -0.5)),
            ],
        );

        let derived = perceive(&snapshot, 1, &BotConfig::default()).unwrap();
        assert_eq!(derived.car_location, Vec2::new(-2500.0, 900.0));
        assert_eq!(derived.car_height, 300.0);
        assert_eq!(derived.car_rotation.roll, -0.5);
    }

    #[test]
    fn test_perceive_bad_index() {
        let snapshot = snapshot_with(CarInfo::default(), Vec3::ZERO);

        let err = perceive(&snapshot, 3, &BotConfig::default()).unwrap_err();
        assert_eq!(err, PerceptionError::CarIndexOutOfRange { index: 3, cars: 1 });
    }

    #[test]
    fn test_within_boundaries_edges() {
        let arena = BotConfig::default().arena;
        assert!(within_boundaries(Vec2::new(3999.9, 1999.9), &arena));
        assert!(within_boundaries(Vec2::new(-3999.9, -1999.9), &arena));

        for edge in [
            Vec2::new(4000.0, 0.0),
            Vec2::new(-4000.0, 0.0),
            Vec2::new(0.0, 2000.0),
            Vec2::new(0.0, -2000.0),
            Vec2::new(4000.0, 2000.0),
        ] {
            assert!(!within_boundaries(edge, &arena), "{:?} must be outside", edge);
        }
    }

    #[test]
    fn test_is_facing_threshold() {
        assert!(is_facing(0.0, 0.1));
        assert!(is_facing(-0.09, 0.1));
        assert!(!is_facing(0.1, 0.1));
        assert!(!is_facing(-0.1, 0.1));
    }
}
