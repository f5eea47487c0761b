//! Tests for bot components.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use super::super::*;

    #[test]
    fn test_agent_state_initial() {
        let state = AgentState::default();
        assert_eq!(state.mode, BotMode::Chase);
        assert_eq!(state.dodge_deadline, 0.0);
        assert_eq!(state.intent, ControlIntent::NEUTRAL);
    }

    #[test]
    fn test_neutral_intent_keeps_boost_on() {
        let intent = ControlIntent::default();
        assert!(intent.boost);
        assert!(!intent.jump);
        assert!(!intent.powerslide);
        assert_eq!(intent.turn, 0.0);
    }

    #[test]
    fn test_disarmed_deadline() {
        let mut state = AgentState::new();
        assert!(state.is_dodge_armed());

        state.dodge_deadline = DISARMED_DEADLINE;
        assert!(!state.is_dodge_armed());
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(BotMode::Chase.to_string(), "Chase");
        assert_eq!(BotMode::Recovery.label(), "Recovery");
        assert_eq!(BotMode::Dodging.label(), "Dodging");
    }

    #[test]
    fn test_arena_bounds_strict() {
        let arena = ArenaBounds::default();
        assert!(arena.contains(Vec2::ZERO));
        assert!(arena.contains(Vec2::new(3999.0, -1999.0)));

        // Граница: уже стена
        assert!(!arena.contains(Vec2::new(4000.0, 0.0)));
        assert!(!arena.contains(Vec2::new(-4000.0, 0.0)));
        assert!(!arena.contains(Vec2::new(0.0, 2000.0)));
        assert!(!arena.contains(Vec2::new(0.0, -2000.0)));
    }

    #[test]
    fn test_bot_config_default() {
        let config = BotConfig::default();
        assert_eq!(config.airborne_height, 20.0);
        assert_eq!(config.recovery_height, 200.0);
        assert_eq!(config.close_dodge_distance, 300.0);
        assert_eq!(config.speed_dodge_distance, 500.0);
        assert_eq!(config.dodge_delay, 0.1);
        assert_eq!(config.powerslide_angle, 1.5);
        assert!(!config.sticky_intents);
    }

    #[test]
    fn test_snapshot_car_lookup() {
        let snapshot = WorldSnapshot::new(
            BallInfo::at(Vec3::new(0.0, 0.0, 93.0)),
            vec![CarInfo::new(Vec3::new(100.0, 0.0, 17.0), Rotation::default())],
        );
        assert!(snapshot.car(0).is_some());
        assert!(snapshot.car(1).is_none());
    }
}
