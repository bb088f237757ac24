#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use crate::behaviour::*;
    use crate::commands::SceneCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::records::*;
    use crate::state::{SceneSnapshot, SimulationState};
    use crate::types::{SimTime, Transform};

    #[test]
    fn test_game_phase_defaults_to_playing() {
        let state = SimulationState::default();
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.projectile_active);
        assert_eq!(state.score, 0);
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_transform_translate() {
        let mut t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        t.translate(Vec3::new(0.5, -1.0, 0.0));
        assert_eq!(t.position, Vec3::new(1.5, 1.0, 3.0));
        assert_eq!(t.scale, Vec3::ONE, "Default scale should be one");
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..4 {
            time.advance(0.25);
        }
        assert_eq!(time.frame, 4);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_player_record_round_trip_keeps_values() {
        let behaviour = ScriptedBehaviour::PlayerController(PlayerController {
            mouse_sensitivity: Vec2::new(0.9, 0.1),
            move_speeds: Vec3::new(3.0, 5.0, 7.0),
            shift_multiplier: 1.25,
            ..Default::default()
        });

        let json = serde_json::to_string(&behaviour.to_record()).unwrap();
        let record: BehaviourRecord = serde_json::from_str(&json).unwrap();
        let restored = ScriptedBehaviour::from_record(&record);

        assert_eq!(restored, behaviour);
    }

    #[test]
    fn test_player_record_missing_fields_use_documented_defaults() {
        let record: BehaviourRecord =
            serde_json::from_str(r#"{"type":"PlayerController"}"#).unwrap();
        let ScriptedBehaviour::PlayerController(player) = ScriptedBehaviour::from_record(&record)
        else {
            panic!("expected a player controller");
        };

        assert_eq!(player.mouse_sensitivity, Vec2::new(0.5, 0.3));
        assert_eq!(player.move_speeds, Vec3::splat(PLAYER_MOVE_SPEED));
        // Restored shift multiplier differs from the constructor's on purpose.
        assert_eq!(player.shift_multiplier, PERSISTED_SHIFT_MULTIPLIER_DEFAULT);
        assert_ne!(player.shift_multiplier, PlayerController::default().shift_multiplier);
    }

    #[test]
    fn test_player_record_partial_fields() {
        let record: BehaviourRecord = serde_json::from_str(
            r#"{"type":"PlayerController","move_speed":[1.0,2.0,3.0]}"#,
        )
        .unwrap();
        let ScriptedBehaviour::PlayerController(player) = ScriptedBehaviour::from_record(&record)
        else {
            panic!("expected a player controller");
        };
        assert_eq!(player.move_speeds, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(player.mouse_sensitivity, Vec2::new(0.5, 0.3));
    }

    #[test]
    fn test_enemy_records_keep_kind() {
        for behaviour in [ScriptedBehaviour::enemy(), ScriptedBehaviour::top_enemy()] {
            let record = behaviour.to_record();
            let restored = ScriptedBehaviour::from_record(&record);
            assert_eq!(restored.type_name(), behaviour.type_name());
            assert_eq!(restored, behaviour);
        }
    }

    #[test]
    fn test_enemy_record_vestigial_defaults() {
        let record: BehaviourRecord =
            serde_json::from_str(r#"{"type":"TopEnemyScript"}"#).unwrap();
        let ScriptedBehaviour::PatrolEnemy(enemy) = ScriptedBehaviour::from_record(&record) else {
            panic!("expected a patrol enemy");
        };
        assert_eq!(enemy.kind, PatrolKind::Top);
        assert!(enemy.moving_left, "Restored enemies start moving left");
        assert_eq!(enemy.timer, 0.0);
        assert_eq!(enemy.vestigial.move_speeds, Vec3::splat(ENEMY_RECORD_MOVE_SPEED));
        assert_eq!(
            enemy.vestigial.shift_multiplier,
            PERSISTED_SHIFT_MULTIPLIER_DEFAULT
        );
    }

    #[test]
    fn test_bolt_record_is_empty_object() {
        let json = serde_json::to_value(ScriptedBehaviour::bolt().to_record()).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "Bolt" }));
    }

    #[test]
    fn test_runtime_state_not_restored() {
        let mut enemy = PatrolEnemy::new(PatrolKind::Standard);
        enemy.timer = 12.0;
        enemy.moving_left = false;
        let record = ScriptedBehaviour::PatrolEnemy(enemy).to_record();
        let restored = ScriptedBehaviour::from_record(&record);
        let ScriptedBehaviour::PatrolEnemy(restored) = restored else {
            panic!("expected a patrol enemy");
        };
        assert_eq!(restored.timer, 0.0);
        assert!(restored.moving_left);
    }

    #[test]
    fn test_scene_command_serde() {
        let commands = vec![
            SceneCommand::Pause,
            SceneCommand::Resume,
            SceneCommand::Restart,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: SceneCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_game_event_tagged() {
        let event = GameEvent::EnemyDestroyed {
            kind: PatrolKind::Standard,
            position: Vec3::new(1.0, 2.0, 1.0),
            score: 3,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "EnemyDestroyed");
        assert_eq!(json["score"], 3);
        let back: GameEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_snapshot_serializes() {
        let snapshot = SceneSnapshot {
            score: 7,
            events: vec![GameEvent::BoltExpired],
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SceneSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.score, 7);
        assert_eq!(back.events, vec![GameEvent::BoltExpired]);
    }
}
