#[cfg(test)]
mod tests {
    use glam::{DVec2, Vec2, Vec3};

    use invaders_core::behaviour::*;
    use invaders_core::constants::*;
    use invaders_core::enums::*;
    use invaders_core::events::GameEvent;
    use invaders_core::state::SimulationState;
    use invaders_core::types::Transform;

    use crate::input::{InputProbe, InputState};
    use crate::patrol::hit_metric;
    use crate::profiles::get_profile;
    use crate::{bolt, update, ScriptContext, ScriptOutcome};

    /// One entity plus the shared state it runs against.
    struct Harness {
        transform: Transform,
        sim: SimulationState,
        input: InputState,
        events: Vec<GameEvent>,
    }

    impl Harness {
        fn at(position: Vec3) -> Self {
            Self {
                transform: Transform::from_position(position),
                sim: SimulationState::default(),
                input: InputState::new(),
                events: Vec::new(),
            }
        }

        fn step(&mut self, behaviour: &mut ScriptedBehaviour, delta_time: f32) -> ScriptOutcome {
            let mut ctx = ScriptContext {
                transform: &mut self.transform,
                sim: &mut self.sim,
                input: &self.input,
                events: &mut self.events,
            };
            update(behaviour, delta_time, &mut ctx)
        }
    }

    fn moving_left(behaviour: &ScriptedBehaviour) -> bool {
        match behaviour {
            ScriptedBehaviour::PatrolEnemy(enemy) => enemy.moving_left,
            _ => panic!("expected a patrol enemy"),
        }
    }

    fn cooldown(behaviour: &ScriptedBehaviour) -> f32 {
        match behaviour {
            ScriptedBehaviour::Bolt(b) => b.cooldown,
            _ => panic!("expected a bolt"),
        }
    }

    // ---- Input ----

    #[test]
    fn test_input_state_button_edges() {
        let mut input = InputState::new();
        assert_eq!(input.mouse_button_state(MouseButton::Left), ButtonState::Up);

        input.press_button(MouseButton::Left);
        assert_eq!(input.mouse_button_state(MouseButton::Left), ButtonState::Pressed);
        input.end_frame();
        assert_eq!(input.mouse_button_state(MouseButton::Left), ButtonState::Down);

        input.release_button(MouseButton::Left);
        input.end_frame();
        assert_eq!(input.mouse_button_state(MouseButton::Left), ButtonState::Up);
    }

    #[test]
    fn test_input_state_keys() {
        let mut input = InputState::new();
        input.press(Key::W);
        input.press(Key::Space);
        assert!(input.is_key_down(Key::W));
        input.release(Key::W);
        assert!(!input.is_key_down(Key::W));
        input.release_all();
        assert!(!input.is_key_down(Key::Space));
        assert!(input.is_focused(), "New input state should be focused");
    }

    // ---- Player ----

    #[test]
    fn test_player_no_input_does_not_move() {
        let start = Vec3::new(0.0, -11.0, 1.0);
        let mut h = Harness::at(start);
        let mut player = ScriptedBehaviour::player();

        for _ in 0..10 {
            h.step(&mut player, 0.1);
        }

        assert_eq!(h.transform.position, start);
        assert_eq!(h.sim.player_position, Vec2::new(0.0, -11.0));
    }

    #[test]
    fn test_player_forward_moves_by_speed_times_time() {
        let mut h = Harness::at(Vec3::ZERO);
        h.input.press(Key::W);
        let mut player = ScriptedBehaviour::player();

        // 0.25 s steps sum exactly to 2 s.
        for _ in 0..8 {
            h.step(&mut player, 0.25);
        }

        let expected_y = PLAYER_MOVE_SPEED * 2.0;
        assert!((h.transform.position.y - expected_y).abs() < 1e-5);
        assert_eq!(h.transform.position.x, 0.0);
        assert_eq!(h.transform.rotation, Vec3::new(0.0, 0.0, FACING_UP_DEG));
    }

    #[test]
    fn test_player_last_key_in_check_order_sets_facing() {
        let mut h = Harness::at(Vec3::ZERO);
        h.input.press(Key::W);
        h.input.press(Key::A);
        let mut player = ScriptedBehaviour::player();
        h.step(&mut player, 1.0);
        assert_eq!(h.transform.rotation.z, FACING_LEFT_DEG);

        h.input.press(Key::D);
        h.step(&mut player, 1.0);
        assert_eq!(h.transform.rotation.z, FACING_RIGHT_DEG);
    }

    #[test]
    fn test_player_opposite_keys_cancel() {
        let mut h = Harness::at(Vec3::ZERO);
        h.input.press(Key::W);
        h.input.press(Key::S);
        let mut player = ScriptedBehaviour::player();
        h.step(&mut player, 1.0);
        assert_eq!(h.transform.position, Vec3::ZERO);
        assert_eq!(h.transform.rotation.z, FACING_DOWN_DEG);
    }

    #[test]
    fn test_player_shift_multiplies_speed() {
        let mut h = Harness::at(Vec3::ZERO);
        h.input.press(Key::D);
        h.input.press(Key::LeftShift);
        let mut player = ScriptedBehaviour::player();
        h.step(&mut player, 1.0);
        let expected = PLAYER_MOVE_SPEED * PLAYER_SHIFT_MULTIPLIER;
        assert!((h.transform.position.x - expected).abs() < 1e-5);
    }

    #[test]
    fn test_player_ignores_keys_without_focus_but_samples_mouse() {
        let mut h = Harness::at(Vec3::ZERO);
        h.input.set_focused(false);
        h.input.press(Key::W);
        h.input.set_mouse_position(DVec2::new(320.0, 240.0));
        let mut player = ScriptedBehaviour::player();
        h.step(&mut player, 1.0);

        assert_eq!(h.transform.position, Vec3::ZERO);
        let ScriptedBehaviour::PlayerController(p) = &player else {
            panic!("expected a player controller");
        };
        assert_eq!(p.prev_mouse_pos, DVec2::new(320.0, 240.0));
    }

    #[test]
    fn test_player_position_not_clamped() {
        let mut h = Harness::at(Vec3::ZERO);
        h.input.press(Key::A);
        let mut player = ScriptedBehaviour::player();
        for _ in 0..100 {
            h.step(&mut player, 1.0);
        }
        assert!(h.transform.position.x < -WALL_OFFSET_X);
        assert_eq!(h.sim.player_position.x, h.transform.position.x);
    }

    // ---- Patrol enemies ----

    #[test]
    fn test_patrol_flips_once_at_exact_period() {
        let mut h = Harness::at(Vec3::new(0.0, 100.0, 1.0));
        let mut enemy = ScriptedBehaviour::enemy();
        assert!(moving_left(&enemy));

        // 0.5 is exact in binary, so 80 steps sum to exactly 40 s.
        let mut flips = 0;
        let mut last = moving_left(&enemy);
        for _ in 0..80 {
            h.step(&mut enemy, 0.5);
            if moving_left(&enemy) != last {
                flips += 1;
                last = moving_left(&enemy);
            }
        }
        assert_eq!(flips, 1, "Direction should flip exactly once at the period");
        assert!(!moving_left(&enemy));
    }

    #[test]
    fn test_patrol_flips_once_when_overshooting() {
        let mut h = Harness::at(Vec3::new(0.0, 100.0, 1.0));
        let mut enemy = ScriptedBehaviour::enemy();

        // 13 * 3 = 39 s, no flip yet; the 14th step overshoots to 42 s.
        for _ in 0..13 {
            h.step(&mut enemy, 3.0);
        }
        assert!(moving_left(&enemy));
        h.step(&mut enemy, 3.0);
        assert!(!moving_left(&enemy));
        h.step(&mut enemy, 3.0);
        assert!(!moving_left(&enemy), "Timer resets after a flip");
    }

    #[test]
    fn test_top_enemy_period_and_no_descent() {
        let start = Vec3::new(9.0, 12.0, 1.0);
        let mut h = Harness::at(start);
        let mut top = ScriptedBehaviour::top_enemy();

        for _ in 0..10 {
            h.step(&mut top, 0.5);
        }
        assert!(!moving_left(&top), "Top ship flips after 5 s");
        assert_eq!(h.transform.position.y, start.y);
        // Nine half-second steps left, then the flipping step moves right.
        let expected_x = start.x - TOP_ENEMY_SWEEP_SPEED * 4.0;
        assert!((h.transform.position.x - expected_x).abs() < 1e-4);
    }

    #[test]
    fn test_standard_enemy_descends_both_directions() {
        let mut h = Harness::at(Vec3::new(0.0, 0.0, 1.0));
        let mut enemy = ScriptedBehaviour::enemy();
        h.step(&mut enemy, 1.0);
        let y_after_left = h.transform.position.y;
        assert!(y_after_left < 0.0);

        if let ScriptedBehaviour::PatrolEnemy(e) = &mut enemy {
            e.moving_left = false;
        }
        h.step(&mut enemy, 1.0);
        assert!(h.transform.position.y < y_after_left);
        assert!((h.transform.position.x - 0.0).abs() < 1e-6, "Left then right cancels");
    }

    #[test]
    fn test_hit_at_identical_position() {
        let position = Vec3::new(4.0, 4.0, 1.0);
        for kind in [ScriptedBehaviour::enemy(), ScriptedBehaviour::top_enemy()] {
            let mut enemy = kind;
            let mut h = Harness::at(position);
            h.sim.projectile_position = position;
            h.sim.projectile_active = true;

            let outcome = h.step(&mut enemy, FRAME_DT);

            assert_eq!(outcome, ScriptOutcome::Remove, "{}", enemy.type_name());
            assert_eq!(h.sim.score, 1);
            assert!(!h.sim.projectile_active);
            assert!(matches!(
                h.events.as_slice(),
                [GameEvent::EnemyDestroyed { score: 1, .. }]
            ));
        }
    }

    #[test]
    fn test_no_hit_two_units_apart_on_any_axis() {
        let position = Vec3::new(4.0, 4.0, 1.0);
        for offset in [Vec3::X, Vec3::Y, Vec3::Z] {
            for kind in [ScriptedBehaviour::enemy(), ScriptedBehaviour::top_enemy()] {
                let mut enemy = kind;
                let mut h = Harness::at(position);
                h.sim.projectile_position = position + offset * 2.0;
                h.sim.projectile_active = true;

                let outcome = h.step(&mut enemy, 0.0);

                assert_eq!(outcome, ScriptOutcome::Keep, "offset {offset:?}");
                assert_eq!(h.sim.score, 0);
                assert!(h.sim.projectile_active);
            }
        }
    }

    #[test]
    fn test_hit_metric_weights_z() {
        let a = Vec3::ZERO;
        assert!((hit_metric(a, Vec3::new(0.9, 0.0, 0.0)) - 0.9).abs() < 1e-6);
        // 0.9 along z measures sqrt(2 * 0.81) > 1.
        assert!(hit_metric(a, Vec3::new(0.0, 0.0, 0.9)) > HIT_RADIUS);
    }

    #[test]
    fn test_standard_enemy_signals_game_over_once() {
        let mut h = Harness::at(Vec3::new(0.0, LOSS_LINE_Y + 0.01, 1.0));
        let mut enemy = ScriptedBehaviour::enemy();

        h.step(&mut enemy, 1.0);
        h.step(&mut enemy, 1.0);

        assert_eq!(h.sim.phase, GamePhase::GameOver);
        let game_overs = h
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
    }

    #[test]
    fn test_top_enemy_below_line_only_logs() {
        let mut h = Harness::at(Vec3::new(0.0, LOSS_LINE_Y - 1.0, 1.0));
        let mut top = ScriptedBehaviour::top_enemy();

        h.step(&mut top, 1.0);

        assert_eq!(h.sim.phase, GamePhase::Playing);
        assert!(matches!(
            h.events.as_slice(),
            [GameEvent::LossLineCrossed {
                kind: PatrolKind::Top,
                ..
            }]
        ));
    }

    #[test]
    fn test_profiles_differ() {
        let standard = get_profile(PatrolKind::Standard);
        let top = get_profile(PatrolKind::Top);
        assert_eq!(standard.period_secs, 40.0);
        assert_eq!(top.period_secs, 5.0);
        assert_eq!(top.descent_speed, 0.0);
        assert_eq!(standard.loss_policy, LossPolicy::SignalGameOver);
        assert_eq!(top.loss_policy, LossPolicy::LogOnly);
    }

    // ---- Bolt ----

    #[test]
    fn test_idle_bolt_follows_player() {
        let mut h = Harness::at(Vec3::ZERO);
        h.sim.player_position = Vec2::new(3.0, -11.0);
        let mut b = ScriptedBehaviour::bolt();

        h.step(&mut b, FRAME_DT);

        assert_eq!(h.transform.position, Vec3::new(3.0, -11.0, BOLT_IDLE_Z));
        assert_eq!(h.transform.scale, Vec3::splat(BOLT_IDLE_SCALE));
        assert_eq!(cooldown(&b), 0.0);
        assert_eq!(bolt::phase(&h.sim), BoltPhase::Idle);
    }

    #[test]
    fn test_bolt_fires_and_sets_cooldown() {
        let mut h = Harness::at(Vec3::new(0.0, -11.0, BOLT_IDLE_Z));
        h.input.press(Key::Space);
        let mut b = ScriptedBehaviour::bolt();

        h.step(&mut b, 0.25);

        assert!(h.sim.projectile_active);
        assert_eq!(bolt::phase(&h.sim), BoltPhase::Fired);
        assert!((cooldown(&b) - (BOLT_COOLDOWN_SECS - 0.25)).abs() < 1e-6);
        assert!((h.transform.position.y - (-11.0 + BOLT_SPEED * 0.25)).abs() < 1e-5);
        assert_eq!(h.transform.scale, Vec3::splat(BOLT_FIRED_SCALE));
        assert!(matches!(h.events[0], GameEvent::BoltFired { .. }));
    }

    #[test]
    fn test_bolt_refire_while_fired_is_ignored() {
        let mut h = Harness::at(Vec3::ZERO);
        h.input.press(Key::Space);
        let mut b = ScriptedBehaviour::bolt();

        h.step(&mut b, 0.25);
        h.step(&mut b, 0.25);

        assert!((cooldown(&b) - (BOLT_COOLDOWN_SECS - 0.5)).abs() < 1e-6);
        let fired = h
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::BoltFired { .. }))
            .count();
        assert_eq!(fired, 1, "Only one bolt may be in flight");
    }

    #[test]
    fn test_try_fire_blocked_by_active_flag() {
        let mut sim = SimulationState {
            projectile_active: true,
            ..Default::default()
        };
        let mut input = InputState::new();
        input.press(Key::Space);
        let mut b = Bolt::default();
        assert!(!bolt::try_fire(&mut b, &mut sim, &input));
        assert_eq!(b.cooldown, 0.0);
    }

    #[test]
    fn test_bolt_expires_after_cooldown() {
        let mut h = Harness::at(Vec3::ZERO);
        h.input.press(Key::Space);
        let mut b = ScriptedBehaviour::bolt();
        h.step(&mut b, 0.25);
        h.input.release(Key::Space);

        // 0.25 * 6 = 1.5 s drains the cooldown; the next frame retires it.
        for _ in 0..6 {
            h.step(&mut b, 0.25);
        }
        assert!(!h.sim.projectile_active);
        assert!(h.events.contains(&GameEvent::BoltExpired));

        h.step(&mut b, 0.25);
        assert_eq!(h.transform.scale, Vec3::splat(BOLT_IDLE_SCALE));
        assert_eq!(cooldown(&b), 0.0);
    }

    #[test]
    fn test_bolt_publishes_position_before_moving() {
        let start = Vec3::new(1.0, 2.0, BOLT_IDLE_Z);
        let mut h = Harness::at(start);
        h.sim.projectile_active = true;
        let mut b = ScriptedBehaviour::Bolt(Bolt { cooldown: 1.0 });

        h.step(&mut b, 0.1);

        assert_eq!(h.sim.projectile_position, start);
        assert!(h.transform.position.y > start.y);
    }

    #[test]
    fn test_bolt_returns_to_player_after_enemy_hit() {
        let mut h = Harness::at(Vec3::new(0.0, 5.0, BOLT_IDLE_Z));
        h.sim.player_position = Vec2::new(-2.0, -11.0);
        let mut b = ScriptedBehaviour::Bolt(Bolt { cooldown: 1.0 });

        // An enemy cleared the flag mid-flight.
        h.sim.projectile_active = false;
        h.step(&mut b, 0.1);

        assert_eq!(h.transform.position, Vec3::new(-2.0, -11.0, BOLT_IDLE_Z));
        assert_eq!(cooldown(&b), 0.0);
    }
}
