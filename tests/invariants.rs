//! Property tests for simulation invariants

use glam::Vec2;
use proptest::prelude::*;

use retro_pong::consts::*;
use retro_pong::sim::{GamePhase, GameState, Side, TickInput, tick};

/// Held keys for one tick; serve is pressed now and then
fn tick_input() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>(), prop::bool::weighted(0.1)).prop_map(|(up, down, serve)| {
        TickInput {
            up,
            down,
            serve,
            ..Default::default()
        }
    })
}

fn run(seed: u64, inputs: &[TickInput]) -> GameState {
    let mut state = GameState::new(seed);
    for input in inputs {
        tick(&mut state, input);
    }
    state
}

fn assert_pinned(state: &GameState) {
    let paddle = state.paddle(state.server);
    assert_eq!(state.ball.vel, Vec2::ZERO);
    assert_eq!(
        state.ball.pos,
        Vec2::new(state.server.serve_x(), paddle.center())
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn paddles_stay_on_the_field(
        seed in any::<u64>(),
        inputs in prop::collection::vec(tick_input(), 1..600),
    ) {
        let mut state = GameState::new(seed);
        for input in &inputs {
            tick(&mut state, input);
            for side in [Side::Player, Side::Computer] {
                let y = state.paddle(side).y;
                prop_assert!((0.0..=CANVAS_HEIGHT - PADDLE_HEIGHT).contains(&y), "{:?} at {}", side, y);
            }
        }
    }

    #[test]
    fn ball_speed_never_exceeds_cap(
        seed in any::<u64>(),
        inputs in prop::collection::vec(tick_input(), 1..600),
    ) {
        let mut state = GameState::new(seed);
        for input in &inputs {
            tick(&mut state, input);
            prop_assert!(state.ball.speed() <= MAX_BALL_SPEED + 1e-3);
        }
    }

    #[test]
    fn serving_ball_is_pinned_and_still(
        seed in any::<u64>(),
        inputs in prop::collection::vec(tick_input(), 1..600),
    ) {
        let mut state = GameState::new(seed);
        for input in &inputs {
            tick(&mut state, input);
            if state.is_serving() {
                assert_pinned(&state);
            }
        }
    }

    #[test]
    fn trail_is_bounded_and_fades_with_age(
        seed in any::<u64>(),
        inputs in prop::collection::vec(tick_input(), 1..300),
    ) {
        let state = run(seed, &inputs);
        let points = state.trail.points();
        prop_assert!(points.len() <= TRAIL_LENGTH);
        for pair in points.windows(2) {
            prop_assert!(pair[0].opacity > pair[1].opacity);
        }
        for aged in points.iter().skip(1) {
            prop_assert!((0.0..1.0).contains(&aged.opacity));
        }
    }

    #[test]
    fn same_seed_and_inputs_replay_identically(
        seed in any::<u64>(),
        inputs in prop::collection::vec(tick_input(), 1..400),
    ) {
        let a = run(seed, &inputs);
        let b = run(seed, &inputs);
        prop_assert_eq!(a.ball, b.ball);
        prop_assert_eq!(a.score, b.score);
        prop_assert_eq!(a.player, b.player);
        prop_assert_eq!(a.computer, b.computer);
        prop_assert_eq!(a.rng, b.rng);
        prop_assert_eq!(a.trail, b.trail);
    }

    #[test]
    fn ball_past_left_edge_scores_for_computer(
        y in 0.0f32..(CANVAS_HEIGHT - BALL_SIZE),
        vy in -5.0f32..5.0,
    ) {
        let mut state = GameState::new(3);
        state.phase = GamePhase::Rallying;
        state.ball.pos = Vec2::new(2.0, y);
        state.ball.vel = Vec2::new(-5.0, vy);

        tick(&mut state, &TickInput::default());

        prop_assert_eq!(state.score.computer, 1);
        prop_assert_eq!(state.score.player, 0);
        prop_assert!(state.awaiting_player_serve());
        assert_pinned(&state);
    }

    #[test]
    fn ball_past_right_edge_scores_for_player(
        y in 0.0f32..(CANVAS_HEIGHT - BALL_SIZE),
    ) {
        let mut state = GameState::new(3);
        state.phase = GamePhase::Rallying;
        state.ball.pos = Vec2::new(CANVAS_WIDTH - 2.0, y);
        state.ball.vel = Vec2::new(5.0, 0.0);

        tick(&mut state, &TickInput::default());

        prop_assert_eq!(state.score.player, 1);
        prop_assert_eq!(state.server, Side::Computer);
        prop_assert_eq!(state.serve_countdown, AUTO_SERVE_DELAY_TICKS);
        assert_pinned(&state);
    }
}
