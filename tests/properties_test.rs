//! Integration test: randomized properties of the game rules
//!
//! Seeded loops over the tick and input functions. Each test draws its
//! inputs from a fixed ChaCha seed so failures reproduce.

use flapper::game::logic::{
    detect_collision, process_input, process_tick, GameInput, InputOutcome, TickOutcome,
};
use flapper::game::types::Leaderboard;
use flapper::{project, ConfigError, GameConfig, GameState, Preset, RoundEnd, TickKind};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn running(config: &GameConfig) -> GameState {
    let mut state = GameState::new(config);
    state.running = true;
    state
}

#[test]
fn test_gravity_never_lifts_the_bird() {
    let mut rng = ChaCha8Rng::seed_from_u64(101);
    for preset in Preset::ALL {
        let config = preset.config();
        for _ in 0..500 {
            let mut state = running(&config);
            state.bird_top = rng.gen_range(0..config.floor());
            // Keep the obstacle out of the slot so only gravity acts
            state.obstacle_left = config.obstacle_start();
            let before = state.bird_top;

            let outcome = process_tick(&mut state, &config, TickKind::Gravity, &mut rng);
            assert_eq!(outcome, TickOutcome::Moved);
            assert!(state.bird_top >= before);
            assert_eq!(state.bird_top, (before + config.gravity).min(config.floor()));
        }
    }
}

#[test]
fn test_jump_is_clamped_at_ceiling() {
    let mut rng = ChaCha8Rng::seed_from_u64(102);
    for _ in 0..500 {
        let mut config = GameConfig::default();
        config.jump_height = rng.gen_range(1..=200);
        let mut state = running(&config);
        let before = rng.gen_range(0..config.floor());
        state.bird_top = before;

        let outcome = process_input(&mut state, &config, GameInput::Activate);
        let expected = (before - config.jump_height).max(0);
        assert_eq!(outcome, InputOutcome::Jumped { bird_top: expected });
        assert_eq!(state.bird_top, expected);
        assert!(state.bird_top >= 0);
    }
}

#[test]
fn test_wraparound_respawns_within_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(103);
    let config = GameConfig::default();
    for _ in 0..500 {
        let mut state = running(&config);
        state.obstacle_left = -config.obstacle_width - rng.gen_range(1..=config.horizontal_speed);
        state.bird_top = config.initial_bird_top;

        let outcome = process_tick(&mut state, &config, TickKind::Obstacle, &mut rng);
        assert_eq!(outcome, TickOutcome::Scored { score: 1 });
        assert_eq!(state.obstacle_left, config.obstacle_start());
        assert!(state.gap_top >= 0);
        assert!(state.gap_top < config.max_gap_top());
        assert!(state.gap_top + config.gap_size < config.field_height);
    }
}

#[test]
fn test_score_counts_each_wrap_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(104);
    let config = GameConfig::default();
    let mut state = running(&config);

    let mut wraps = 0;
    for _ in 0..2000 {
        // Hold the bird inside the gap; only the obstacle moves
        state.bird_top = state.gap_top + 10;
        let before = state.score;
        match process_tick(&mut state, &config, TickKind::Obstacle, &mut rng) {
            TickOutcome::Scored { score } => {
                wraps += 1;
                assert_eq!(score, before + 1);
            }
            TickOutcome::Moved => assert_eq!(state.score, before),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    // 101 steps from the right edge past the left, then the wrap tick
    assert_eq!(state.score, wraps);
    assert_eq!(wraps, 2000 / 102);
}

#[test]
fn test_idle_ticks_change_nothing() {
    let mut rng = ChaCha8Rng::seed_from_u64(105);
    let config = GameConfig::default();
    let mut state = GameState::new(&config);
    state.obstacle_left = -config.obstacle_width - 1;
    let frozen = state.clone();

    for _ in 0..100 {
        let kind = if rng.gen_bool(0.5) {
            TickKind::Gravity
        } else {
            TickKind::Obstacle
        };
        assert_eq!(
            process_tick(&mut state, &config, kind, &mut rng),
            TickOutcome::Ignored
        );
    }
    assert_eq!(state, frozen);
}

#[test]
fn test_no_collision_inside_gap_band() {
    let mut rng = ChaCha8Rng::seed_from_u64(106);
    for preset in Preset::ALL {
        let config = preset.config();
        for _ in 0..1000 {
            let mut state = running(&config);
            state.gap_top = rng.gen_range(0..config.max_gap_top());
            state.obstacle_left = rng.gen_range(0..=config.obstacle_width);
            let band_end = state.gap_top + config.gap_size - config.bird_size;
            state.bird_top = rng.gen_range(state.gap_top..band_end);

            assert_eq!(detect_collision(&state, &config), None);
        }
    }
}

#[test]
fn test_obstacle_outside_slot_never_collides() {
    let mut rng = ChaCha8Rng::seed_from_u64(107);
    let config = GameConfig::default();
    for _ in 0..1000 {
        let mut state = running(&config);
        state.gap_top = rng.gen_range(0..config.max_gap_top());
        state.obstacle_left = if rng.gen_bool(0.5) {
            rng.gen_range(config.obstacle_width + 1..=config.obstacle_start())
        } else {
            rng.gen_range(-config.obstacle_width..0)
        };
        state.bird_top = rng.gen_range(0..config.floor());

        assert_eq!(detect_collision(&state, &config), None);
    }
}

#[test]
fn test_leaderboard_stays_sorted() {
    let mut rng = ChaCha8Rng::seed_from_u64(108);
    let mut board = Leaderboard::new();
    let mut inserted = Vec::new();
    for _ in 0..300 {
        let score = rng.gen_range(0..40);
        board.insert(score);
        inserted.push(score);

        assert!(board.scores().windows(2).all(|w| w[0] >= w[1]));
    }
    inserted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(board.scores(), inserted.as_slice());
    assert_eq!(board.best(), inserted.first().copied());
}

#[test]
fn test_validation_rejects_oversized_gap() {
    let mut rng = ChaCha8Rng::seed_from_u64(109);
    for _ in 0..200 {
        let mut config = GameConfig::default();
        config.gap_size = rng.gen_range(config.field_height..config.field_height * 3);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GapExceedsField { .. })
        ));
    }
}

#[test]
fn test_projection_is_pure() {
    let mut rng = ChaCha8Rng::seed_from_u64(110);
    let mut config = Preset::Big.config();
    config.round_end = RoundEnd::Acknowledge;
    let mut state = running(&config);

    for _ in 0..500 {
        if rng.gen_bool(0.2) {
            process_input(&mut state, &config, GameInput::Activate);
        }
        let kind = if rng.gen_bool(0.5) {
            TickKind::Gravity
        } else {
            TickKind::Obstacle
        };
        process_tick(&mut state, &config, kind, &mut rng);

        let before = state.clone();
        let first = project(&state, &config);
        let second = project(&state, &config);
        assert_eq!(first, second);
        assert_eq!(state, before);
        assert_eq!(first.phase, state.phase());
        assert_eq!(first.bird.top, state.bird_top);
        assert_eq!(
            first.top_obstacle.height + config.gap_size + first.bottom_obstacle.height,
            config.field_height
        );
        assert_eq!(first.score, state.score);
    }
}
