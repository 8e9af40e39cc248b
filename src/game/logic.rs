//! Game logic: activation handling, per-tick physics, collisions, and scoring.
//!
//! Everything here is a plain function over `&mut GameState`. Randomness is
//! passed in so tests can seed it.

use super::ticker::TickKind;
use super::types::{CollisionCause, GameState, Phase};
use crate::core::config::{GameConfig, RoundEnd};
use rand::Rng;

/// UI-agnostic input. Mouse clicks and the flap keys all map to `Activate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Activate,
}

/// What an activation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Idle → Running. The bird does not move on the starting activation.
    Started,
    Jumped { bird_top: i32 },
    /// AwaitingAck → Idle, with the frozen score moved to the leaderboard.
    Acknowledged { archived: u32 },
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Arrived while not running.
    Ignored,
    Moved,
    /// The obstacle wrapped around and a point was awarded.
    Scored { score: u32 },
    Collided { cause: CollisionCause, score: u32 },
}

/// Whether the timer for `kind` should be live.
pub fn tick_guard(state: &GameState, config: &GameConfig, kind: TickKind) -> bool {
    if !state.running {
        return false;
    }
    match kind {
        TickKind::Gravity => state.bird_top < config.floor(),
        TickKind::Obstacle => state.obstacle_left >= -config.obstacle_width,
    }
}

/// Apply an activation.
pub fn process_input(
    state: &mut GameState,
    config: &GameConfig,
    input: GameInput,
) -> InputOutcome {
    match input {
        GameInput::Activate => match state.phase() {
            Phase::Idle => {
                state.running = true;
                InputOutcome::Started
            }
            Phase::Running => {
                state.bird_top = (state.bird_top - config.jump_height).max(0);
                InputOutcome::Jumped {
                    bird_top: state.bird_top,
                }
            }
            Phase::AwaitingAck => {
                // Only archives; starting the next round takes another activation
                let archived = state.score;
                state.leaderboard.insert(archived);
                state.score = 0;
                state.round_ended = false;
                InputOutcome::Acknowledged { archived }
            }
        },
    }
}

/// Advance one tick.
///
/// Order is fixed: collision against the pre-tick state, then the wrap and
/// score check, then motion for `kind`. A collision ends the tick.
pub fn process_tick<R: Rng>(
    state: &mut GameState,
    config: &GameConfig,
    kind: TickKind,
    rng: &mut R,
) -> TickOutcome {
    if !state.running {
        return TickOutcome::Ignored;
    }

    if let Some(outcome) = settle(state, config, rng) {
        if matches!(outcome, TickOutcome::Collided { .. }) {
            return outcome;
        }
        // A wrap replaces this tick's obstacle step; gravity still applies
        if kind == TickKind::Gravity && tick_guard(state, config, kind) {
            apply_gravity(state, config);
        }
        return outcome;
    }

    if tick_guard(state, config, kind) {
        match kind {
            TickKind::Gravity => apply_gravity(state, config),
            TickKind::Obstacle => state.obstacle_left -= config.horizontal_speed,
        }
    }
    TickOutcome::Moved
}

/// Collision and wrap checks, without motion. `None` when neither fired.
fn settle<R: Rng>(
    state: &mut GameState,
    config: &GameConfig,
    rng: &mut R,
) -> Option<TickOutcome> {
    let was_running = state.running;

    if let Some(cause) = detect_collision(state, config) {
        let score = state.score;
        end_round(state, config, rng);
        return Some(TickOutcome::Collided { cause, score });
    }

    if state.obstacle_left < -config.obstacle_width {
        respawn_obstacle(state, config, rng);
        if was_running {
            state.score += 1;
        }
        return Some(TickOutcome::Scored { score: state.score });
    }

    None
}

/// Check the bird against the floor and the obstacle pair.
///
/// The obstacle only counts while its left edge is within `[0, obstacle_width]`.
/// The top segment is half-open (`bird_top < gap_top`) while the bottom band
/// stops short of the floor, which the floor rule covers on its own.
pub fn detect_collision(state: &GameState, config: &GameConfig) -> Option<CollisionCause> {
    let floor = config.floor();
    if state.bird_top >= floor {
        return Some(CollisionCause::Floor);
    }

    let overlaps_slot = state.obstacle_left >= 0 && state.obstacle_left <= config.obstacle_width;
    if !overlaps_slot {
        return None;
    }

    let bottom_edge = config.field_height - state.bottom_height(config) - config.bird_size;
    let hits_top = state.bird_top >= 0 && state.bird_top < state.gap_top;
    let hits_bottom = state.bird_top >= bottom_edge && state.bird_top < floor;
    if hits_top || hits_bottom {
        Some(CollisionCause::Obstacle)
    } else {
        None
    }
}

fn apply_gravity(state: &mut GameState, config: &GameConfig) {
    state.bird_top = state
        .bird_top
        .saturating_add(config.gravity)
        .min(config.floor());
}

fn respawn_obstacle<R: Rng>(state: &mut GameState, config: &GameConfig, rng: &mut R) {
    state.obstacle_left = config.obstacle_start();
    state.gap_top = rng.gen_range(0..config.max_gap_top());
}

fn end_round<R: Rng>(state: &mut GameState, config: &GameConfig, rng: &mut R) {
    state.running = false;
    state.bird_top = config.initial_bird_top;
    respawn_obstacle(state, config, rng);
    match state.round_end {
        RoundEnd::Reset => state.score = 0,
        RoundEnd::Acknowledge => state.round_ended = true,
    }
}
