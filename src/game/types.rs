//! Game state data structures.

use crate::core::config::{GameConfig, RoundEnd};
use serde::Serialize;

/// Where the state machine currently sits. Derived from the state flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Waiting for the first activation of a round.
    Idle,
    /// Ticks are flowing.
    Running,
    /// A round just ended; the next activation archives the score.
    AwaitingAck,
}

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CollisionCause {
    Floor,
    Obstacle,
}

/// Past round scores, highest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Leaderboard {
    scores: Vec<u32>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a completed round score, keeping the list in descending order.
    pub fn insert(&mut self, score: u32) {
        // Place after any equal scores so earlier rounds keep their rank
        let idx = self.scores.partition_point(|&s| s >= score);
        self.scores.insert(idx, score);
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn best(&self) -> Option<u32> {
        self.scores.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// The single mutable aggregate for a play session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Top edge of the bird, pixels from the top of the field.
    pub bird_top: i32,
    pub running: bool,
    /// Height of the top obstacle segment.
    pub gap_top: i32,
    /// Left edge of the obstacle pair. Goes negative as it leaves the field.
    pub obstacle_left: i32,
    /// Obstacles cleared this round.
    pub score: u32,
    pub leaderboard: Leaderboard,
    /// Set between a collision and its acknowledgment (acknowledge mode only).
    pub round_ended: bool,
    pub round_end: RoundEnd,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            bird_top: config.initial_bird_top,
            running: false,
            gap_top: config.initial_gap_top,
            obstacle_left: config.obstacle_start(),
            score: 0,
            leaderboard: Leaderboard::new(),
            round_ended: false,
            round_end: config.round_end,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.running {
            Phase::Running
        } else if self.round_ended {
            Phase::AwaitingAck
        } else {
            Phase::Idle
        }
    }

    pub fn bottom_height(&self, config: &GameConfig) -> i32 {
        config.bottom_height(self.gap_top)
    }
}
