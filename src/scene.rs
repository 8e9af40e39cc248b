//! Projection of game state into renderable geometry.
//!
//! `project` is read-only and deterministic, so a renderer may call it as
//! often as it likes.

use crate::core::config::{GameConfig, RoundEnd};
use crate::core::constants::BIRD_LEFT;
use crate::game::types::{GameState, Phase};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirdSprite {
    pub left: i32,
    pub top: i32,
    pub size: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ObstacleRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based.
    pub rank: usize,
    pub score: u32,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scene {
    pub field_width: i32,
    pub field_height: i32,
    pub bird: BirdSprite,
    pub top_obstacle: ObstacleRect,
    pub bottom_obstacle: ObstacleRect,
    pub score: u32,
    pub phase: Phase,
    /// Present only when rounds end with an acknowledgment.
    pub leaderboard: Option<Vec<LeaderboardEntry>>,
}

pub fn project(state: &GameState, config: &GameConfig) -> Scene {
    let bottom_height = state.bottom_height(config);
    let leaderboard = match state.round_end {
        RoundEnd::Reset => None,
        RoundEnd::Acknowledge => Some(
            state
                .leaderboard
                .scores()
                .iter()
                .enumerate()
                .map(|(i, &score)| LeaderboardEntry {
                    rank: i + 1,
                    score,
                })
                .collect(),
        ),
    };

    Scene {
        field_width: config.field_width,
        field_height: config.field_height,
        bird: BirdSprite {
            left: BIRD_LEFT,
            top: state.bird_top,
            size: config.bird_size,
        },
        top_obstacle: ObstacleRect {
            left: state.obstacle_left,
            top: 0,
            width: config.obstacle_width,
            height: state.gap_top,
        },
        bottom_obstacle: ObstacleRect {
            left: state.obstacle_left,
            top: state.gap_top + config.gap_size,
            width: config.obstacle_width,
            height: bottom_height,
        },
        score: state.score,
        phase: state.phase(),
        leaderboard,
    }
}
