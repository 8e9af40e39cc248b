//! Error types.
//!
//! Gameplay itself has no failure modes: a collision is a state transition,
//! not an error. Everything here happens before the first tick.

use std::io;
use thiserror::Error;

/// A configuration that admits no valid game layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: i64 },

    #[error("gap size {gap_size} leaves no room for an obstacle in a field {field_height} high")]
    GapExceedsField { gap_size: i32, field_height: i32 },

    #[error("bird size {bird_size} does not fit in a field {field_height} high")]
    BirdExceedsField { bird_size: i32, field_height: i32 },

    #[error("obstacle width {obstacle_width} does not fit in a field {field_width} wide")]
    ObstacleExceedsField {
        obstacle_width: i32,
        field_width: i32,
    },

    #[error("{field} = {value} is outside the valid range [{min}, {max})")]
    OutOfRange {
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
}

/// Anything that can stop the game from launching.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("could not parse config file: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    #[error("missing value for {0}")]
    MissingValue(&'static str),
}
