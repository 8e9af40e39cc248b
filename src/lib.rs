//! Flapper - a one-button gap-threading reflex game.
//!
//! The library holds the game model, the tick source, and the scene
//! projection so they can be tested without a terminal.

pub mod build_info;
pub mod cli;
pub mod core;
pub mod game;
pub mod input;
pub mod scene;
pub mod ui;
pub mod utils;

pub use crate::core::config::{GameConfig, Preset, RoundEnd};
pub use crate::core::constants::*;
pub use crate::core::error::{AppError, ConfigError};
pub use game::{GameState, Phase, Session, TickKind};
pub use scene::{project, Scene};
