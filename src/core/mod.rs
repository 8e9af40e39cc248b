//! Configuration, constants, and error types shared by the game and the shell.

pub mod config;
pub mod constants;
pub mod error;

pub use config::{ConfigOverrides, GameConfig, Preset, RoundEnd};
pub use constants::*;
pub use error::{AppError, ConfigError};
