//! Command-line parsing.

use crate::core::config::{Preset, RoundEnd};
use crate::core::error::AppError;
use std::path::PathBuf;

pub const HELP: &str = "\
Flapper - thread the gaps, one click at a time

Usage: flapper [options]

Options:
  --preset <classic|big>       Parameter profile (default: classic)
  --mode <reset|acknowledge>   How a crashed round ends
  --config <path>              Read overrides from this JSON file
  --version                    Show version information
  --help                       Show this help message

Controls: left click, Space, Enter or Up to flap; q or Esc to quit.
Set RUST_LOG to change log verbosity.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub preset: Option<Preset>,
    pub round_end: Option<RoundEnd>,
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Run(CliArgs),
    Version,
    Help,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<CliAction, AppError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(CliAction::Version),
            "--help" | "-h" => return Ok(CliAction::Help),
            "--preset" => {
                let name = args.next().ok_or(AppError::MissingValue("--preset"))?;
                let preset = Preset::from_name(&name)
                    .ok_or_else(|| AppError::UnknownArgument(format!("--preset {name}")))?;
                parsed.preset = Some(preset);
            }
            "--mode" => {
                let name = args.next().ok_or(AppError::MissingValue("--mode"))?;
                let mode = RoundEnd::from_name(&name)
                    .ok_or_else(|| AppError::UnknownArgument(format!("--mode {name}")))?;
                parsed.round_end = Some(mode);
            }
            "--config" => {
                let path = args.next().ok_or(AppError::MissingValue("--config"))?;
                parsed.config_path = Some(PathBuf::from(path));
            }
            other => return Err(AppError::UnknownArgument(other.to_string())),
        }
    }

    Ok(CliAction::Run(parsed))
}
