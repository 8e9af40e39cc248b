//! Game parameters: presets, JSON overrides, and startup validation.

use super::constants::*;
use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What happens when a round ends in a collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundEnd {
    /// Score clears immediately and the game drops straight back to idle.
    Reset,
    /// Score freezes until the next activation, which archives it to the leaderboard.
    Acknowledge,
}

impl RoundEnd {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "reset" => Some(Self::Reset),
            "acknowledge" | "ack" => Some(Self::Acknowledge),
            _ => None,
        }
    }
}

/// Built-in parameter profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Small bird, heavier gravity, instant reset.
    Classic,
    /// Large bird, lighter gravity, leaderboard with acknowledgment.
    Big,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Classic, Preset::Big];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Big => "big",
        }
    }

    pub fn bird_size(&self) -> i32 {
        match self {
            Self::Classic => BIRD_SIZE,
            Self::Big => BIG_BIRD_SIZE,
        }
    }

    pub fn gravity(&self) -> i32 {
        match self {
            Self::Classic => GRAVITY,
            Self::Big => BIG_BIRD_GRAVITY,
        }
    }

    pub fn round_end(&self) -> RoundEnd {
        match self {
            Self::Classic => RoundEnd::Reset,
            Self::Big => RoundEnd::Acknowledge,
        }
    }

    pub fn config(&self) -> GameConfig {
        GameConfig {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            bird_size: self.bird_size(),
            gravity: self.gravity(),
            jump_height: JUMP_HEIGHT,
            obstacle_width: OBSTACLE_WIDTH,
            gap_size: OBSTACLE_GAP,
            horizontal_speed: HORIZONTAL_SPEED,
            tick_interval_ms: TICK_INTERVAL_MS,
            initial_bird_top: INITIAL_BIRD_TOP,
            initial_gap_top: INITIAL_GAP_TOP,
            round_end: self.round_end(),
        }
    }
}

/// Fixed parameters for one game session. Immutable once the game starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub field_width: i32,
    pub field_height: i32,
    pub bird_size: i32,
    /// Pixels fallen per gravity tick.
    pub gravity: i32,
    /// Pixels risen per activation.
    pub jump_height: i32,
    pub obstacle_width: i32,
    pub gap_size: i32,
    /// Pixels scrolled left per obstacle tick.
    pub horizontal_speed: i32,
    pub tick_interval_ms: u64,
    pub initial_bird_top: i32,
    pub initial_gap_top: i32,
    pub round_end: RoundEnd,
}

impl Default for GameConfig {
    fn default() -> Self {
        Preset::Classic.config()
    }
}

impl GameConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Bird top at which the floor collision fires.
    pub fn floor(&self) -> i32 {
        self.field_height - self.bird_size
    }

    /// Where the obstacle pair re-enters after scrolling off the left edge.
    pub fn obstacle_start(&self) -> i32 {
        self.field_width - self.obstacle_width
    }

    /// Exclusive upper bound for a freshly drawn gap top.
    pub fn max_gap_top(&self) -> i32 {
        self.field_height - self.gap_size
    }

    pub fn bottom_height(&self, gap_top: i32) -> i32 {
        self.field_height - self.gap_size - gap_top
    }

    /// Reject parameter sets that admit no valid obstacle layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives: [(&'static str, i64); 9] = [
            ("field_width", self.field_width.into()),
            ("field_height", self.field_height.into()),
            ("bird_size", self.bird_size.into()),
            ("gravity", self.gravity.into()),
            ("jump_height", self.jump_height.into()),
            ("obstacle_width", self.obstacle_width.into()),
            ("gap_size", self.gap_size.into()),
            ("horizontal_speed", self.horizontal_speed.into()),
            (
                "tick_interval_ms",
                i64::try_from(self.tick_interval_ms).unwrap_or(i64::MAX),
            ),
        ];
        if let Some((field, value)) = positives.into_iter().find(|(_, v)| *v <= 0) {
            return Err(ConfigError::NotPositive { field, value });
        }

        if self.gap_size >= self.field_height {
            return Err(ConfigError::GapExceedsField {
                gap_size: self.gap_size,
                field_height: self.field_height,
            });
        }
        if self.bird_size >= self.field_height {
            return Err(ConfigError::BirdExceedsField {
                bird_size: self.bird_size,
                field_height: self.field_height,
            });
        }
        if self.obstacle_width >= self.field_width {
            return Err(ConfigError::ObstacleExceedsField {
                obstacle_width: self.obstacle_width,
                field_width: self.field_width,
            });
        }

        // One step may not exceed the axis it moves along
        let vertical_max = self.field_height.saturating_add(1);
        check_range("gravity", self.gravity, 1, vertical_max)?;
        check_range("jump_height", self.jump_height, 1, vertical_max)?;
        check_range(
            "horizontal_speed",
            self.horizontal_speed,
            1,
            self.field_width.saturating_add(1),
        )?;

        // The bird must not spawn already touching the floor
        check_range("initial_bird_top", self.initial_bird_top, 0, self.floor())?;
        check_range(
            "initial_gap_top",
            self.initial_gap_top,
            0,
            self.max_gap_top(),
        )?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: i32, min: i32, max: i32) -> Result<(), ConfigError> {
    if value < min || value >= max {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Partial overrides read from `config.json`. Absent keys keep the preset value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub preset: Option<Preset>,
    pub field_width: Option<i32>,
    pub field_height: Option<i32>,
    pub bird_size: Option<i32>,
    pub gravity: Option<i32>,
    pub jump_height: Option<i32>,
    pub obstacle_width: Option<i32>,
    pub gap_size: Option<i32>,
    pub horizontal_speed: Option<i32>,
    pub tick_interval_ms: Option<u64>,
    pub initial_bird_top: Option<i32>,
    pub initial_gap_top: Option<i32>,
    pub round_end: Option<RoundEnd>,
}

impl ConfigOverrides {
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(if let Some(v) = self.$field { config.$field = v; })*
            };
        }
        take!(
            field_width,
            field_height,
            bird_size,
            gravity,
            jump_height,
            obstacle_width,
            gap_size,
            horizontal_speed,
            tick_interval_ms,
            initial_bird_top,
            initial_gap_top,
            round_end,
        );
        config
    }
}

/// Layer a preset, file overrides, and command-line choices, then validate.
///
/// A preset named on the command line beats one named in the file; an explicit
/// `round_end` on the command line beats everything.
pub fn resolve(
    cli_preset: Option<Preset>,
    file: &ConfigOverrides,
    cli_round_end: Option<RoundEnd>,
) -> Result<GameConfig, ConfigError> {
    let preset = cli_preset.or(file.preset).unwrap_or(Preset::Classic);
    let mut config = file.apply(preset.config());
    if let Some(round_end) = cli_round_end {
        config.round_end = round_end;
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for preset in Preset::ALL {
            assert_eq!(preset.config().validate(), Ok(()), "{}", preset.name());
        }
    }

    #[test]
    fn test_preset_parameters() {
        let classic = Preset::Classic.config();
        assert_eq!(classic.bird_size, 20);
        assert_eq!(classic.gravity, 8);
        assert_eq!(classic.round_end, RoundEnd::Reset);

        let big = Preset::Big.config();
        assert_eq!(big.bird_size, 50);
        assert_eq!(big.gravity, 6);
        assert_eq!(big.round_end, RoundEnd::Acknowledge);
    }

    #[test]
    fn test_preset_from_name() {
        assert_eq!(Preset::from_name("classic"), Some(Preset::Classic));
        assert_eq!(Preset::from_name("BIG"), Some(Preset::Big));
        assert_eq!(Preset::from_name("huge"), None);
    }

    #[test]
    fn test_round_end_from_name() {
        assert_eq!(RoundEnd::from_name("reset"), Some(RoundEnd::Reset));
        assert_eq!(RoundEnd::from_name("ack"), Some(RoundEnd::Acknowledge));
        assert_eq!(RoundEnd::from_name("never"), None);
    }

    #[test]
    fn test_derived_geometry() {
        let config = GameConfig::default();
        assert_eq!(config.floor(), 480);
        assert_eq!(config.obstacle_start(), 450);
        assert_eq!(config.max_gap_top(), 350);
        assert_eq!(config.bottom_height(50), 300);
        assert_eq!(config.tick_interval(), Duration::from_millis(24));
    }

    #[test]
    fn test_gap_filling_field_is_rejected() {
        let config = GameConfig {
            gap_size: 500,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::GapExceedsField {
                gap_size: 500,
                field_height: 500
            })
        );
    }

    #[test]
    fn test_non_positive_values_are_rejected() {
        let config = GameConfig {
            horizontal_speed: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "horizontal_speed",
                value: 0
            })
        );

        let config = GameConfig {
            tick_interval_ms: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "tick_interval_ms",
                ..
            })
        ));
    }

    #[test]
    fn test_oversized_bird_and_obstacle_rejected() {
        let config = GameConfig {
            bird_size: 500,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BirdExceedsField { .. })
        ));

        let config = GameConfig {
            obstacle_width: 600,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ObstacleExceedsField { .. })
        ));
    }

    #[test]
    fn test_oversized_steps_rejected() {
        let config = GameConfig {
            gravity: i32::MAX,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                field: "gravity",
                value: i32::MAX,
                min: 1,
                max: 501
            })
        );

        let config = GameConfig {
            jump_height: 501,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                field: "jump_height",
                ..
            })
        ));

        let config = GameConfig {
            horizontal_speed: 1000,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                field: "horizontal_speed",
                ..
            })
        ));

        // A step as large as the field is still playable
        let config = GameConfig {
            gravity: 500,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_initial_positions_checked() {
        let config = GameConfig {
            initial_bird_top: 480,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                field: "initial_bird_top",
                value: 480,
                min: 0,
                max: 480
            })
        );

        let config = GameConfig {
            initial_gap_top: 350,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                field: "initial_gap_top",
                ..
            })
        ));
    }

    #[test]
    fn test_overrides_parse_partial_json() {
        let overrides: ConfigOverrides =
            serde_json::from_str(r#"{ "gravity": 4, "round_end": "acknowledge" }"#).unwrap();
        let config = overrides.apply(Preset::Classic.config());
        assert_eq!(config.gravity, 4);
        assert_eq!(config.round_end, RoundEnd::Acknowledge);
        assert_eq!(config.bird_size, 20);
    }

    #[test]
    fn test_overrides_reject_unknown_keys() {
        let parsed = serde_json::from_str::<ConfigOverrides>(r#"{ "difficulty": "hard" }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_resolve_precedence() {
        let file = ConfigOverrides {
            preset: Some(Preset::Big),
            jump_height: Some(40),
            ..ConfigOverrides::default()
        };

        // File preset applies when the command line is silent
        let config = resolve(None, &file, None).unwrap();
        assert_eq!(config.bird_size, 50);
        assert_eq!(config.jump_height, 40);
        assert_eq!(config.round_end, RoundEnd::Acknowledge);

        // Command line wins on both preset and round end
        let config = resolve(Some(Preset::Classic), &file, Some(RoundEnd::Reset)).unwrap();
        assert_eq!(config.bird_size, 20);
        assert_eq!(config.jump_height, 40);
        assert_eq!(config.round_end, RoundEnd::Reset);
    }

    #[test]
    fn test_resolve_validates() {
        let file = ConfigOverrides {
            gap_size: Some(700),
            ..ConfigOverrides::default()
        };
        assert!(matches!(
            resolve(None, &file, None),
            Err(ConfigError::GapExceedsField { .. })
        ));
    }
}
