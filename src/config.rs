use crate::consts;
use crate::options::Difficulty;
use ratatui::style::Style;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Difficulty selected when the program starts
    #[serde(default)]
    pub(crate) difficulty: Difficulty,

    /// Overrides for the board's default styles
    #[serde(default)]
    pub(crate) styles: StyleConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("ratduel").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// Style overrides read from the `[styles]` table, given as strings like
/// `"bold green"` or `"red on white"`
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct StyleConfig {
    #[serde(default)]
    player: Option<parse_style::Style>,

    #[serde(default)]
    enemy: Option<parse_style::Style>,

    #[serde(default)]
    food: Option<parse_style::Style>,

    #[serde(default)]
    obstacle: Option<parse_style::Style>,
}

impl StyleConfig {
    /// Resolve the overrides against the default styles
    pub(crate) fn to_theme(&self) -> Theme {
        let defaults = Theme::default();
        Theme {
            player: resolve(self.player.as_ref(), defaults.player),
            enemy: resolve(self.enemy.as_ref(), defaults.enemy),
            food: resolve(self.food.as_ref(), defaults.food),
            obstacle: resolve(self.obstacle.as_ref(), defaults.obstacle),
        }
    }
}

fn resolve(custom: Option<&parse_style::Style>, default: Style) -> Style {
    custom.map_or(default, |s| Style::from(s.clone()))
}

/// The styles used to draw the board's contents
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Theme {
    pub(crate) player: Style,
    pub(crate) enemy: Style,
    pub(crate) food: Style,
    pub(crate) obstacle: Style,
}

impl Default for Theme {
    fn default() -> Theme {
        Theme {
            player: consts::PLAYER_STYLE,
            enemy: consts::ENEMY_STYLE,
            food: consts::FOOD_STYLE,
            obstacle: consts::OBSTACLE_STYLE,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
