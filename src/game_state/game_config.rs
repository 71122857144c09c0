//! Game setup options: player names, clock budget and starting layout.
//!
//! Options are set by name, either directly through [`GameConfig::set_option`]
//! or from `CHESS_MODEL_*` environment variables via [`GameConfig::from_env`].

use std::path::PathBuf;

use chrono::Duration;

use crate::errors::ConfigError;
use crate::utils::board_layout::LoadMode;

pub const OPTION_WHITE: &str = "white";
pub const OPTION_BLACK: &str = "black";
pub const OPTION_CLOCK_SECS: &str = "clock_secs";
pub const OPTION_LAYOUT: &str = "layout";
pub const OPTION_STRICT: &str = "strict";

/// `(option name, environment variable)` pairs read by `from_env`.
pub const ENV_OPTIONS: [(&str, &str); 5] = [
    (OPTION_WHITE, "CHESS_MODEL_WHITE"),
    (OPTION_BLACK, "CHESS_MODEL_BLACK"),
    (OPTION_CLOCK_SECS, "CHESS_MODEL_CLOCK_SECS"),
    (OPTION_LAYOUT, "CHESS_MODEL_LAYOUT"),
    (OPTION_STRICT, "CHESS_MODEL_STRICT"),
];

const DEFAULT_CLOCK_SECS: i64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub white_name: String,
    pub black_name: String,
    pub starting_time: Duration,
    /// Layout file to start from; `None` means the standard position.
    pub layout_path: Option<PathBuf>,
    pub load_mode: LoadMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            white_name: "White".to_owned(),
            black_name: "Black".to_owned(),
            starting_time: Duration::seconds(DEFAULT_CLOCK_SECS),
            layout_path: None,
            load_mode: LoadMode::Lenient,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by any `CHESS_MODEL_*` variables that are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        for (option, variable) in ENV_OPTIONS {
            if let Some(value) = lookup(variable) {
                config.set_option(option, &value)?;
            }
        }
        Ok(config)
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            name: name.to_owned(),
            value: value.to_owned(),
        };

        match name.trim().to_ascii_lowercase().as_str() {
            OPTION_WHITE => self.white_name = non_empty(value).ok_or_else(invalid)?,
            OPTION_BLACK => self.black_name = non_empty(value).ok_or_else(invalid)?,
            OPTION_CLOCK_SECS => {
                let secs = value.trim().parse::<i64>().map_err(|_| invalid())?;
                if secs < 0 {
                    return Err(invalid());
                }
                self.starting_time = Duration::try_seconds(secs).ok_or_else(invalid)?;
            }
            OPTION_LAYOUT => {
                self.layout_path = non_empty(value).map(PathBuf::from);
            }
            OPTION_STRICT => {
                self.load_mode = match value.trim().to_ascii_lowercase().as_str() {
                    "1" | "true" | "yes" | "on" => LoadMode::Strict,
                    "0" | "false" | "no" | "off" => LoadMode::Lenient,
                    _ => return Err(invalid()),
                };
            }
            _ => return Err(ConfigError::UnknownOption(name.to_owned())),
        }
        Ok(())
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.starting_time, Duration::seconds(60));
        assert_eq!(config.load_mode, LoadMode::Lenient);
        assert!(config.layout_path.is_none());
    }

    #[test]
    fn options_by_name() {
        let mut config = GameConfig::default();
        config.set_option("White", "harry").expect("valid option");
        config.set_option("black", " chat ").expect("valid option");
        config.set_option("clock_secs", "300").expect("valid option");
        config.set_option("strict", "yes").expect("valid option");
        config.set_option("layout", "boards/default_board.txt").expect("valid option");

        assert_eq!(config.white_name, "harry");
        assert_eq!(config.black_name, "chat");
        assert_eq!(config.starting_time, Duration::seconds(300));
        assert_eq!(config.load_mode, LoadMode::Strict);
        assert_eq!(config.layout_path, Some(PathBuf::from("boards/default_board.txt")));
    }

    #[test]
    fn bad_options_are_rejected() {
        let mut config = GameConfig::default();
        assert_eq!(
            config.set_option("colour", "red"),
            Err(ConfigError::UnknownOption("colour".to_owned()))
        );
        assert!(matches!(
            config.set_option("clock_secs", "-4"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set_option("strict", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set_option("white", "   "),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn lookup_applies_only_present_variables() {
        let config = GameConfig::from_lookup(|key| match key {
            "CHESS_MODEL_BLACK" => Some("chat".to_owned()),
            "CHESS_MODEL_CLOCK_SECS" => Some("90".to_owned()),
            _ => None,
        })
        .expect("lookup should apply");
        assert_eq!(config.white_name, "White");
        assert_eq!(config.black_name, "chat");
        assert_eq!(config.starting_time, Duration::seconds(90));
    }
}
