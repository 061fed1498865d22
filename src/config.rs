use std::path::Path;

use crate::ai::TdConfig;
use crate::error::ConfigError;
use crate::game::GameConfig;
use crate::training::TrainerConfig;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub q: TdConfig,
    pub expected_sarsa: TdConfig,
    pub training: TrainerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            game: GameConfig::default(),
            q: TdConfig::default(),
            expected_sarsa: TdConfig {
                epsilon: 0.2,
                ..TdConfig::default()
            },
            training: TrainerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.sections == 0 {
            return Err(ConfigError::Validation("game.sections must be > 0".into()));
        }
        if self.game.min_chocolate == 0 {
            return Err(ConfigError::Validation(
                "game.min_chocolate must be > 0".into(),
            ));
        }
        if self.game.min_chocolate > self.game.max_chocolate {
            return Err(ConfigError::Validation(
                "game.min_chocolate must be <= game.max_chocolate".into(),
            ));
        }

        validate_td("q", &self.q)?;
        validate_td("expected_sarsa", &self.expected_sarsa)?;

        if self.training.n_games == 0 {
            return Err(ConfigError::Validation(
                "training.n_games must be > 0".into(),
            ));
        }
        if self.training.iterations == 0 {
            return Err(ConfigError::Validation(
                "training.iterations must be > 0".into(),
            ));
        }

        Ok(())
    }
}

fn validate_td(section: &str, config: &TdConfig) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&config.alpha) {
        return Err(ConfigError::Validation(format!(
            "{section}.alpha must be in [0, 1]"
        )));
    }
    if !(0.0..=1.0).contains(&config.epsilon) {
        return Err(ConfigError::Validation(format!(
            "{section}.epsilon must be in [0, 1]"
        )));
    }
    if !(0.0..=1.0).contains(&config.discount) {
        return Err(ConfigError::Validation(format!(
            "{section}.discount must be in [0, 1]"
        )));
    }
    Ok(())
}
