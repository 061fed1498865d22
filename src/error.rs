use std::path::PathBuf;

/// Errors that can occur when saving or loading a persisted model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read model from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse model from {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("unknown algorithm '{0}' in model metadata")]
    UnknownAlgorithm(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_error_display() {
        let err = ModelError::UnknownAlgorithm("sarsa9000".to_string());
        assert_eq!(
            err.to_string(),
            "unknown algorithm 'sarsa9000' in model metadata"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("q.alpha must be in [0, 1]".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: q.alpha must be in [0, 1]"
        );
    }
}
