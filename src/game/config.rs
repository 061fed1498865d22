use serde::{Deserialize, Serialize};

/// Configuration for the greedy chocolate game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of chocolate boxes.
    pub sections: usize,
    /// Minimum starting chocolates per box (inclusive).
    pub min_chocolate: u32,
    /// Maximum starting chocolates per box (inclusive).
    pub max_chocolate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            sections: 3,
            min_chocolate: 3,
            max_chocolate: 20,
        }
    }
}

impl GameConfig {
    pub fn new(sections: usize, min_chocolate: u32, max_chocolate: u32) -> Self {
        GameConfig {
            sections,
            min_chocolate,
            max_chocolate,
        }
    }

    /// A single box holding exactly one chocolate. Every game from this
    /// setup is a forced line, which makes tests deterministic.
    pub fn tiny() -> Self {
        Self::new(1, 1, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let config = GameConfig::default();
        assert_eq!(config.sections, 3);
        assert!(config.min_chocolate <= config.max_chocolate);
    }

    #[test]
    fn test_tiny() {
        let config = GameConfig::tiny();
        assert_eq!(config.sections, 1);
        assert_eq!(config.min_chocolate, 1);
        assert_eq!(config.max_chocolate, 1);
    }
}
