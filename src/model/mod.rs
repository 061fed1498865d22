//! Model persistence: a trained agent's Q-table plus its hyperparameters,
//! saved as a single JSON file.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::ai::{Agent, QTable, TdAgent, TdConfig, ValueEstimator};
use crate::error::ModelError;

const ALGORITHM_Q_LEARNING: &str = "q_learning";
const ALGORITHM_EXPECTED_SARSA: &str = "expected_sarsa";

/// Metadata stored alongside the Q-table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub algorithm: String,
    pub alpha: f64,
    pub epsilon: f64,
    pub discount: f64,
    pub episodes_trained: usize,
    pub timestamp: u64,
    pub version: String,
}

/// A persisted model: everything needed to reconstruct a playing agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelFile {
    pub metadata: ModelMetadata,
    pub qtable: QTable,
}

impl ModelFile {
    /// Snapshot a trained TD agent.
    pub fn from_agent(agent: &TdAgent, episodes_trained: usize) -> Self {
        let algorithm = match agent.estimator() {
            ValueEstimator::MaxQ => ALGORITHM_Q_LEARNING,
            ValueEstimator::EpsilonGreedyExpectation => ALGORITHM_EXPECTED_SARSA,
        };
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        ModelFile {
            metadata: ModelMetadata {
                algorithm: algorithm.to_string(),
                alpha: agent.alpha(),
                epsilon: agent.epsilon(),
                discount: agent.discount(),
                episodes_trained,
                timestamp,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            qtable: agent.snapshot(),
        }
    }

    /// Rebuild a TD agent from this model. The agent comes up with
    /// learning mode off, ready for evaluation play.
    pub fn into_agent(self) -> Result<TdAgent, ModelError> {
        let config = TdConfig {
            alpha: self.metadata.alpha,
            epsilon: self.metadata.epsilon,
            discount: self.metadata.discount,
        };
        let mut agent = match self.metadata.algorithm.as_str() {
            ALGORITHM_Q_LEARNING => TdAgent::q_learning(config),
            ALGORITHM_EXPECTED_SARSA => TdAgent::expected_sarsa(config),
            other => return Err(ModelError::UnknownAlgorithm(other.to_string())),
        };
        agent.load_table(self.qtable);
        agent.learning_mode_off();
        Ok(agent)
    }

    /// Write to `path` atomically (tmp file + rename).
    pub fn save(&self, path: &Path) -> Result<(), ModelError> {
        let json = serde_json::to_string_pretty(self)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "model".to_string());
        let tmp = path.with_file_name(format!("{}.tmp", file_name));
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Load from `path`. Malformed files are fatal; there is no partial
    /// recovery.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let json = fs::read_to_string(path).map_err(|e| ModelError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&json).map_err(|e| ModelError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
