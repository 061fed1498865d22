//! Agents: the shared `Agent` contract, the tabular Q-value store, a
//! random baseline, and the one-step TD agents (Q-learning and
//! Expected-Sarsa as configurations of a single TD agent).

mod agent;
mod qtable;
mod random;
mod td;

pub use agent::Agent;
pub use qtable::{ActionValue, QTable, QTableEntry};
pub use random::RandomAgent;
pub use td::{TdAgent, TdConfig, ValueEstimator};
