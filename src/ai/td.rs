use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::game::{possible_actions, Action};

use super::agent::Agent;
use super::QTable;

/// Hyperparameters for a one-step TD agent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TdConfig {
    /// Learning rate, in [0, 1].
    pub alpha: f64,
    /// Exploration rate, in [0, 1].
    pub epsilon: f64,
    /// Discount factor, in [0, 1].
    pub discount: f64,
}

impl Default for TdConfig {
    fn default() -> Self {
        TdConfig {
            alpha: 0.1,
            epsilon: 0.3,
            discount: 1.0,
        }
    }
}

/// How a TD agent estimates the value of a successor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueEstimator {
    /// V(s) = max over legal a of Q(s, a). Off-policy one-step Q-learning.
    MaxQ,
    /// V(s) = eps * mean(Q(s, .)) + (1 - eps) * Q(s, best). The
    /// Expected-Sarsa estimate under the agent's own eps-greedy policy.
    EpsilonGreedyExpectation,
}

/// One-step TD agent with an eps-greedy policy.
///
/// Q-learning and Expected-Sarsa share action selection and the update
/// rule `Q(s,a) <- (1 - alpha) * Q(s,a) + alpha * (r + gamma * V(s'))`;
/// only the successor-value estimate V differs, so both are configurations
/// of this one type.
#[derive(Debug, Clone)]
pub struct TdAgent {
    table: QTable,
    learning: bool,
    alpha: f64,
    epsilon: f64,
    discount: f64,
    estimator: ValueEstimator,
    rng: StdRng,
}

impl TdAgent {
    pub fn new(estimator: ValueEstimator, config: TdConfig) -> Self {
        TdAgent {
            table: QTable::new(),
            learning: true,
            alpha: config.alpha,
            epsilon: config.epsilon,
            discount: config.discount,
            estimator,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Off-policy one-step Q-learning agent.
    pub fn q_learning(config: TdConfig) -> Self {
        Self::new(ValueEstimator::MaxQ, config)
    }

    /// One-step Expected-Sarsa agent.
    pub fn expected_sarsa(config: TdConfig) -> Self {
        Self::new(ValueEstimator::EpsilonGreedyExpectation, config)
    }

    pub fn estimator(&self) -> ValueEstimator {
        self.estimator
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn set_epsilon(&mut self, epsilon: f64) {
        self.epsilon = epsilon;
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Highest-valued legal action, or None if there are none. Ties go to
    /// the first action in enumeration order (box ascending, then count
    /// ascending).
    pub fn get_best_action(&self, state: &[u32]) -> Option<Action> {
        let mut best: Option<(Action, f64)> = None;
        for action in possible_actions(state) {
            let q = self.table.get(state, action);
            match best {
                Some((_, best_q)) if q <= best_q => {}
                _ => best = Some((action, q)),
            }
        }
        best.map(|(action, _)| action)
    }
}

impl Agent for TdAgent {
    fn qtable(&self) -> &QTable {
        &self.table
    }

    fn qtable_mut(&mut self) -> &mut QTable {
        &mut self.table
    }

    fn is_learning(&self) -> bool {
        self.learning
    }

    fn set_learning(&mut self, learning: bool) {
        self.learning = learning;
    }

    fn name(&self) -> &str {
        match self.estimator {
            ValueEstimator::MaxQ => "Q-learning",
            ValueEstimator::EpsilonGreedyExpectation => "Expected-Sarsa",
        }
    }

    fn get_value(&self, state: &[u32]) -> f64 {
        let actions = possible_actions(state);
        if actions.is_empty() {
            return 0.0;
        }
        let q_values = actions.iter().map(|&a| self.table.get(state, a));
        match self.estimator {
            ValueEstimator::MaxQ => q_values.fold(f64::NEG_INFINITY, f64::max),
            ValueEstimator::EpsilonGreedyExpectation => {
                // Assigns eps/|A| mass to every action and the full
                // (1 - eps) mass to the greedy one. This over-weights the
                // greedy action relative to a textbook eps-greedy
                // distribution; trained tables depend on this exact
                // weighting, so keep it.
                let sum: f64 = q_values.sum();
                let best = self
                    .get_best_action(state)
                    .expect("non-empty action set has a best action");
                sum * (self.epsilon / actions.len() as f64)
                    + (1.0 - self.epsilon) * self.table.get(state, best)
            }
        }
    }

    fn get_action(&mut self, state: &[u32]) -> Option<Action> {
        let actions = possible_actions(state);
        if actions.is_empty() {
            return None;
        }
        if self.learning {
            let u: f64 = self.rng.random();
            if u < self.epsilon {
                let idx = self.rng.random_range(0..actions.len());
                return Some(actions[idx]);
            }
        }
        self.get_best_action(state)
    }

    fn update(&mut self, state: &[u32], action: Action, reward: f64, next_state: &[u32]) {
        if !self.learning {
            return;
        }
        // Bootstrap from the successor value before writing.
        let next_value = self.get_value(next_state);
        let updated = (1.0 - self.alpha) * self.table.get(state, action)
            + self.alpha * (reward + self.discount * next_value);
        self.table.set(state, action, updated);
    }
}
