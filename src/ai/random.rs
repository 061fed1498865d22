use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{possible_actions, Action};

use super::agent::Agent;
use super::QTable;

/// An agent that selects uniformly at random from legal actions and never
/// learns. Used as a fixed-policy opponent and evaluation baseline.
pub struct RandomAgent {
    table: QTable,
    learning: bool,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            table: QTable::new(),
            learning: false,
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
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
        "Random"
    }

    /// Expected value of acting uniformly at random: the unweighted mean
    /// of the recorded action values.
    fn get_value(&self, state: &[u32]) -> f64 {
        let actions = possible_actions(state);
        if actions.is_empty() {
            return 0.0;
        }
        let total: f64 = actions.iter().map(|&a| self.table.get(state, a)).sum();
        total / actions.len() as f64
    }

    fn get_action(&mut self, state: &[u32]) -> Option<Action> {
        let actions = possible_actions(state);
        if actions.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..actions.len());
        Some(actions[idx])
    }

    fn update(&mut self, _state: &[u32], _action: Action, _reward: f64, _next_state: &[u32]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_legal_action() {
        let mut agent = RandomAgent::new();
        let state = [2, 0, 1];
        let legal = possible_actions(&state);

        for _ in 0..100 {
            let action = agent.get_action(&state).unwrap();
            assert!(legal.contains(&action), "action {} is not legal", action);
        }
    }

    #[test]
    fn test_terminal_state_yields_none() {
        let mut agent = RandomAgent::new();
        assert_eq!(agent.get_action(&[0, 0]), None);
        assert_eq!(agent.get_value(&[0, 0]), 0.0);
    }

    #[test]
    fn test_value_is_mean_of_qvalues() {
        let mut agent = RandomAgent::new();
        let state = [1, 1];
        agent.set_qvalue(&state, Action::new(1, 1), 2.0);
        agent.set_qvalue(&state, Action::new(2, 1), 4.0);
        assert!((agent.get_value(&state) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_action_value() {
        let mut agent = RandomAgent::new();
        let state = [1];
        agent.set_qvalue(&state, Action::new(1, 1), 5.0);
        assert_eq!(agent.get_value(&state), 5.0);
    }

    #[test]
    fn test_update_is_noop() {
        let mut agent = RandomAgent::new();
        agent.learning_mode_on();
        agent.update(&[2], Action::new(1, 1), 1.0, &[1]);
        assert_eq!(agent.get_qvalue(&[2], Action::new(1, 1)), 0.0);
        assert!(agent.qtable().is_empty());
    }
}
