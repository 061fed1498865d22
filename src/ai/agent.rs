use crate::game::Action;

use super::QTable;

/// Universal interface for all game-playing agents.
///
/// Q-value access, learning-mode toggles, and table snapshotting are
/// provided on top of the two table accessors; the policy itself
/// (`get_value`, `get_action`, `update`) is what varies per agent.
pub trait Agent {
    fn qtable(&self) -> &QTable;
    fn qtable_mut(&mut self) -> &mut QTable;

    /// Whether `update` currently has any effect and `get_action` explores.
    fn is_learning(&self) -> bool;
    fn set_learning(&mut self, learning: bool);

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Estimated value of `state` under this agent's policy. Must be 0.0
    /// for states with no legal actions.
    fn get_value(&self, state: &[u32]) -> f64;

    /// Choose a move. Returns None iff `state` has no legal actions.
    fn get_action(&mut self, state: &[u32]) -> Option<Action>;

    /// Learn from one transition. No-op while learning mode is off.
    fn update(&mut self, state: &[u32], action: Action, reward: f64, next_state: &[u32]);

    /// Stored estimate for `(state, action)`, 0.0 if never set. Never
    /// creates an entry.
    fn get_qvalue(&self, state: &[u32], action: Action) -> f64 {
        self.qtable().get(state, action)
    }

    fn set_qvalue(&mut self, state: &[u32], action: Action, value: f64) {
        self.qtable_mut().set(state, action, value);
    }

    fn learning_mode_on(&mut self) {
        self.set_learning(true);
    }

    fn learning_mode_off(&mut self) {
        self.set_learning(false);
    }

    /// Independent copy of the value table, for persistence or
    /// snapshotting an opponent.
    fn snapshot(&self) -> QTable {
        self.qtable().clone()
    }

    /// Replace the value table, e.g. with one loaded from a model file.
    fn load_table(&mut self, table: QTable) {
        *self.qtable_mut() = table;
    }
}
