//! Environment adapter: turns the raw game into a (reset, step) interface
//! producing (next state, reward, done) transitions, so agents never touch
//! game mechanics directly.

use crate::game::{possible_actions, Action, ChocolateGame, GameConfig, MoveError};

/// Wraps one `ChocolateGame` and scores each move for the player who made
/// it: +1 when exactly one chocolate remains (the opponent is now forced
/// to take it), -1 when the mover just took the last one, 0 otherwise.
pub struct Environment {
    game: ChocolateGame,
}

impl Environment {
    pub fn new(config: GameConfig) -> Self {
        Environment {
            game: ChocolateGame::new(config),
        }
    }

    /// Deterministic box initialization for tests.
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Environment {
            game: ChocolateGame::seeded(config, seed),
        }
    }

    /// Current box contents.
    pub fn state(&self) -> &[u32] {
        self.game.boxes()
    }

    pub fn is_done(&self) -> bool {
        self.game.is_over()
    }

    /// Restart with freshly randomized boxes and return the new state.
    pub fn reset(&mut self) -> Vec<u32> {
        self.game.reset().to_vec()
    }

    /// All legal moves in the current state, 1-indexed boxes.
    pub fn possible_actions(&self) -> Vec<Action> {
        possible_actions(self.game.boxes())
    }

    /// Apply `action` (1-indexed box) and return (next state, reward, done).
    pub fn step(&mut self, action: Action) -> Result<(Vec<u32>, f64, bool), MoveError> {
        if action.box_num == 0 {
            return Err(MoveError::InvalidBox(0));
        }
        self.game.take(action.box_num - 1, action.count)?;

        let remaining = self.game.remaining();
        let reward = match remaining {
            0 => -1.0,
            1 => 1.0,
            _ => 0.0,
        };
        Ok((self.game.boxes().to_vec(), reward, remaining == 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Environment with exactly the given boxes, by draining a seeded game
    /// down to the target contents.
    fn env_with_boxes(boxes: &[u32]) -> Environment {
        let max = boxes.iter().copied().max().unwrap_or(1).max(1);
        let mut env = Environment::seeded(GameConfig::new(boxes.len(), max, max), 7);
        for (i, &target) in boxes.iter().enumerate() {
            let surplus = env.state()[i] - target;
            if surplus > 0 {
                env.game.take(i, surplus).unwrap();
            }
        }
        assert_eq!(env.state(), boxes);
        env
    }

    #[test]
    fn test_taking_last_chocolate_loses() {
        let mut env = env_with_boxes(&[1, 0, 0]);
        let (state, reward, done) = env.step(Action::new(1, 1)).unwrap();
        assert_eq!(state, vec![0, 0, 0]);
        assert_eq!(reward, -1.0);
        assert!(done);
    }

    #[test]
    fn test_leaving_one_chocolate_wins() {
        let mut env = env_with_boxes(&[2, 0, 0]);
        let (state, reward, done) = env.step(Action::new(1, 1)).unwrap();
        assert_eq!(state, vec![1, 0, 0]);
        assert_eq!(reward, 1.0);
        assert!(!done);
    }

    #[test]
    fn test_midgame_step_is_neutral() {
        let mut env = env_with_boxes(&[3, 2]);
        let (state, reward, done) = env.step(Action::new(2, 2)).unwrap();
        assert_eq!(state, vec![3, 0]);
        assert_eq!(reward, 0.0);
        assert!(!done);
    }

    #[test]
    fn test_step_converts_box_index() {
        let mut env = env_with_boxes(&[2, 3]);
        env.step(Action::new(2, 1)).unwrap();
        assert_eq!(env.state(), &[2, 2]);
    }

    #[test]
    fn test_step_rejects_illegal_action() {
        let mut env = env_with_boxes(&[1, 0]);
        assert!(env.step(Action::new(2, 1)).is_err());
        assert!(env.step(Action::new(0, 1)).is_err());
        assert!(env.step(Action::new(1, 5)).is_err());
    }

    #[test]
    fn test_possible_actions_are_one_indexed() {
        let env = env_with_boxes(&[2, 0, 1]);
        assert_eq!(
            env.possible_actions(),
            vec![Action::new(1, 1), Action::new(1, 2), Action::new(3, 1)]
        );
    }

    #[test]
    fn test_reset_restores_play() {
        let mut env = Environment::seeded(GameConfig::tiny(), 3);
        env.step(Action::new(1, 1)).unwrap();
        assert!(env.is_done());

        let state = env.reset();
        assert_eq!(state, vec![1]);
        assert!(!env.is_done());
    }
}
