use std::fmt;

use serde::{Deserialize, Serialize};

/// A single move: take `count` chocolates from box `box_num`.
///
/// `box_num` is 1-indexed everywhere outside `ChocolateGame::take`, matching
/// how boxes are presented to a human player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Action {
    pub box_num: usize,
    pub count: u32,
}

impl Action {
    pub fn new(box_num: usize, count: u32) -> Self {
        Action { box_num, count }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "take {} from box {}", self.count, self.box_num)
    }
}

/// Every legal move in `state`: each box contributes one action per
/// removable amount, box index ascending, then count ascending.
pub fn possible_actions(state: &[u32]) -> Vec<Action> {
    let mut actions = Vec::new();
    for (i, &remaining) in state.iter().enumerate() {
        for count in 1..=remaining {
            actions.push(Action::new(i + 1, count));
        }
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_skips_empty_boxes() {
        let actions = possible_actions(&[2, 0, 1]);
        assert_eq!(
            actions,
            vec![Action::new(1, 1), Action::new(1, 2), Action::new(3, 1)]
        );
    }

    #[test]
    fn test_terminal_state_has_no_actions() {
        assert!(possible_actions(&[0, 0, 0]).is_empty());
        assert!(possible_actions(&[]).is_empty());
    }

    #[test]
    fn test_enumeration_order() {
        let actions = possible_actions(&[2, 3]);
        assert_eq!(
            actions,
            vec![
                Action::new(1, 1),
                Action::new(1, 2),
                Action::new(2, 1),
                Action::new(2, 2),
                Action::new(2, 3),
            ]
        );
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::new(2, 5).to_string(), "take 5 from box 2");
    }
}
