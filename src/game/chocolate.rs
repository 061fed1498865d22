use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::GameConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("box {0} does not exist")]
    InvalidBox(usize),

    #[error("cannot take zero chocolates")]
    ZeroCount,

    #[error("cannot take {count} chocolates from box {box_num} ({remaining} remaining)")]
    NotEnough {
        box_num: usize,
        count: u32,
        remaining: u32,
    },
}

/// The greedy chocolate game: a row of boxes, each holding some chocolates.
/// Players alternate taking any positive amount from a single box; taking
/// the last chocolate overall loses the game.
#[derive(Debug)]
pub struct ChocolateGame {
    config: GameConfig,
    boxes: Vec<u32>,
    rng: StdRng,
}

impl ChocolateGame {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Deterministic box initialization for tests.
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let mut game = ChocolateGame {
            boxes: vec![0; config.sections],
            config,
            rng,
        };
        game.reset();
        game
    }

    /// Refill every box uniformly within the configured bounds.
    pub fn reset(&mut self) -> &[u32] {
        for b in self.boxes.iter_mut() {
            *b = self
                .rng
                .random_range(self.config.min_chocolate..=self.config.max_chocolate);
        }
        &self.boxes
    }

    /// Current box contents.
    pub fn boxes(&self) -> &[u32] {
        &self.boxes
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Total chocolates left across all boxes.
    pub fn remaining(&self) -> u32 {
        self.boxes.iter().sum()
    }

    /// The game is over once every box is empty.
    pub fn is_over(&self) -> bool {
        self.remaining() == 0
    }

    /// Take `count` chocolates from the 0-indexed `box_idx`.
    pub fn take(&mut self, box_idx: usize, count: u32) -> Result<(), MoveError> {
        let remaining = *self
            .boxes
            .get(box_idx)
            .ok_or(MoveError::InvalidBox(box_idx + 1))?;
        if count == 0 {
            return Err(MoveError::ZeroCount);
        }
        if count > remaining {
            return Err(MoveError::NotEnough {
                box_num: box_idx + 1,
                count,
                remaining,
            });
        }
        self.boxes[box_idx] -= count;
        Ok(())
    }
}
