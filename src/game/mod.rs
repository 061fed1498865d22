//! Core greedy chocolate game logic: randomized box setup, move
//! validation, legal-move enumeration, and terminal detection. Whoever
//! takes the last chocolate loses.

mod action;
mod chocolate;
mod config;
mod player;

pub use action::{possible_actions, Action};
pub use chocolate::{ChocolateGame, MoveError};
pub use config::GameConfig;
pub use player::Player;
