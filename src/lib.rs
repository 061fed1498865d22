//! # Greedy Chocolate
//!
//! A two-player Nim-like subtraction game ("don't take the last
//! chocolate") with tabular reinforcement-learning agents. Agents learn by
//! playing against a random opponent or through iterated self-play against
//! frozen snapshots of themselves.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: boxes, moves, legal-action enumeration
//! - [`ai`] — Agent trait, Q-table, random baseline, and TD agents
//! - [`env`] — (reset, step) environment adapter over the game
//! - [`training`] — Two-player trainer and metrics collection
//! - [`model`] — Model persistence (Q-table + metadata as JSON)
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod env;
pub mod error;
pub mod game;
pub mod model;
pub mod training;
