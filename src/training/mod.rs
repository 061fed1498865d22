//! Training infrastructure: the two-player trainer (evaluation games,
//! play-and-train passes, iterated self-play) and rolling metrics.

pub mod metrics;
pub mod trainer;

pub use metrics::{EpisodeResult, TrainingMetrics};
pub use trainer::{Trainer, TrainerConfig};
