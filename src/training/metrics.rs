use std::collections::VecDeque;

use crate::game::Player;

/// Result of a single training episode.
pub struct EpisodeResult {
    pub winner: Player,
    pub game_length: usize,
}

/// Training metrics tracker with rolling window computations.
pub struct TrainingMetrics {
    episode_results: VecDeque<EpisodeResult>,
    capacity: usize,
    total_episodes: usize, // lifetime count, never capped
}

impl TrainingMetrics {
    pub fn with_capacity(capacity: usize) -> Self {
        TrainingMetrics {
            episode_results: VecDeque::with_capacity(capacity),
            capacity,
            total_episodes: 0,
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(1000)
    }

    pub fn record_episode(&mut self, result: EpisodeResult) {
        self.total_episodes += 1;
        self.episode_results.push_back(result);
        if self.episode_results.len() > self.capacity {
            self.episode_results.pop_front();
        }
    }

    /// Win rate for Player 1 in the last N episodes.
    pub fn win_rate(&self, last_n: usize) -> f64 {
        let n = self.episode_results.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let wins = self
            .episode_results
            .iter()
            .rev()
            .take(n)
            .filter(|r| r.winner == Player::One)
            .count();
        wins as f64 / n as f64
    }

    /// Average game length in plies over the last N episodes.
    pub fn average_game_length(&self, last_n: usize) -> f64 {
        let n = self.episode_results.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let total: usize = self
            .episode_results
            .iter()
            .rev()
            .take(n)
            .map(|r| r.game_length)
            .sum();
        total as f64 / n as f64
    }

    pub fn total_episodes(&self) -> usize {
        self.total_episodes
    }
}

impl Default for TrainingMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_rate() {
        let mut m = TrainingMetrics::new();
        for _ in 0..7 {
            m.record_episode(EpisodeResult {
                winner: Player::One,
                game_length: 10,
            });
        }
        for _ in 0..3 {
            m.record_episode(EpisodeResult {
                winner: Player::Two,
                game_length: 10,
            });
        }
        assert!((m.win_rate(10) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_win_rate_window_is_recent() {
        let mut m = TrainingMetrics::new();
        m.record_episode(EpisodeResult {
            winner: Player::Two,
            game_length: 4,
        });
        m.record_episode(EpisodeResult {
            winner: Player::One,
            game_length: 4,
        });
        assert!((m.win_rate(1) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_game_length() {
        let mut m = TrainingMetrics::new();
        m.record_episode(EpisodeResult {
            winner: Player::One,
            game_length: 20,
        });
        m.record_episode(EpisodeResult {
            winner: Player::Two,
            game_length: 30,
        });
        assert!((m.average_game_length(10) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_metrics() {
        let m = TrainingMetrics::new();
        assert_eq!(m.win_rate(10), 0.0);
        assert_eq!(m.average_game_length(10), 0.0);
        assert_eq!(m.total_episodes(), 0);
    }

    #[test]
    fn test_capacity_caps_window_not_lifetime() {
        let mut m = TrainingMetrics::with_capacity(2);
        for _ in 0..5 {
            m.record_episode(EpisodeResult {
                winner: Player::One,
                game_length: 2,
            });
        }
        assert_eq!(m.total_episodes(), 5);
        assert!((m.win_rate(100) - 1.0).abs() < 1e-9);
    }
}
