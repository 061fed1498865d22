use serde::{Deserialize, Serialize};

use crate::ai::{Agent, TdAgent};
use crate::env::Environment;
use crate::game::Player;
use crate::training::metrics::{EpisodeResult, TrainingMetrics};

/// Reward scheme for the two-player game, seen from the acting agent.
const WIN_REWARD: f64 = 1.0;
const LOSE_REWARD: f64 = -1.0;
const STEP_REWARD: f64 = 0.0;

/// Trainer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Episodes per training pass.
    pub n_games: usize,
    /// Opponent refreshes during self-play.
    pub iterations: usize,
    /// Log progress every this many episodes; 0 silences logging.
    pub log_interval: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig {
            n_games: 20_000,
            iterations: 20,
            log_interval: 1000,
        }
    }
}

/// Orchestrates matches between two agents, applying TD updates to the
/// learning side after every ply and aggregating outcome statistics.
pub struct Trainer {
    config: TrainerConfig,
}

impl Trainer {
    pub fn new(config: TrainerConfig) -> Self {
        Trainer { config }
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// One full evaluation game, both agents greedy (learning off).
    /// Returns +1 if `agent2` is forced to take the last chocolate
    /// (agent1 wins), -1 otherwise.
    pub fn play(
        &self,
        env: &mut Environment,
        agent1: &mut dyn Agent,
        agent2: &mut dyn Agent,
        reset: bool,
        verbose: bool,
    ) -> i32 {
        agent1.learning_mode_off();
        agent2.learning_mode_off();

        let mut state = if reset {
            env.reset()
        } else {
            env.state().to_vec()
        };

        loop {
            let a1 = agent1
                .get_action(&state)
                .expect("agent1 asked to move in a terminal state");
            if verbose {
                println!("{}: {}", agent1.name(), a1);
            }
            let (mid, _, done) = env.step(a1).expect("agent1 selected an illegal action");
            if verbose {
                println!("  boxes: {:?}", mid);
            }
            if done {
                return -1;
            }

            let a2 = agent2
                .get_action(&mid)
                .expect("agent2 asked to move in a terminal state");
            if verbose {
                println!("{}: {}", agent2.name(), a2);
            }
            let (next, _, done) = env.step(a2).expect("agent2 selected an illegal action");
            if verbose {
                println!("  boxes: {:?}", next);
            }
            if done {
                return 1;
            }

            state = next;
        }
    }

    /// Train `agent1` against a fixed `agent2` for `n_games` episodes.
    ///
    /// Only agent1 learns; agent2's learning mode is forced off so the
    /// opponent policy stays fixed for the whole pass, which is what makes
    /// iterated self-play well-defined. Credit assignment per episode:
    /// agent1 taking the last chocolate is a -1 update on its own move;
    /// agent2 taking it is a +1 update on agent1's preceding move, using
    /// the post-agent2 state; any other pair of plies is a 0-reward update
    /// bridging agent2's reply.
    ///
    /// Returns the per-episode outcomes (+1 = agent1 win) and agent1's win
    /// fraction.
    pub fn play_and_train(
        &self,
        env: &mut Environment,
        agent1: &mut dyn Agent,
        agent2: &mut dyn Agent,
        learn: bool,
    ) -> (Vec<i32>, f64) {
        if learn {
            agent1.learning_mode_on();
        } else {
            agent1.learning_mode_off();
        }
        agent2.learning_mode_off();

        let n_games = self.config.n_games;
        let mut history = Vec::with_capacity(n_games);
        let mut metrics = TrainingMetrics::new();
        let mut wins = 0usize;

        for episode in 1..=n_games {
            let mut state = env.reset();
            let mut plies = 0usize;

            loop {
                let a1 = agent1
                    .get_action(&state)
                    .expect("agent1 asked to move in a terminal state");
                let (mid, _, done) = env.step(a1).expect("agent1 selected an illegal action");
                plies += 1;

                if done {
                    // agent1 took the last chocolate
                    if learn {
                        agent1.update(&state, a1, LOSE_REWARD, &mid);
                    }
                    history.push(-1);
                    metrics.record_episode(EpisodeResult {
                        winner: Player::Two,
                        game_length: plies,
                    });
                    break;
                }

                let a2 = agent2
                    .get_action(&mid)
                    .expect("agent2 asked to move in a terminal state");
                let (next, _, done) = env.step(a2).expect("agent2 selected an illegal action");
                plies += 1;

                if done {
                    // agent2 took the last chocolate; credit agent1's move
                    // with the post-agent2 state
                    if learn {
                        agent1.update(&state, a1, WIN_REWARD, &next);
                    }
                    history.push(1);
                    wins += 1;
                    metrics.record_episode(EpisodeResult {
                        winner: Player::One,
                        game_length: plies,
                    });
                    break;
                }

                if learn {
                    agent1.update(&state, a1, STEP_REWARD, &next);
                }
                state = next;
            }

            if self.config.log_interval > 0 && episode % self.config.log_interval == 0 {
                let window = self.config.log_interval;
                println!(
                    "Episode {}/{} | win_rate({}): {:.1}% | avg_len: {:.1}",
                    episode,
                    n_games,
                    window,
                    metrics.win_rate(window) * 100.0,
                    metrics.average_game_length(window),
                );
            }
        }

        (history, wins as f64 / n_games as f64)
    }

    /// Fictitious self-play: train a copy of `agent` against a frozen
    /// snapshot of itself, replacing the snapshot with the freshly trained
    /// policy after every iteration.
    ///
    /// Returns the trained agent and the per-iteration win-rate trajectory
    /// against the ladder of frozen opponents.
    pub fn self_play(&self, env: &mut Environment, agent: &TdAgent) -> (TdAgent, Vec<f64>) {
        let mut current = agent.clone();
        current.learning_mode_on();
        let mut frozen = agent.clone();
        frozen.learning_mode_off();

        let mut win_rates = Vec::with_capacity(self.config.iterations);

        for iteration in 1..=self.config.iterations {
            let (_, win_rate) = self.play_and_train(env, &mut current, &mut frozen, true);
            win_rates.push(win_rate);

            if self.config.log_interval > 0 {
                println!(
                    "Self-play iteration {}/{} | win_rate: {:.3}",
                    iteration, self.config.iterations, win_rate
                );
            }

            // The next opponent is exactly this iteration's trained policy.
            // Cloning keeps the two value tables fully independent.
            frozen = current.clone();
            frozen.learning_mode_off();
        }

        (current, win_rates)
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new(TrainerConfig::default())
    }
}
