use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use greedy_chocolate::ai::{Agent, RandomAgent, TdAgent};
use greedy_chocolate::config::AppConfig;
use greedy_chocolate::env::Environment;
use greedy_chocolate::model::ModelFile;
use greedy_chocolate::training::Trainer;

/// Train a greedy chocolate RL agent.
#[derive(Parser)]
#[command(name = "train", about = "Train a greedy chocolate RL agent")]
struct Cli {
    /// Algorithm to train: q or expected-sarsa
    #[arg(long, default_value = "q")]
    algorithm: String,

    /// Opponent during training: random or self
    #[arg(long, default_value = "random")]
    opponent: String,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of games per training pass
    #[arg(long)]
    games: Option<usize>,

    /// Override number of self-play iterations
    #[arg(long)]
    iterations: Option<usize>,

    /// Override learning rate
    #[arg(long)]
    alpha: Option<f64>,

    /// Override exploration rate
    #[arg(long)]
    epsilon: Option<f64>,

    /// Override discount factor
    #[arg(long)]
    discount: Option<f64>,

    /// Where to save the trained model
    #[arg(long, default_value = "model.json")]
    output: PathBuf,

    /// Optional path for the win-rate curve as a JSON array
    #[arg(long)]
    curve: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.algorithm.as_str() {
        "q" | "expected-sarsa" => {}
        other => bail!(
            "unknown algorithm '{}' (expected 'q' or 'expected-sarsa')",
            other
        ),
    }
    match cli.opponent.as_str() {
        "random" | "self" => {}
        other => bail!("unknown opponent '{}' (expected 'random' or 'self')", other),
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        app_config.training.n_games = games;
    }
    if let Some(iterations) = cli.iterations {
        app_config.training.iterations = iterations;
    }
    {
        let td_config = match cli.algorithm.as_str() {
            "q" => &mut app_config.q,
            _ => &mut app_config.expected_sarsa,
        };
        if let Some(alpha) = cli.alpha {
            td_config.alpha = alpha;
        }
        if let Some(epsilon) = cli.epsilon {
            td_config.epsilon = epsilon;
        }
        if let Some(discount) = cli.discount {
            td_config.discount = discount;
        }
    }
    app_config
        .validate()
        .context("configuration rejected after CLI overrides")?;

    let mut agent = match cli.algorithm.as_str() {
        "q" => TdAgent::q_learning(app_config.q),
        _ => TdAgent::expected_sarsa(app_config.expected_sarsa),
    };

    let mut env = Environment::new(app_config.game.clone());
    let trainer = Trainer::new(app_config.training.clone());
    let n_games = trainer.config().n_games;
    let iterations = trainer.config().iterations;

    let (win_rates, episodes_trained) = match cli.opponent.as_str() {
        "random" => {
            println!("Training {} vs Random for {} games...", agent.name(), n_games);
            let mut random = RandomAgent::new();
            let (_, win_rate) = trainer.play_and_train(&mut env, &mut agent, &mut random, true);
            println!("Training win rate vs Random: {:.3}", win_rate);
            (vec![win_rate], n_games)
        }
        _ => {
            println!(
                "Self-play training {}: {} iterations x {} games...",
                agent.name(),
                iterations,
                n_games
            );
            let (trained, win_rates) = trainer.self_play(&mut env, &agent);
            agent = trained;
            (win_rates, n_games * iterations)
        }
    };

    // Greedy evaluation pass: learning off, no exploration.
    let mut random = RandomAgent::new();
    let (_, eval_win_rate) = trainer.play_and_train(&mut env, &mut agent, &mut random, false);
    println!("Evaluation win rate vs Random (greedy): {:.3}", eval_win_rate);

    let model = ModelFile::from_agent(&agent, episodes_trained);
    model
        .save(&cli.output)
        .with_context(|| format!("saving model to {}", cli.output.display()))?;
    println!("Model saved: {}", cli.output.display());

    if let Some(curve_path) = cli.curve {
        let json = serde_json::to_string_pretty(&win_rates)?;
        std::fs::write(&curve_path, json)
            .with_context(|| format!("writing win-rate curve to {}", curve_path.display()))?;
        println!("Win-rate curve written: {}", curve_path.display());
    }

    Ok(())
}
