use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;

use greedy_chocolate::ai::{Agent, RandomAgent};
use greedy_chocolate::config::AppConfig;
use greedy_chocolate::env::Environment;
use greedy_chocolate::game::{Action, Player};
use greedy_chocolate::model::ModelFile;

/// Play the greedy chocolate game against another human or an agent.
#[derive(Parser)]
#[command(name = "play", about = "Play the greedy chocolate game")]
struct Cli {
    /// Opponent: human, random, or best (trained model)
    #[arg(long, default_value = "human")]
    opponent: String,

    /// Model file for the 'best' opponent
    #[arg(long, default_value = "model.json")]
    model: PathBuf,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

enum Opponent {
    Human,
    Agent(Box<dyn Agent>),
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let mut opponent = match cli.opponent.as_str() {
        "human" => Opponent::Human,
        "random" => Opponent::Agent(Box::new(RandomAgent::new())),
        "best" => {
            let model = ModelFile::load(&cli.model)
                .with_context(|| format!("loading model from {}", cli.model.display()))?;
            let agent = model
                .into_agent()
                .context("reconstructing agent from model")?;
            Opponent::Agent(Box::new(agent))
        }
        other => bail!(
            "unknown opponent '{}' (expected 'human', 'random', or 'best')",
            other
        ),
    };

    print_welcome();

    let mut env = Environment::new(app_config.game.clone());
    let mut turn = Player::One;

    loop {
        let action = match (&mut opponent, turn) {
            (Opponent::Agent(agent), Player::Two) => {
                let action = agent
                    .get_action(env.state())
                    .ok_or_else(|| anyhow!("agent has no legal action in a running game"))?;
                println!(
                    "\n{} takes {} chocolates from box {}.",
                    agent.name(),
                    action.count,
                    action.box_num
                );
                action
            }
            _ => {
                print_state(env.state());
                ask_move(turn, env.state())?
            }
        };

        let (_, _, done) = env
            .step(action)
            .map_err(|e| anyhow!("illegal move slipped through: {e}"))?;

        if done {
            println!("\nYou take the last chocolate!");
            println!("{} is greedy :(", turn.name());
            return Ok(());
        }
        turn = turn.other();
    }
}

fn print_welcome() {
    println!("\n================================================================");
    println!("\nWelcome to the greedy chocolate game!\n");
    println!("People avoid taking the last chocolate because");
    println!("it's a sign of greediness.\n");
    println!("You can take any number of chocolates from one box");
    println!("(as long as it has enough).\n");
    println!("Just don't be the one to take the last chocolate!");
    println!("Enter 'q' at any prompt to quit.");
    println!("\n================================================================");
}

fn print_state(state: &[u32]) {
    println!("\n\nChocolate boxes:\n");
    for (i, count) in state.iter().enumerate() {
        println!("Box {}: {}", i + 1, count);
    }
}

/// Prompt until the player enters a legal (box, count) move. 'q' quits.
fn ask_move(turn: Player, state: &[u32]) -> Result<Action> {
    let box_num = loop {
        let input = prompt(&format!("\n{} turn.\nPick a chocolate box: ", turn.name()))?;
        if input == "q" {
            std::process::exit(0);
        }
        match parse_box(&input, state) {
            Ok(box_num) => break box_num,
            Err(msg) => println!("{msg}"),
        }
    };

    let remaining = state[box_num - 1];
    let count = loop {
        let input = prompt(&format!("How many chocolates to take from box {box_num}: "))?;
        if input == "q" {
            std::process::exit(0);
        }
        match parse_count(&input, remaining) {
            Ok(count) => break count,
            Err(msg) => println!("{msg}"),
        }
    };

    println!("\nTaking {count} chocolates from box {box_num}...");
    Ok(Action::new(box_num, count))
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Parse a 1-indexed box choice, rejecting non-integers, out-of-range
/// boxes, and empty boxes.
fn parse_box(input: &str, state: &[u32]) -> Result<usize, String> {
    let sections = state.len();
    let box_num: usize = input
        .parse()
        .map_err(|_| format!("ERROR!! Please enter a box number from 1 to {sections}"))?;
    if box_num < 1 || box_num > sections {
        return Err(format!(
            "ERROR!! Please enter a box number from 1 to {sections}"
        ));
    }
    if state[box_num - 1] == 0 {
        return Err(format!("There's no more chocolate in box {box_num}"));
    }
    Ok(box_num)
}

/// Parse a chocolate count, rejecting non-integers, zero, and amounts
/// exceeding the box contents.
fn parse_count(input: &str, remaining: u32) -> Result<u32, String> {
    let count: i64 = input
        .parse()
        .map_err(|_| "ERROR!! Please enter an integer number!".to_string())?;
    if count <= 0 {
        return Err(format!("Can't take {count} chocolates"));
    }
    if count as u64 > u64::from(remaining) {
        return Err("Not enough chocolates, don't be greedy :(".to_string());
    }
    Ok(count as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_box_accepts_valid() {
        assert_eq!(parse_box("1", &[2, 0, 1]), Ok(1));
        assert_eq!(parse_box("3", &[2, 0, 1]), Ok(3));
    }

    #[test]
    fn test_parse_box_rejects_garbage() {
        assert!(parse_box("abc", &[2, 0, 1]).is_err());
        assert!(parse_box("", &[2, 0, 1]).is_err());
        assert!(parse_box("-1", &[2, 0, 1]).is_err());
    }

    #[test]
    fn test_parse_box_rejects_out_of_range() {
        assert!(parse_box("0", &[2, 0, 1]).is_err());
        assert!(parse_box("4", &[2, 0, 1]).is_err());
    }

    #[test]
    fn test_parse_box_rejects_empty_box() {
        let err = parse_box("2", &[2, 0, 1]).unwrap_err();
        assert_eq!(err, "There's no more chocolate in box 2");
    }

    #[test]
    fn test_parse_count_accepts_valid() {
        assert_eq!(parse_count("1", 3), Ok(1));
        assert_eq!(parse_count("3", 3), Ok(3));
    }

    #[test]
    fn test_parse_count_rejects_zero_and_negative() {
        assert!(parse_count("0", 3).is_err());
        assert!(parse_count("-2", 3).is_err());
    }

    #[test]
    fn test_parse_count_rejects_excess() {
        assert_eq!(
            parse_count("4", 3).unwrap_err(),
            "Not enough chocolates, don't be greedy :("
        );
    }

    #[test]
    fn test_parse_count_rejects_garbage() {
        assert!(parse_count("lots", 3).is_err());
    }
}
