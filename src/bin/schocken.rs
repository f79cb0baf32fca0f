use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use schocken::quiz::{display_dice, Explanation};
use schocken::{play_seeded_round, GameRng, RoundConfig, RoundOutcome, RoundStats};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON for other tools
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "schocken", version)]
#[command(about = "Simulate Schocken rounds: winner, loser and penalty")]
struct Args {
    /// Seed for the session; the same seed replays the same rounds
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of rounds to simulate (at least 1)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    rounds: u64,

    /// Player names in play order (comma-separated)
    #[arg(long, value_delimiter = ',')]
    players: Option<Vec<String>>,

    /// JSON round config; --players overrides its player list
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = load_config(&args)?;
    let mut session = GameRng::new(args.seed);
    info!("session seed {}, {} rounds", args.seed, args.rounds);

    if args.rounds == 1 {
        let outcome = play_seeded_round(&config, session.fork().seed())
            .context("failed to simulate round")?;
        match args.format {
            OutputFormat::Text => print_round(&outcome),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        }
        return Ok(());
    }

    let mut stats = RoundStats::new();
    for round in 0..args.rounds {
        let outcome = play_seeded_round(&config, session.fork().seed())
            .with_context(|| format!("failed to simulate round {round}"))?;
        stats.record(&outcome);
    }
    match args.format {
        OutputFormat::Text => print_stats(&stats),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
    }
    Ok(())
}

fn load_config(args: &Args) -> Result<RoundConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let body = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            RoundConfig::from_json(&body)
                .with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => RoundConfig::default(),
    };
    if let Some(players) = &args.players {
        config.players = players.clone();
    }
    config.validate().context("invalid round config")?;
    Ok(config)
}

fn print_round(outcome: &RoundOutcome) {
    println!("Base budget: {}", outcome.base_budget);
    for record in &outcome.players {
        let attempts: Vec<String> = record.attempts.iter().map(|t| t.dice.to_string()).collect();
        println!(
            "{:<12} kept {:<6} {:<11} (throws: {})",
            record.name,
            display_dice(&record.best),
            record.best.name(),
            attempts.join(", ")
        );
    }
    println!();
    println!("{}", Explanation::from_outcome(outcome));
}

fn print_stats(stats: &RoundStats) {
    println!("Rounds: {}", stats.rounds);
    println!("Average penalty: {:.2}", stats.average_penalty());
    println!("Average throws: {:.2}", stats.average_throws());
    for (category, wins) in stats.by_category() {
        println!(
            "{:<11} {:>8} {:>6.2}%",
            category.name(),
            wins,
            stats.frequency(category) * 100.0
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_must_be_positive() {
        assert!(Args::try_parse_from(["schocken", "--rounds", "0"]).is_err());

        let args = Args::try_parse_from(["schocken", "--rounds", "3"]).unwrap();
        assert_eq!(args.rounds, 3);
        assert_eq!(Args::try_parse_from(["schocken"]).unwrap().rounds, 1);
    }

    #[test]
    fn test_players_override() {
        let args = Args::try_parse_from(["schocken", "--players", "Anna,Ben"]).unwrap();
        let config = load_config(&args).unwrap();
        assert_eq!(config.players, vec!["Anna", "Ben"]);
    }
}
