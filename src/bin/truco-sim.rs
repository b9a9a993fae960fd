//! truco-sim - head-to-head Truco matches from the command line.
//!
//! ```text
//! truco-sim decks --count 100 --seed 7 --out pool.bin
//! truco-sim run --one BASELINE --two MONTE_CARLO --decks pool.bin --matches 10
//! ```
//!
//! Each finished match is printed to stdout as one JSON line.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use truco_mcts::{build_strategy, run_match, DeckPool, RulesConfig, StrategySettings, StrategySpec};

#[derive(Parser, Debug)]
#[command(name = "truco-sim")]
#[command(about = "Play Truco matches between Random, Baseline and MCTS strategies")]
struct Cli {
    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a deck pool file.
    Decks {
        #[arg(long, default_value_t = 100)]
        count: usize,

        #[arg(long, default_value_t = 0)]
        seed: u64,

        #[arg(long)]
        out: PathBuf,
    },

    /// Play matches, one deck per match.
    Run {
        /// Algorithm for seat one (RANDOM, BASELINE, anything else is MCTS).
        #[arg(long, default_value = "BASELINE")]
        one: String,

        /// Algorithm for seat two.
        #[arg(long, default_value = "MONTE_CARLO")]
        two: String,

        /// Id reported for seat one (defaults to the algorithm name).
        #[arg(long)]
        one_id: Option<String>,

        /// Id reported for seat two (defaults to the algorithm name).
        #[arg(long)]
        two_id: Option<String>,

        #[arg(long, default_value_t = 1)]
        matches: usize,

        /// Deck pool written by `decks`. Without it a pool is generated.
        #[arg(long)]
        decks: Option<PathBuf>,

        /// Seed for the generated pool.
        #[arg(long, default_value_t = 0)]
        pool_seed: u64,

        /// JSON strategy settings (`{"mcts": {...}, "seed": 0}`).
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Override the MCTS iteration count.
        #[arg(long)]
        iterations: Option<u32>,

        #[arg(long, default_value_t = 12)]
        target_score: u32,
    },
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.command {
        Command::Decks { count, seed, out } => {
            let mut pool = DeckPool::new();
            pool.populate(count, seed);
            let bytes = pool.to_bytes().context("failed to encode deck pool")?;
            fs::write(&out, bytes)
                .with_context(|| format!("failed to write {}", out.display()))?;
            info!(count, seed, path = %out.display(), "deck pool written");
        }
        Command::Run {
            one,
            two,
            one_id,
            two_id,
            matches,
            decks,
            pool_seed,
            settings,
            iterations,
            target_score,
        } => {
            let mut settings = match settings {
                Some(path) => {
                    let text = fs::read_to_string(&path)
                        .with_context(|| format!("failed to read {}", path.display()))?;
                    serde_json::from_str::<StrategySettings>(&text)
                        .with_context(|| format!("invalid settings in {}", path.display()))?
                }
                None => StrategySettings::default(),
            };
            if let Some(iterations) = iterations {
                settings.mcts.iterations = iterations;
            }

            let mut pool = match decks {
                Some(path) => {
                    let bytes = fs::read(&path)
                        .with_context(|| format!("failed to read {}", path.display()))?;
                    DeckPool::from_bytes(&bytes)
                        .with_context(|| format!("invalid deck pool in {}", path.display()))?
                }
                None => {
                    let mut pool = DeckPool::new();
                    pool.populate(matches, pool_seed);
                    pool
                }
            };

            let rules = RulesConfig { target_score };
            rules.validate()?;
            let spec_one = StrategySpec::new(one.clone(), one_id.unwrap_or(one));
            let spec_two = StrategySpec::new(two.clone(), two_id.unwrap_or(two));

            let mut wins = [0usize; 2];
            for index in 0..matches {
                let result = run_match(
                    build_strategy(&spec_one, &settings),
                    build_strategy(&spec_two, &settings),
                    &mut pool,
                    &rules,
                )
                .with_context(|| format!("match {} failed", index + 1))?;

                wins[result.winner_seat.index()] += 1;
                println!("{}", serde_json::to_string(&result)?);
            }

            info!(
                matches,
                one = %spec_one.id,
                one_wins = wins[0],
                two = %spec_two.id,
                two_wins = wins[1],
                "batch complete"
            );
        }
    }

    Ok(())
}
