//! CLI entry point: solve one board with the chosen strategy and report
//! the solution plus elapsed time.

use clap::{Parser, ValueEnum};
use nqueens::bt::BtRunner;
use nqueens::ga::{GaConfig, GaRunner};
use nqueens::hc::{HcConfig, HcRunner};
use nqueens::sa::{SaConfig, SaRunner};
use nqueens::QueensError;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    /// Exhaustive depth-first search (deterministic first solution).
    Backtracking,
    /// Steepest local search with random restarts.
    HillClimbing,
    /// Simulated annealing with reheating.
    Annealing,
    /// Genetic algorithm.
    Genetic,
}

#[derive(Parser)]
#[command(name = "nqueens")]
#[command(author, version, about = "Solve the N-Queens puzzle")]
struct Cli {
    /// Number of queens
    #[arg(value_name = "N")]
    size: usize,

    /// Solver strategy
    #[arg(short, long, value_enum, default_value_t = Strategy::HillClimbing)]
    strategy: Strategy,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Step budget for annealing (0 = run until solved)
    #[arg(long, default_value_t = 0)]
    max_steps: usize,
}

fn main() -> Result<(), QueensError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let started = Instant::now();
    let solution = solve(&cli)?;
    let elapsed = started.elapsed();

    match solution {
        Some(solution) => println!("solution: {solution:?}"),
        None => println!("no solution found within budget"),
    }
    println!("elapsed: {elapsed:.2?}");
    Ok(())
}

fn solve(cli: &Cli) -> Result<Option<Vec<usize>>, QueensError> {
    match cli.strategy {
        Strategy::Backtracking => Ok(BtRunner::run(cli.size)?.solution),
        Strategy::HillClimbing => {
            let mut config = HcConfig::default();
            if let Some(seed) = cli.seed {
                config = config.with_seed(seed);
            }
            let result = HcRunner::run(cli.size, &config)?;
            Ok(result.solution().map(|s| s.to_vec()))
        }
        Strategy::Annealing => {
            let mut config = SaConfig::default().with_max_steps(cli.max_steps);
            if let Some(seed) = cli.seed {
                config = config.with_seed(seed);
            }
            let result = SaRunner::run(cli.size, &config)?;
            Ok(result.solution().map(|s| s.to_vec()))
        }
        Strategy::Genetic => {
            let mut config = GaConfig::default();
            if let Some(seed) = cli.seed {
                config = config.with_seed(seed);
            }
            let result = GaRunner::run(cli.size, &config)?;
            Ok(result.solution().map(|s| s.to_vec()))
        }
    }
}
