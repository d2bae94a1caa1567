//! N-Queens solvers built around one incremental conflict-tracking model.
//!
//! Four independent strategies place N non-attacking queens on an N×N
//! board:
//!
//! - **Backtracking** (`bt`): exhaustive depth-first search, deterministic
//!   first solution.
//! - **Hill climbing** (`hc`): steepest local search with random restarts.
//! - **Simulated annealing** (`sa`): Metropolis acceptance with geometric
//!   cooling, reheating, and hard restarts.
//! - **Genetic algorithm** (`ga`): permutation-encoded population with
//!   order crossover and swap mutation.
//!
//! # Architecture
//!
//! The local searches share [`board::ConflictModel`]: a permutation
//! (`solution[row] = col`) plus three occupancy counters (column and both
//! diagonal directions) kept in exact lockstep with it. The counters make
//! "how many queens attack this square" and "what does moving this queen
//! change" O(1) questions, so a move costs O(1) instead of the O(N²)
//! full re-evaluation a naive implementation pays.
//!
//! Every randomized runner takes its randomness from a seedable source
//! (`config.seed`, or a caller-supplied `Rng` via `run_with_rng`), and
//! every budget is an explicit parameter — there is no ambient state of
//! any kind.
//!
//! # Example
//!
//! ```
//! use nqueens::hc::{HcConfig, HcRunner};
//!
//! let result = HcRunner::run(8, &HcConfig::default().with_seed(42))?;
//! assert!(result.solved);
//! # Ok::<(), nqueens::QueensError>(())
//! ```

pub mod board;
pub mod bt;
pub mod error;
pub mod ga;
pub mod hc;
pub mod sa;

pub use error::QueensError;
