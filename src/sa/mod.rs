//! Simulated annealing (stochastic acceptance with cooling and reheating).
//!
//! Single-queen random moves are accepted unconditionally when they do not
//! increase the attacking-pair count, and with Metropolis probability
//! `exp(-delta / T)` otherwise. The temperature decays geometrically every
//! step, is reheated to `2N` whenever it falls below a floor (so the search
//! never freezes into a local optimum), and the whole state is reshuffled
//! after a fixed number of steps without reaching the goal.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
