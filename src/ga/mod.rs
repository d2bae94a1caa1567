//! Genetic algorithm over queen permutations.
//!
//! Permutation-encoded population scored by total excess conflicts (0 is a
//! solution). Tournament selection, order crossover, and swap mutation keep
//! every genome a permutation, so the column constraint can never be
//! violated and only the diagonals need repairing. Long stagnation triggers
//! a full population reset; the mutation rate escalates slowly over time to
//! reintroduce diversity.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//!   (order crossover)
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod config;
pub mod operators;
mod runner;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
