//! Exhaustive backtracking search.
//!
//! Plain depth-first placement, one row at a time, trying columns in
//! ascending order. No incremental conflict state: safety of a candidate
//! square is checked pairwise against the rows already placed. Returns the
//! first complete placement found, which makes the output deterministic
//! (lexicographically smallest solution).

mod runner;

pub use runner::{BtResult, BtRunner};
