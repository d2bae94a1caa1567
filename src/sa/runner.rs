//! SA execution loop.

use super::config::SaConfig;
use crate::board::ConflictModel;
use crate::error::QueensError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Attacking-pair count is sampled into the history every this many steps.
const HISTORY_INTERVAL: usize = 1000;

/// Result of a simulated annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// Best permutation seen. A valid solution iff `solved`.
    pub best: Vec<usize>,

    /// Attacking pairs in `best` (0 iff `solved`).
    pub best_pairs: usize,

    /// Whether a zero-conflict permutation was reached.
    pub solved: bool,

    /// Steps executed (cooled move proposals; rejected no-op redraws are
    /// not steps).
    pub steps: usize,

    /// Hard restarts performed.
    pub restarts: usize,

    /// Reheats performed.
    pub reheats: usize,

    /// Accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Attacking-pair count sampled at regular intervals.
    pub conflict_history: Vec<usize>,
}

impl SaResult {
    /// The solution, if one was found.
    pub fn solution(&self) -> Option<&[usize]> {
        self.solved.then_some(self.best.as_slice())
    }
}

/// Executes the simulated annealing loop.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA on an `n`-queens board.
    ///
    /// With `max_steps == 0` the loop runs until a solution is found, so
    /// for N ∈ {2, 3} (which have none) callers must set a budget or use
    /// [`run_with_cancel`](Self::run_with_cancel).
    ///
    /// # Errors
    /// Returns [`QueensError::InvalidSize`] for `n == 0` and
    /// [`QueensError::InvalidConfig`] for a bad configuration.
    pub fn run(n: usize, config: &SaConfig) -> Result<SaResult, QueensError> {
        Self::run_with_cancel(n, config, None)
    }

    /// Runs SA with an optional cancellation token, checked once per step.
    ///
    /// # Errors
    /// Same conditions as [`run`](Self::run).
    pub fn run_with_cancel(
        n: usize,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult, QueensError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(n, config, &mut rng, cancel)
    }

    /// Runs SA with a caller-supplied random source.
    ///
    /// # Errors
    /// Same conditions as [`run`](Self::run).
    pub fn run_with_rng<R: Rng>(
        n: usize,
        config: &SaConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult, QueensError> {
        config.validate()?;
        let mut model = ConflictModel::new(n)?;

        // size-derived schedule constant
        let cooling_rate = 1.0 - 1.0 / (10.0 * n as f64);

        model.shuffle(rng);
        let mut temperature = cooling_rate;
        let mut attempts_remaining = config.restart_interval;

        // attacking pairs, tracked incrementally: an accepted move changes
        // the total by exactly its delta
        let mut pairs = model.attacking_pairs() as i64;

        let mut best = model.solution().to_vec();
        let mut best_pairs = pairs;
        let mut steps = 0usize;
        let mut restarts = 0usize;
        let mut reheats = 0usize;
        let mut accepted_moves = 0usize;
        let mut cancelled = false;
        let mut solved = pairs == 0;
        let mut conflict_history = vec![pairs as usize];

        while !solved {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if config.max_steps > 0 && steps >= config.max_steps {
                break;
            }

            attempts_remaining -= 1;
            if attempts_remaining == 0 {
                attempts_remaining = config.restart_interval;
                model.shuffle(rng);
                pairs = model.attacking_pairs() as i64;
                temperature = cooling_rate;
                restarts += 1;
                if pairs < best_pairs {
                    best_pairs = pairs;
                    best.copy_from_slice(model.solution());
                }
                tracing::debug!(restarts, pairs, "step budget exhausted, hard restart");
            }

            let row = rng.random_range(0..n);
            let old_col = model.solution()[row];
            // redraw until the target differs; a no-op move is not a step
            let new_col = loop {
                let col = rng.random_range(0..n);
                if col != old_col {
                    break col;
                }
            };

            // old side carries the self-correction, the new side does not:
            // the queen is not on the target square yet
            let delta =
                i64::from(model.attackers(row, new_col)) - i64::from(model.attackers(row, old_col));

            let accept = delta <= 0
                || rng.random_range(0.0..1.0) < (-(delta as f64) / temperature).exp();

            if accept {
                model.apply_move(row, old_col, new_col);
                pairs += delta;
                accepted_moves += 1;
                debug_assert_eq!(pairs as usize, model.attacking_pairs());

                if pairs < best_pairs {
                    best_pairs = pairs;
                    best.copy_from_slice(model.solution());
                }
            }

            temperature *= config.cooling_factor;
            steps += 1;
            if steps.is_multiple_of(HISTORY_INTERVAL) {
                conflict_history.push(pairs as usize);
            }

            if pairs == 0 {
                solved = true;
                break;
            }

            let (next, reheated) = reheat_if_frozen(temperature, n, config.reheat_threshold);
            temperature = next;
            if reheated {
                reheats += 1;
                tracing::trace!(steps, "temperature floor crossed, reheating");
            }
        }

        if conflict_history.last() != Some(&(pairs as usize)) {
            conflict_history.push(pairs as usize);
        }

        Ok(SaResult {
            best,
            best_pairs: best_pairs as usize,
            solved,
            steps,
            restarts,
            reheats,
            accepted_moves,
            final_temperature: temperature,
            cancelled,
            conflict_history,
        })
    }
}

/// Applies the reheat floor: a temperature below `threshold` jumps to
/// `2n`. Returns the resulting temperature and whether a reheat fired.
fn reheat_if_frozen(temperature: f64, n: usize, threshold: f64) -> (f64, bool) {
    if temperature < threshold {
        (2.0 * n as f64, true)
    } else {
        (temperature, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid_solution(solution: &[usize]) {
        let n = solution.len();
        for r1 in 0..n {
            for r2 in (r1 + 1)..n {
                let (c1, c2) = (solution[r1], solution[r2]);
                assert_ne!(c1, c2, "rows {r1} and {r2} share a column");
                assert_ne!(r1 + c1, r2 + c2, "rows {r1} and {r2} share a / diagonal");
                assert_ne!(r1 + c2, r2 + c1, "rows {r1} and {r2} share a \\ diagonal");
            }
        }
    }

    #[test]
    fn test_single_queen_immediate() {
        let result = SaRunner::run(1, &SaConfig::default().with_seed(1)).unwrap();
        assert!(result.solved);
        assert_eq!(result.best, vec![0]);
        assert_eq!(result.steps, 0);
    }

    #[test]
    fn test_eight_queens_solves() {
        // the budget is a hang guard, not a tuning knob: n=8 solves
        // orders of magnitude earlier
        let config = SaConfig::default().with_seed(42).with_max_steps(2_000_000);
        let result = SaRunner::run(8, &config).unwrap();
        assert!(result.solved, "expected a solution, got {result:?}");
        assert_eq!(result.best_pairs, 0);
        assert_valid_solution(&result.best);
        assert!(result.final_temperature > 0.0);
    }

    #[test]
    fn test_larger_board_solves() {
        let config = SaConfig::default().with_seed(7).with_max_steps(5_000_000);
        let result = SaRunner::run(32, &config).unwrap();
        assert!(result.solved);
        assert_valid_solution(&result.best);
    }

    #[test]
    fn test_step_budget_returns_best_effort() {
        let config = SaConfig::default().with_seed(5).with_max_steps(10);
        let result = SaRunner::run(32, &config).unwrap();
        assert!(!result.solved);
        assert_eq!(result.steps, 10);
        assert_eq!(result.best.len(), 32);
        assert!(result.best_pairs > 0);
        assert!(result.final_temperature > 0.0);
    }

    #[test]
    fn test_unsolvable_size_restarts_at_interval() {
        // n = 3 has no solution, so the loop runs its full budget and
        // restarts exactly every `restart_interval` steps
        let config = SaConfig::default()
            .with_seed(11)
            .with_restart_interval(100)
            .with_max_steps(1000);
        let result = SaRunner::run(3, &config).unwrap();
        assert!(!result.solved);
        assert_eq!(result.restarts, 10);
    }

    #[test]
    fn test_cancellation() {
        // n = 3 never starts solved, so the pre-set flag is always observed
        let cancel = Arc::new(AtomicBool::new(true));
        let config = SaConfig::default().with_seed(42);
        let result = SaRunner::run_with_cancel(3, &config, Some(cancel)).unwrap();
        assert!(result.cancelled);
        assert!(!result.solved);
        assert_eq!(result.steps, 0);
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = SaRunner::run(0, &SaConfig::default()).unwrap_err();
        assert_eq!(err, QueensError::InvalidSize(0));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = SaRunner::run(8, &SaConfig::default().with_cooling_factor(2.0)).unwrap_err();
        assert!(matches!(err, QueensError::InvalidConfig(_)));
    }

    #[test]
    fn test_seeded_runs_reproducible() {
        let config = SaConfig::default().with_seed(123).with_max_steps(100_000);
        let a = SaRunner::run(10, &config).unwrap();
        let b = SaRunner::run(10, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_reheat_fires_only_below_threshold() {
        let (t, fired) = reheat_if_frozen(0.099, 8, 0.1);
        assert!(fired);
        assert!((t - 16.0).abs() < 1e-12);

        let (t, fired) = reheat_if_frozen(0.1, 8, 0.1);
        assert!(!fired);
        assert!((t - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_temperature_never_non_positive() {
        // geometric cooling from the reheat floor can only approach zero
        // from above before the floor fires again
        let mut t = 1.0 - 1.0 / 80.0;
        for _ in 0..10_000 {
            t *= 0.999;
            let (next, _) = reheat_if_frozen(t, 8, 0.1);
            t = next;
            assert!(t > 0.0);
            assert!(t >= 0.1 * 0.999);
        }
    }
}
