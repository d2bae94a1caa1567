//! Hill climbing execution loop.

use super::config::HcConfig;
use crate::board::ConflictModel;
use crate::error::QueensError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a hill climbing run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcResult {
    /// Best permutation found. A valid solution iff `solved`.
    pub best: Vec<usize>,

    /// Attacking pairs in `best` (0 iff `solved`).
    pub best_pairs: usize,

    /// Whether a zero-conflict permutation was reached.
    pub solved: bool,

    /// Restart attempts started (1-based on success).
    pub restarts: usize,

    /// Total queen moves applied across all attempts.
    pub steps: usize,

    /// Attacking pairs left at the end of each exhausted attempt.
    pub conflict_history: Vec<usize>,
}

impl HcResult {
    /// The solution, if one was found.
    pub fn solution(&self) -> Option<&[usize]> {
        self.solved.then_some(self.best.as_slice())
    }
}

/// Executes steepest-descent hill climbing with random restarts.
pub struct HcRunner;

impl HcRunner {
    /// Runs hill climbing on an `n`-queens board.
    ///
    /// # Errors
    /// Returns [`QueensError::InvalidSize`] for `n == 0` and
    /// [`QueensError::InvalidConfig`] for a bad configuration.
    pub fn run(n: usize, config: &HcConfig) -> Result<HcResult, QueensError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(n, config, &mut rng)
    }

    /// Runs hill climbing with a caller-supplied random source.
    ///
    /// # Errors
    /// Same conditions as [`run`](Self::run).
    pub fn run_with_rng<R: Rng>(
        n: usize,
        config: &HcConfig,
        rng: &mut R,
    ) -> Result<HcResult, QueensError> {
        config.validate()?;
        let mut model = ConflictModel::new(n)?;
        let steps_per_restart = config.steps_per_restart.unwrap_or(2 * n);

        let mut best: Vec<usize> = model.solution().to_vec();
        let mut best_pairs = usize::MAX;
        let mut steps = 0usize;
        let mut conflict_history = Vec::new();

        // tie sets, reused across steps
        let mut max_rows: Vec<usize> = Vec::with_capacity(n);
        let mut min_cols: Vec<usize> = Vec::with_capacity(n);

        for attempt in 0..config.max_restarts {
            model.shuffle(rng);

            for _ in 0..steps_per_restart {
                // most-conflicted queen, ties collected
                let mut max_attack = 0;
                max_rows.clear();
                for row in 0..n {
                    let attack = model.attackers(row, model.solution()[row]);
                    if max_rows.is_empty() || attack > max_attack {
                        max_attack = attack;
                        max_rows.clear();
                        max_rows.push(row);
                    } else if attack == max_attack {
                        max_rows.push(row);
                    }
                }

                if max_attack == 0 {
                    conflict_history.push(0);
                    return Ok(HcResult {
                        best: model.solution().to_vec(),
                        best_pairs: 0,
                        solved: true,
                        restarts: attempt + 1,
                        steps,
                        conflict_history,
                    });
                }

                let row = max_rows[rng.random_range(0..max_rows.len())];
                let old_col = model.solution()[row];

                // least-conflicted column for that queen; staying put is a
                // legal candidate, the self-correction makes it comparable
                let mut min_attack = u32::MAX;
                min_cols.clear();
                for col in 0..n {
                    let attack = model.attackers(row, col);
                    if attack < min_attack {
                        min_attack = attack;
                        min_cols.clear();
                        min_cols.push(col);
                    } else if attack == min_attack {
                        min_cols.push(col);
                    }
                }

                let new_col = min_cols[rng.random_range(0..min_cols.len())];
                model.apply_move(row, old_col, new_col);
                steps += 1;

                if model.is_goal() {
                    conflict_history.push(0);
                    return Ok(HcResult {
                        best: model.solution().to_vec(),
                        best_pairs: 0,
                        solved: true,
                        restarts: attempt + 1,
                        steps,
                        conflict_history,
                    });
                }
            }

            let pairs = model.attacking_pairs();
            conflict_history.push(pairs);
            if pairs < best_pairs {
                best_pairs = pairs;
                best.copy_from_slice(model.solution());
            }
            tracing::debug!(attempt, pairs, "attempt exhausted, restarting");
        }

        Ok(HcResult {
            best,
            best_pairs,
            solved: false,
            restarts: config.max_restarts,
            steps,
            conflict_history,
        })
    }
}
