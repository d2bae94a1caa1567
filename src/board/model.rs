//! The conflict-counting board model.

use crate::error::QueensError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of occupancy counters a single queen participates in: its column
/// and both diagonals. [`ConflictModel::attackers`] subtracts this many
/// self-counts when the queried square is occupied. A model with additional
/// constraint dimensions (e.g. rows for non-permutation encodings) must grow
/// this constant together with the counter arrays.
pub const COUNTERS_PER_QUEEN: u32 = 3;

/// Mutable board state for an N-Queens search.
///
/// Owns the permutation plus three redundant occupancy counters:
///
/// - `col_counts[c]` — queens in column `c`
/// - `diag1_counts[row + col]` — queens on each "/" diagonal
/// - `diag2_counts[row - col + n - 1]` — queens on each "\" diagonal
///
/// The counters are an exact index over the permutation at all times:
/// [`apply_move`](Self::apply_move) updates them incrementally in O(1),
/// [`rebuild`](Self::rebuild) recounts them in O(N) after a reshuffle.
/// Duplicate columns (attacking states) are representable on purpose — the
/// local searches move *through* conflicting states.
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictModel {
    size: usize,
    solution: Vec<usize>,
    col_counts: Vec<u32>,
    diag1_counts: Vec<u32>,
    diag2_counts: Vec<u32>,
}

impl ConflictModel {
    /// Creates a model holding the identity permutation `[0, 1, .., n-1]`.
    ///
    /// # Errors
    /// Returns [`QueensError::InvalidSize`] when `n == 0`.
    pub fn new(n: usize) -> Result<Self, QueensError> {
        Self::from_permutation((0..n).collect())
    }

    /// Adopts an arbitrary permutation and builds the counters for it.
    ///
    /// Duplicate columns are allowed; out-of-range columns are not.
    ///
    /// # Errors
    /// Returns [`QueensError::InvalidSize`] for an empty permutation and
    /// [`QueensError::ColumnOutOfRange`] for any value `>= n`.
    pub fn from_permutation(solution: Vec<usize>) -> Result<Self, QueensError> {
        let size = solution.len();
        if size == 0 {
            return Err(QueensError::InvalidSize(0));
        }
        for (row, &col) in solution.iter().enumerate() {
            if col >= size {
                return Err(QueensError::ColumnOutOfRange { row, col, size });
            }
        }

        let mut model = Self {
            size,
            solution,
            col_counts: vec![0; size],
            diag1_counts: vec![0; 2 * size - 1],
            diag2_counts: vec![0; 2 * size - 1],
        };
        model.rebuild();
        Ok(model)
    }

    /// Board size N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The current permutation, `solution[row] = col`.
    pub fn solution(&self) -> &[usize] {
        &self.solution
    }

    /// Consumes the model, returning the permutation.
    pub fn into_solution(self) -> Vec<usize> {
        self.solution
    }

    /// Recounts all three counter arrays from the permutation in O(N).
    pub fn rebuild(&mut self) {
        self.col_counts.fill(0);
        self.diag1_counts.fill(0);
        self.diag2_counts.fill(0);
        for row in 0..self.size {
            let col = self.solution[row];
            let d2 = self.diag2(row, col);
            self.col_counts[col] += 1;
            self.diag1_counts[row + col] += 1;
            self.diag2_counts[d2] += 1;
        }
    }

    /// Reshuffles the permutation and rebuilds the counters — the restart
    /// primitive shared by every randomized solver.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.solution.shuffle(rng);
        self.rebuild();
    }

    /// Number of *other* queens attacking a hypothetical placement at
    /// `(row, col)`.
    ///
    /// The raw counter sum counts the queen itself once per counter when it
    /// already sits on the queried square, so exactly
    /// [`COUNTERS_PER_QUEEN`] is subtracted in that case and only in that
    /// case. A queen elsewhere in `row` never contributes: it shares
    /// neither the column nor a diagonal with another square of its own
    /// row.
    pub fn attackers(&self, row: usize, col: usize) -> u32 {
        let raw = self.col_counts[col]
            + self.diag1_counts[row + col]
            + self.diag2_counts[self.diag2(row, col)];
        if self.solution[row] == col {
            raw - COUNTERS_PER_QUEEN
        } else {
            raw
        }
    }

    /// Moves the queen in `row` from `old_col` to `new_col`, updating the
    /// six affected counter entries in O(1).
    ///
    /// # Panics
    /// Panics when `old_col` disagrees with the recorded column for `row`.
    /// Such a call is a solver defect; tolerating it would silently corrupt
    /// the counters for the rest of the run.
    pub fn apply_move(&mut self, row: usize, old_col: usize, new_col: usize) {
        assert_eq!(
            self.solution[row], old_col,
            "apply_move: row {row} holds column {}, caller claimed {old_col}",
            self.solution[row]
        );

        let d2_old = self.diag2(row, old_col);
        self.col_counts[old_col] -= 1;
        self.diag1_counts[row + old_col] -= 1;
        self.diag2_counts[d2_old] -= 1;

        self.solution[row] = new_col;

        let d2_new = self.diag2(row, new_col);
        self.col_counts[new_col] += 1;
        self.diag1_counts[row + new_col] += 1;
        self.diag2_counts[d2_new] += 1;
    }

    /// True iff no counter entry exceeds 1 — equivalently, zero attacking
    /// pairs.
    pub fn is_goal(&self) -> bool {
        self.col_counts.iter().all(|&c| c <= 1)
            && self.diag1_counts.iter().all(|&c| c <= 1)
            && self.diag2_counts.iter().all(|&c| c <= 1)
    }

    /// Total attacking pairs: Σ c·(c−1)/2 over all counters. O(N);
    /// used for instrumentation and goal cross-checks, never inside the
    /// per-move hot path.
    pub fn attacking_pairs(&self) -> usize {
        self.counter_sum(|c| c * (c - 1) / 2)
    }

    /// Total excess occupancy: Σ max(c−1, 0) over all counters. This is
    /// the genetic algorithm's fitness measure (0 = solution).
    pub fn conflict_excess(&self) -> usize {
        self.counter_sum(|c| c - 1)
    }

    fn counter_sum(&self, f: impl Fn(usize) -> usize) -> usize {
        self.col_counts
            .iter()
            .chain(&self.diag1_counts)
            .chain(&self.diag2_counts)
            .filter(|&&c| c > 1)
            .map(|&c| f(c as usize))
            .sum()
    }

    /// Index into `diag2_counts` for the "\" diagonal through `(row, col)`.
    fn diag2(&self, row: usize, col: usize) -> usize {
        // row - col + n - 1, reordered to stay in unsigned arithmetic
        row + self.size - 1 - col
    }
}
