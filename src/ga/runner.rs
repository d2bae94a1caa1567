//! GA evolutionary loop.

use super::config::GaConfig;
use super::operators::{order_crossover, swap_mutation};
use crate::board::ConflictModel;
use crate::error::QueensError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Best permutation seen. A valid solution iff `solved`.
    pub best: Vec<usize>,

    /// Excess-conflict fitness of `best` (0 iff `solved`).
    pub best_fitness: usize,

    /// Whether a zero-conflict permutation was reached.
    pub solved: bool,

    /// Generations evolved (0 when the initial population already held a
    /// solution).
    pub generations: usize,

    /// Stagnation-triggered population resets performed.
    pub resets: usize,

    /// Best fitness at the end of each generation.
    pub fitness_history: Vec<usize>,
}

impl GaResult {
    /// The solution, if one was found.
    pub fn solution(&self) -> Option<&[usize]> {
        self.solved.then_some(self.best.as_slice())
    }
}

#[derive(Clone)]
struct Genome {
    genes: Vec<usize>,
    fitness: usize,
}

/// Executes the evolutionary loop.
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA on an `n`-queens board.
    ///
    /// # Errors
    /// Returns [`QueensError::InvalidSize`] for `n == 0` and
    /// [`QueensError::InvalidConfig`] for a bad configuration.
    pub fn run(n: usize, config: &GaConfig) -> Result<GaResult, QueensError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(n, config, &mut rng)
    }

    /// Runs the GA with a caller-supplied random source.
    ///
    /// # Errors
    /// Same conditions as [`run`](Self::run).
    pub fn run_with_rng<R: Rng>(
        n: usize,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult, QueensError> {
        config.validate()?;
        if n == 0 {
            return Err(QueensError::InvalidSize(0));
        }

        let mut population = random_population(n, config.population_size, rng);
        let mut mutation_rate = config.mutation_rate;

        let mut best = fittest(&population).clone();
        // separate baseline so a post-reset population competes against
        // itself, not against the all-time best
        let mut best_since_reset = best.fitness;
        let mut stagnation = 0usize;
        let mut resets = 0usize;
        let mut fitness_history = vec![best.fitness];

        if best.fitness == 0 {
            return Ok(finish(best, true, 0, resets, fitness_history));
        }

        for generation in 1..=config.max_generations {
            let mut next = Vec::with_capacity(config.population_size);
            while next.len() < config.population_size {
                let p1 = tournament(&population, config.tournament_size, rng);
                let p2 = tournament(&population, config.tournament_size, rng);
                let children =
                    order_crossover(&population[p1].genes, &population[p2].genes, rng);
                for mut genes in [children.0, children.1] {
                    if next.len() >= config.population_size {
                        break;
                    }
                    if rng.random_range(0.0..1.0) < mutation_rate {
                        swap_mutation(&mut genes, rng);
                    }
                    let fitness = evaluate(&genes);
                    next.push(Genome { genes, fitness });
                }
            }
            population = next;

            let gen_best = fittest(&population);
            if gen_best.fitness < best_since_reset {
                best_since_reset = gen_best.fitness;
                stagnation = 0;
            } else {
                stagnation += 1;
            }
            if gen_best.fitness < best.fitness {
                best = gen_best.clone();
            }
            fitness_history.push(best.fitness);

            if best.fitness == 0 {
                return Ok(finish(best, true, generation, resets, fitness_history));
            }

            if config.stagnation_limit > 0 && stagnation >= config.stagnation_limit {
                population = random_population(n, config.population_size, rng);
                best_since_reset = usize::MAX;
                stagnation = 0;
                mutation_rate = config.mutation_rate;
                resets += 1;
                tracing::debug!(generation, resets, "stagnated, resetting population");
            }

            if config.mutation_escalation_interval > 0
                && generation.is_multiple_of(config.mutation_escalation_interval)
            {
                mutation_rate = (mutation_rate * 1.1).min(config.mutation_rate_max);
            }
        }

        let generations = config.max_generations;
        Ok(finish(best, false, generations, resets, fitness_history))
    }
}

fn finish(
    best: Genome,
    solved: bool,
    generations: usize,
    resets: usize,
    fitness_history: Vec<usize>,
) -> GaResult {
    GaResult {
        best_fitness: best.fitness,
        best: best.genes,
        solved,
        generations,
        resets,
        fitness_history,
    }
}

fn fittest(population: &[Genome]) -> &Genome {
    population
        .iter()
        .min_by_key(|g| g.fitness)
        .expect("population is never empty")
}

fn random_population<R: Rng>(n: usize, size: usize, rng: &mut R) -> Vec<Genome> {
    (0..size)
        .map(|_| {
            let mut genes: Vec<usize> = (0..n).collect();
            genes.shuffle(rng);
            let fitness = evaluate(&genes);
            Genome { genes, fitness }
        })
        .collect()
}

/// Total excess conflicts of a genome, via the shared counter model.
fn evaluate(genes: &[usize]) -> usize {
    ConflictModel::from_permutation(genes.to_vec())
        .expect("genomes are permutations of 0..n")
        .conflict_excess()
}

/// Tournament selection: best of `k` random genomes.
fn tournament<R: Rng>(population: &[Genome], k: usize, rng: &mut R) -> usize {
    let mut best = rng.random_range(0..population.len());
    for _ in 1..k {
        let idx = rng.random_range(0..population.len());
        if population[idx].fitness < population[best].fitness {
            best = idx;
        }
    }
    best
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
        let result = GaRunner::run(1, &GaConfig::default().with_seed(1)).unwrap();
        assert!(result.solved);
        assert_eq!(result.best, vec![0]);
        assert_eq!(result.generations, 0);
    }

    #[test]
    fn test_eight_queens_solves() {
        let config = GaConfig::default().with_seed(42).with_max_generations(20_000);
        let result = GaRunner::run(8, &config).unwrap();
        assert!(result.solved, "expected a solution, got {result:?}");
        assert_eq!(result.best_fitness, 0);
        assert_valid_solution(&result.best);
    }

    #[test]
    fn test_degenerate_size_exhausts_generations() {
        let config = GaConfig::default()
            .with_seed(3)
            .with_population_size(20)
            .with_max_generations(200)
            .with_stagnation_limit(50);
        let result = GaRunner::run(3, &config).unwrap();
        assert!(!result.solved);
        assert_eq!(result.generations, 200);
        assert!(result.best_fitness > 0);
        assert!(result.resets >= 1, "stagnation resets should have fired");
    }

    #[test]
    fn test_fitness_history_non_increasing() {
        let config = GaConfig::default().with_seed(7).with_max_generations(20_000);
        let result = GaRunner::run(6, &config).unwrap();
        for window in result.fitness_history.windows(2) {
            assert!(window[1] <= window[0], "best fitness must never regress");
        }
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = GaRunner::run(0, &GaConfig::default()).unwrap_err();
        assert_eq!(err, QueensError::InvalidSize(0));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = GaRunner::run(8, &GaConfig::default().with_population_size(1)).unwrap_err();
        assert!(matches!(err, QueensError::InvalidConfig(_)));
    }

    #[test]
    fn test_seeded_runs_reproducible() {
        let config = GaConfig::default().with_seed(123).with_max_generations(5_000);
        let a = GaRunner::run(6, &config).unwrap();
        let b = GaRunner::run(6, &config).unwrap();
        assert_eq!(a, b);
    }
}
