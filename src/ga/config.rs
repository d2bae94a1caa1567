//! GA configuration.

use crate::error::QueensError;

/// Configuration for the genetic algorithm.
///
/// # Builder Pattern
///
/// ```
/// use nqueens::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_mutation_rate(0.15)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of genomes in the population.
    pub population_size: usize,

    /// Maximum generations before giving up.
    pub max_generations: usize,

    /// Tournament size for parent selection. Higher = stronger pressure.
    pub tournament_size: usize,

    /// Probability of mutating an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Ceiling for the escalated mutation rate.
    pub mutation_rate_max: f64,

    /// Every this many generations the mutation rate is multiplied by 1.1
    /// (capped at `mutation_rate_max`). 0 disables escalation.
    pub mutation_escalation_interval: usize,

    /// Generations without improvement before the population is rebuilt
    /// from scratch and the mutation rate restored. 0 disables resets.
    pub stagnation_limit: usize,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 100_000,
            tournament_size: 5,
            mutation_rate: 0.1,
            mutation_rate_max: 0.5,
            mutation_escalation_interval: 10_000,
            stagnation_limit: 1000,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the base mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the stagnation limit (0 disables resets).
    pub fn with_stagnation_limit(mut self, n: usize) -> Self {
        self.stagnation_limit = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`QueensError::InvalidConfig`] for out-of-range fields.
    pub fn validate(&self) -> Result<(), QueensError> {
        if self.population_size < 2 {
            return Err(QueensError::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if self.max_generations == 0 {
            return Err(QueensError::InvalidConfig(
                "max_generations must be at least 1".into(),
            ));
        }
        if self.tournament_size == 0 {
            return Err(QueensError::InvalidConfig(
                "tournament_size must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(QueensError::InvalidConfig(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.mutation_rate_max < self.mutation_rate || self.mutation_rate_max > 1.0 {
            return Err(QueensError::InvalidConfig(format!(
                "mutation_rate_max must be in [mutation_rate, 1], got {}",
                self.mutation_rate_max
            )));
        }
        Ok(())
    }
}
