//! SA configuration.

use crate::error::QueensError;

/// Configuration for the simulated annealing solver.
///
/// The starting temperature and the reheat target are derived from the
/// board size at run time (`1 - 1/(10n)` and `2n` respectively), so they
/// are not configuration fields.
///
/// # Builder Pattern
///
/// ```
/// use nqueens::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_max_steps(1_000_000)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Steps between hard restarts (reshuffle + temperature reset).
    pub restart_interval: usize,

    /// Geometric cooling factor applied every step, in (0, 1).
    pub cooling_factor: f64,

    /// Temperature floor. Dropping below it triggers a reheat to `2n`.
    pub reheat_threshold: f64,

    /// Hard step budget. 0 means unbounded: the loop runs until solved or
    /// cancelled. Callers that need a guaranteed return set this.
    pub max_steps: usize,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            restart_interval: 500_000,
            cooling_factor: 0.999,
            reheat_threshold: 0.1,
            max_steps: 0,
            seed: None,
        }
    }
}

impl SaConfig {
    /// Sets the steps between hard restarts.
    pub fn with_restart_interval(mut self, n: usize) -> Self {
        self.restart_interval = n;
        self
    }

    /// Sets the geometric cooling factor.
    pub fn with_cooling_factor(mut self, factor: f64) -> Self {
        self.cooling_factor = factor;
        self
    }

    /// Sets the reheat threshold.
    pub fn with_reheat_threshold(mut self, t: f64) -> Self {
        self.reheat_threshold = t;
        self
    }

    /// Sets the hard step budget (0 = unbounded).
    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
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
        if self.restart_interval == 0 {
            return Err(QueensError::InvalidConfig(
                "restart_interval must be at least 1".into(),
            ));
        }
        if self.cooling_factor <= 0.0 || self.cooling_factor >= 1.0 {
            return Err(QueensError::InvalidConfig(format!(
                "cooling_factor must be in (0, 1), got {}",
                self.cooling_factor
            )));
        }
        if self.reheat_threshold <= 0.0 {
            return Err(QueensError::InvalidConfig(format!(
                "reheat_threshold must be positive, got {}",
                self.reheat_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert_eq!(config.restart_interval, 500_000);
        assert!((config.cooling_factor - 0.999).abs() < 1e-12);
        assert!((config.reheat_threshold - 0.1).abs() < 1e-12);
        assert_eq!(config.max_steps, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_interval() {
        let config = SaConfig::default().with_restart_interval(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_cooling_factor() {
        assert!(SaConfig::default()
            .with_cooling_factor(1.0)
            .validate()
            .is_err());
        assert!(SaConfig::default()
            .with_cooling_factor(0.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_threshold() {
        let config = SaConfig::default().with_reheat_threshold(0.0);
        assert!(config.validate().is_err());
    }
}
