//! Hill climbing configuration.

use crate::error::QueensError;

/// Configuration for the hill climbing solver.
///
/// # Builder Pattern
///
/// ```
/// use nqueens::hc::HcConfig;
///
/// let config = HcConfig::default()
///     .with_max_restarts(200)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcConfig {
    /// Maximum number of restart attempts before giving up.
    ///
    /// A defensive bound: for solvable sizes (every N except 2 and 3) the
    /// search is expected to finish long before this. Degenerate sizes
    /// consume the whole budget and report `solved == false`.
    pub max_restarts: usize,

    /// Steps allowed per attempt before reshuffling.
    ///
    /// `None` (the default) uses `2 * n` — long enough to repair a near
    /// solution, short enough not to grind inside a local optimum.
    pub steps_per_restart: Option<usize>,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for HcConfig {
    fn default() -> Self {
        Self {
            max_restarts: 1000,
            steps_per_restart: None,
            seed: None,
        }
    }
}

impl HcConfig {
    /// Sets the restart budget.
    pub fn with_max_restarts(mut self, n: usize) -> Self {
        self.max_restarts = n;
        self
    }

    /// Sets a fixed per-attempt step budget instead of the default `2n`.
    pub fn with_steps_per_restart(mut self, n: usize) -> Self {
        self.steps_per_restart = Some(n);
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
    /// Returns [`QueensError::InvalidConfig`] for a zero budget.
    pub fn validate(&self) -> Result<(), QueensError> {
        if self.max_restarts == 0 {
            return Err(QueensError::InvalidConfig(
                "max_restarts must be at least 1".into(),
            ));
        }
        if self.steps_per_restart == Some(0) {
            return Err(QueensError::InvalidConfig(
                "steps_per_restart must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HcConfig::default();
        assert_eq!(config.max_restarts, 1000);
        assert_eq!(config.steps_per_restart, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_restarts() {
        let config = HcConfig::default().with_max_restarts(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_steps() {
        let config = HcConfig::default().with_steps_per_restart(0);
        assert!(config.validate().is_err());
    }
}
