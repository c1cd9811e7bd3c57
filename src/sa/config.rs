//! Annealing configuration.

use crate::error::AnnealError;

/// Configuration for the annealing run.
///
/// Cooling is geometric: the temperature is multiplied by `cooling_factor`
/// once per iteration, whatever the acceptance outcome.
///
/// # Examples
///
/// ```
/// use u_tour::sa::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_iterations(50_000)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealConfig {
    /// Starting temperature. Higher values accept more worsening moves early.
    pub initial_temperature: f64,

    /// Geometric decay factor applied every iteration. Must be in (0, 1).
    pub cooling_factor: f64,

    /// Number of annealing iterations per `optimize` call.
    pub iterations: usize,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1.0,
            cooling_factor: 0.99,
            iterations: 1000,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, factor: f64) -> Self {
        self.cooling_factor = factor;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), AnnealError> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(AnnealError::InvalidParameter {
                param: "initial_temperature",
                value: self.initial_temperature.to_string(),
                constraint: "must be positive and finite",
            });
        }
        if !(self.cooling_factor > 0.0 && self.cooling_factor < 1.0) {
            return Err(AnnealError::InvalidParameter {
                param: "cooling_factor",
                value: self.cooling_factor.to_string(),
                constraint: "must be in (0, 1)",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert!((config.initial_temperature - 1.0).abs() < 1e-10);
        assert!((config.cooling_factor - 0.99).abs() < 1e-10);
        assert_eq!(config.iterations, 1000);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builders() {
        let config = AnnealConfig::default()
            .with_initial_temperature(2.5)
            .with_cooling_factor(0.95)
            .with_iterations(42)
            .with_seed(9);
        assert!((config.initial_temperature - 2.5).abs() < 1e-10);
        assert!((config.cooling_factor - 0.95).abs() < 1e-10);
        assert_eq!(config.iterations, 42);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = AnnealConfig::default().with_initial_temperature(0.0);
        assert!(config.validate().is_err());
        let config = AnnealConfig::default().with_initial_temperature(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_cooling_factor() {
        for bad in [0.0, 1.0, 1.5, -0.1, f64::NAN] {
            let config = AnnealConfig::default().with_cooling_factor(bad);
            assert!(config.validate().is_err(), "factor {bad} should be rejected");
        }
    }

    #[test]
    fn test_zero_iterations_is_valid() {
        let config = AnnealConfig::default().with_iterations(0);
        assert!(config.validate().is_ok());
    }
}
