use thiserror::Error;

/// Configuration for the secant solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_abs_tol: f64,
    residual_tol: f64,
    seed_step: f64,
}

/// Errors that can occur when validating a secant solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,

    #[error("residual_tol must be finite and non-negative")]
    Residual,

    #[error("seed_step must be finite and positive")]
    SeedStep,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 50,
            x_abs_tol: 1e-6,
            residual_tol: 1e-6,
            seed_step: 0.01,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// `seed_step` is the relative perturbation used to derive the second
    /// starting point from the single seed.
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance is negative or non-finite,
    /// or if `seed_step` is not strictly positive.
    pub fn new(
        max_iters: usize,
        x_abs_tol: f64,
        residual_tol: f64,
        seed_step: f64,
    ) -> Result<Self, ConfigError> {
        if !x_abs_tol.is_finite() || x_abs_tol < 0.0 {
            return Err(ConfigError::XAbs);
        }
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::Residual);
        }
        if !seed_step.is_finite() || seed_step <= 0.0 {
            return Err(ConfigError::SeedStep);
        }

        Ok(Self {
            max_iters,
            x_abs_tol,
            residual_tol,
            seed_step,
        })
    }

    /// Creates a config that uses one tolerance for both step size and residual.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite.
    pub fn with_tolerance(max_iters: usize, tolerance: f64) -> Result<Self, ConfigError> {
        Self::new(max_iters, tolerance, tolerance, Self::default().seed_step)
    }

    /// Returns the maximum number of iterations after the two seed evaluations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance on the change between successive iterates.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the tolerance on the residual magnitude.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    /// Returns the relative seed perturbation.
    #[must_use]
    pub fn seed_step(&self) -> f64 {
        self.seed_step
    }
}
