use kantrowitz_solvers::equation::secant;
use kantrowitz_thermo::StateError;
use thiserror::Error;

/// Errors that can occur when constructing a [`Geometry`].
///
/// [`Geometry`]: super::Geometry
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("tube radius must be positive and finite, got {meters} m")]
    TubeRadius { meters: f64 },

    #[error("inlet radius must be positive and finite, got {meters} m")]
    InletRadius { meters: f64 },

    /// The inlet fills the tube, leaving no bypass area.
    #[error("inlet radius ({inlet_meters} m) must be smaller than tube radius ({tube_meters} m)")]
    NoBypass { tube_meters: f64, inlet_meters: f64 },
}

/// Errors that can occur when computing the Kantrowitz limit.
#[derive(Debug, Error)]
pub enum ChokeError {
    #[error("invalid gas state: {0}")]
    InvalidState(#[from] StateError),

    #[error("invalid geometry: {0}")]
    Geometry(#[from] GeometryError),

    #[error("invalid solver config: {0}")]
    InvalidConfig(#[from] secant::ConfigError),

    /// The limit Mach solve used its iteration budget without meeting tolerance.
    #[error("limit Mach did not converge in {iters} iterations (best M = {mach}, residual = {residual})")]
    Convergence {
        iters: usize,
        mach: f64,
        residual: f64,
    },

    /// The secant slope degenerated and the search interval has no sign
    /// change to bisect, so the limit Mach lies outside it.
    #[error(
        "limit Mach is not bracketed: f({low_mach}) = {low_residual}, f({high_mach}) = {high_residual}"
    )]
    Unbracketed {
        low_mach: f64,
        high_mach: f64,
        low_residual: f64,
        high_residual: f64,
    },

    #[error("limit Mach solve failed: {0}")]
    Solver(secant::Error),
}

impl ChokeError {
    /// Returns true if the limit Mach solve ran but found no root.
    #[must_use]
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, Self::Convergence { .. } | Self::Unbracketed { .. })
    }
}

impl From<secant::Error> for ChokeError {
    fn from(error: secant::Error) -> Self {
        match error {
            secant::Error::NoBracket {
                left,
                right,
                left_residual,
                right_residual,
            } => Self::Unbracketed {
                low_mach: left,
                high_mach: right,
                low_residual: left_residual,
                high_residual: right_residual,
            },
            other => Self::Solver(other),
        }
    }
}
