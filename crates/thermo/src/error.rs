use thiserror::Error;

/// Errors that may occur when evaluating a gas state.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StateError {
    /// Static pressure is zero, negative, or not finite.
    #[error("static pressure must be positive and finite, got {pascals} Pa")]
    NonPositivePressure { pascals: f64 },

    /// Static temperature is zero, negative, or not finite.
    #[error("static temperature must be positive and finite, got {kelvin} K")]
    NonPositiveTemperature { kelvin: f64 },

    /// The Mach number is outside the domain of the relation being evaluated.
    #[error("invalid Mach number: {mach}")]
    InvalidMach { mach: f64 },

    /// The ratio of specific heats is not greater than one.
    #[error("ratio of specific heats must be greater than 1, got {gamma}")]
    InvalidGamma { gamma: f64 },
}
