//! Compressible-flow gas properties for the Kantrowitz crates.
//!
//! The model is one-dimensional, steady, and calorically perfect:
//! an [`IdealGasFluid`] supplies `R` and `cp`, [`IdealGas`] turns static
//! conditions and a Mach number into a [`FlowState`], and [`isentropic`]
//! holds the closed-form relations between Mach number, area, and
//! stagnation conditions.
//!
//! [`IdealGasFluid`]: model::ideal_gas::IdealGasFluid
//! [`IdealGas`]: model::ideal_gas::IdealGas

mod error;
mod flow_state;
mod state;

pub mod fluid;
pub mod isentropic;
pub mod model;
pub mod units;

pub use error::StateError;
pub use flow_state::FlowState;
pub use state::State;
