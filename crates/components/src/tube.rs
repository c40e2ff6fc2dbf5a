//! Kantrowitz limit of a pod traveling through a cylindrical tube.
//!
//! Air displaced by the pod has to pass through the annular bypass between
//! the pod's inlet and the tube wall. The bypass chokes when the isentropic
//! area ratio `A/A*` at the flow's Mach number equals `tube_area / bypass_area`;
//! [`TubeLimitFlow`] solves for that limiting Mach number and compares the
//! mass flow the pod sweeps up with the flow the bypass can carry.
//!
//! ```ignore
//! use kantrowitz_components::tube::{AmbientConditions, Geometry, compute_choke_limit};
//!
//! let geometry = Geometry::new(
//!     Length::new::<centimeter>(100.0),
//!     Length::new::<centimeter>(73.7),
//! )?;
//! let ambient = AmbientConditions::new(
//!     Pressure::new::<pascal>(99.0),
//!     ThermodynamicTemperature::new::<kelvin>(292.1),
//! );
//!
//! let result = compute_choke_limit(geometry, ambient, 1.0, 0.95, 1e-6, 50)?;
//! assert!(result.excess_flow.value > 0.0);
//! ```

mod ambient;
mod error;
mod geometry;
mod limit_flow;
mod limit_mach;

pub mod sweep;

pub use ambient::AmbientConditions;
pub use error::{ChokeError, GeometryError};
pub use geometry::Geometry;
pub use limit_flow::{
    ChokeResult, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, LIMIT_MACH_SEED, MAX_LIMIT_MACH,
    MIN_LIMIT_MACH, TubeLimitFlow, TubeLimitInput,
};

use kantrowitz_core::Model;
use kantrowitz_solvers::equation::secant;

/// Computes the Kantrowitz limit for one operating point using air.
///
/// `tolerance` applies to both the residual and the step between successive
/// iterates of the limit Mach solve; `max_iterations` bounds that solve.
///
/// # Errors
///
/// Returns a [`ChokeError`] if the tolerance is invalid, the ambient
/// conditions or Mach numbers are invalid, or the limit Mach solve fails.
pub fn compute_choke_limit(
    geometry: Geometry,
    ambient: AmbientConditions,
    pod_mach: f64,
    bypass_mach: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<ChokeResult, ChokeError> {
    let solver = secant::Config::with_tolerance(max_iterations, tolerance)?;
    let model = TubeLimitFlow::air().with_solver(solver);

    model.call(&TubeLimitInput {
        geometry,
        ambient,
        pod_mach,
        bypass_mach,
    })
}
