use kantrowitz_core::Model;
use kantrowitz_solvers::equation::secant;
use kantrowitz_thermo::{FlowState, fluid::Air, model::ideal_gas::IdealGasFluid};
use serde::Serialize;
use tracing::{debug, trace, warn};
use uom::si::{
    f64::{MassRate, Velocity},
    mass_rate::kilogram_per_second,
    velocity::meter_per_second,
};

use super::{
    AmbientConditions, ChokeError, Geometry,
    limit_mach::{LimitMachProblem, TubeAir},
};

/// Tolerance used by [`compute_choke_limit`] callers that have no preference.
///
/// [`compute_choke_limit`]: super::compute_choke_limit
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Iteration budget used by [`compute_choke_limit`] callers that have no preference.
///
/// [`compute_choke_limit`]: super::compute_choke_limit
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// Starting guess for the limit Mach solve.
pub const LIMIT_MACH_SEED: f64 = 0.3;

/// Lower bound of the limit Mach search.
///
/// The area-Mach relation is singular at zero, so the search stops just above it.
pub const MIN_LIMIT_MACH: f64 = 1e-6;

/// Upper bound of the limit Mach search.
pub const MAX_LIMIT_MACH: f64 = 1.0;

/// Operating point of a pod in a tube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeLimitInput {
    pub geometry: Geometry,
    pub ambient: AmbientConditions,
    /// Mach number the pod travels at, relative to the tube air.
    pub pod_mach: f64,
    /// Mach number of the flow through the bypass.
    pub bypass_mach: f64,
}

impl Default for TubeLimitInput {
    fn default() -> Self {
        Self {
            geometry: Geometry::default(),
            ambient: AmbientConditions::default(),
            pod_mach: 1.0,
            bypass_mach: 0.95,
        }
    }
}

/// Kantrowitz limit of one operating point.
///
/// Quantities serialize in SI base units: m/s and kg/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChokeResult {
    /// Pod Mach number at which the bypass chokes.
    pub limit_mach: f64,
    /// Travel speed at `limit_mach`.
    pub limit_speed: Velocity,
    /// Mass flow swept up by the full tube cross-section at the pod's Mach number.
    pub tube_demand_flow: MassRate,
    /// Mass flow the bypass carries at the bypass Mach number.
    pub kantrowitz_limit_flow: MassRate,
    /// `tube_demand_flow − kantrowitz_limit_flow`.
    pub excess_flow: MassRate,
}

/// Computes the Kantrowitz limit of a pod traveling through a tube.
///
/// The limit Mach number is found with the secant solver, starting at
/// [`LIMIT_MACH_SEED`] and searching `[MIN_LIMIT_MACH, MAX_LIMIT_MACH]`.
/// Flows at the pod and bypass Mach numbers are evaluated from the same
/// ambient conditions; the bypass flow uses the caller's `bypass_mach`
/// rather than sonic conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct TubeLimitFlow<F = Air> {
    fluid: F,
    solver: secant::Config,
}

impl TubeLimitFlow<Air> {
    /// Creates a model of air with the default solver config.
    #[must_use]
    pub fn air() -> Self {
        Self::new(Air)
    }
}

impl Default for TubeLimitFlow<Air> {
    fn default() -> Self {
        Self::air()
    }
}

impl<F> TubeLimitFlow<F> {
    #[must_use]
    pub fn new(fluid: F) -> Self {
        Self {
            fluid,
            solver: secant::Config::default(),
        }
    }

    /// Replaces the limit Mach solver config.
    #[must_use]
    pub fn with_solver(self, solver: secant::Config) -> Self {
        Self { solver, ..self }
    }

    #[must_use]
    pub fn fluid(&self) -> &F {
        &self.fluid
    }

    #[must_use]
    pub fn solver(&self) -> &secant::Config {
        &self.solver
    }
}

impl<F: IdealGasFluid + Clone> Model for TubeLimitFlow<F> {
    type Input = TubeLimitInput;
    type Output = ChokeResult;
    type Error = ChokeError;

    fn call(&self, input: &TubeLimitInput) -> Result<ChokeResult, ChokeError> {
        let TubeLimitInput {
            geometry,
            ambient,
            pod_mach,
            bypass_mach,
        } = *input;

        let air = TubeAir {
            fluid: &self.fluid,
            ambient,
        };

        // Bad ambient conditions or Mach numbers fail here, before the solve.
        let demand = air.call(&pod_mach)?;
        let bypass = air.call(&bypass_mach)?;

        let area_ratio = geometry.area_ratio();
        let solution = secant::solve(
            &air,
            &LimitMachProblem::new(area_ratio),
            LIMIT_MACH_SEED,
            [MIN_LIMIT_MACH, MAX_LIMIT_MACH],
            &self.solver,
            |event: &secant::Event<'_, f64, FlowState<F>>| -> Option<secant::Action> {
                trace!(
                    iter = event.iter,
                    step = ?event.step,
                    mach = event.x(),
                    residual = event.residual(),
                    "limit Mach iteration"
                );
                None
            },
        )?;

        // Unbracketed roots surface through `From<secant::Error>` as a
        // convergence failure; an exhausted budget is caught here.
        if !solution.is_converged() {
            warn!(
                iters = solution.iters,
                mach = solution.x,
                residual = solution.residual,
                area_ratio,
                "limit Mach did not converge"
            );
            return Err(ChokeError::Convergence {
                iters: solution.iters,
                mach: solution.x,
                residual: solution.residual,
            });
        }

        let tube_demand_flow = demand.mass_rate(geometry.tube_area());
        let kantrowitz_limit_flow = bypass.mass_rate(geometry.bypass_area());

        let result = ChokeResult {
            limit_mach: solution.x,
            limit_speed: solution.snapshot.output.velocity,
            tube_demand_flow,
            kantrowitz_limit_flow,
            excess_flow: tube_demand_flow - kantrowitz_limit_flow,
        };

        debug!(
            area_ratio,
            iters = solution.iters,
            limit_mach = result.limit_mach,
            limit_speed_mps = result.limit_speed.get::<meter_per_second>(),
            excess_flow_kgps = result.excess_flow.get::<kilogram_per_second>(),
            "computed Kantrowitz limit"
        );

        Ok(result)
    }
}
