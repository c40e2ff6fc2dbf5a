use std::marker::PhantomData;

use kantrowitz_core::{EquationProblem, Model};
use kantrowitz_thermo::{
    FlowState, StateError, isentropic,
    model::ideal_gas::{IdealGas, IdealGasFluid},
};

use super::AmbientConditions;

/// Tube air at fixed static conditions, evaluated at a trial Mach number.
pub(super) struct TubeAir<'a, F> {
    pub(super) fluid: &'a F,
    pub(super) ambient: AmbientConditions,
}

impl<F: IdealGasFluid + Clone> Model for TubeAir<'_, F> {
    type Input = f64;
    type Output = FlowState<F>;
    type Error = StateError;

    fn call(&self, mach: &f64) -> Result<FlowState<F>, StateError> {
        IdealGas.static_flow(
            self.fluid.clone(),
            self.ambient.static_temperature,
            self.ambient.static_pressure,
            *mach,
        )
    }
}

/// Drives `A/A*(M, γ) − tube_area / bypass_area` to zero.
pub(super) struct LimitMachProblem<F> {
    target_area_ratio: f64,
    _fluid: PhantomData<fn() -> F>,
}

impl<F> LimitMachProblem<F> {
    pub(super) fn new(target_area_ratio: f64) -> Self {
        Self {
            target_area_ratio,
            _fluid: PhantomData,
        }
    }
}

impl<F> EquationProblem<1> for LimitMachProblem<F> {
    type Input = f64;
    type Output = FlowState<F>;
    type Error = StateError;

    fn input(&self, x: &[f64; 1]) -> Result<f64, StateError> {
        Ok(x[0])
    }

    fn residuals(&self, mach: &f64, flow: &FlowState<F>) -> Result<[f64; 1], StateError> {
        let area_ratio = isentropic::area_ratio(*mach, flow.gamma)?;
        Ok([area_ratio - self.target_area_ratio])
    }
}
