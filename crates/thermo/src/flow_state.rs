use uom::si::{
    f64::{Area, MassDensity, MassRate, Pressure, ThermodynamicTemperature, Velocity},
    thermodynamic_temperature::kelvin,
};

use crate::{State, isentropic, units::MassFlux};

/// A gas moving at a given Mach number.
///
/// Created by [`IdealGas::flow_state`] or [`IdealGas::static_flow`] as an
/// immutable value; evaluating another Mach number produces a new state.
///
/// [`IdealGas::flow_state`]: crate::model::ideal_gas::IdealGas::flow_state
/// [`IdealGas::static_flow`]: crate::model::ideal_gas::IdealGas::static_flow
#[derive(Debug, Clone, PartialEq)]
pub struct FlowState<Fluid> {
    /// Static temperature, static density, and fluid.
    pub state: State<Fluid>,
    /// Static pressure.
    pub pressure: Pressure,
    pub mach: f64,
    /// Ratio of specific heats.
    pub gamma: f64,
    pub speed_of_sound: Velocity,
    /// Flow speed, `mach · speed_of_sound`.
    pub velocity: Velocity,
}

impl<Fluid> FlowState<Fluid> {
    /// Returns the static temperature.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.state.temperature
    }

    /// Returns the static density.
    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.state.density
    }

    /// Returns the mass flow per unit area, `ρ·V`.
    #[must_use]
    pub fn mass_flux(&self) -> MassFlux {
        self.state.density * self.velocity
    }

    /// Returns the mass flow `ρ·V·A` through a cross-section of the given area.
    #[must_use]
    pub fn mass_rate(&self, area: Area) -> MassRate {
        self.state.density * self.velocity * area
    }

    /// Returns the stagnation temperature reached by bringing the flow to rest isentropically.
    #[must_use]
    pub fn total_temperature(&self) -> ThermodynamicTemperature {
        let ratio = isentropic::temperature_ratio(self.mach, self.gamma);
        ThermodynamicTemperature::new::<kelvin>(self.state.temperature.get::<kelvin>() * ratio)
    }

    /// Returns the stagnation pressure reached by bringing the flow to rest isentropically.
    #[must_use]
    pub fn total_pressure(&self) -> Pressure {
        self.pressure * isentropic::pressure_ratio(self.mach, self.gamma)
    }
}
