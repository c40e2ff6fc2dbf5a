use uom::si::{
    f64::{MassDensity, Pressure, SpecificHeatCapacity, ThermodynamicTemperature, Velocity},
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::{FlowState, State, StateError, isentropic::check_gamma, units::SpecificGasConstant};

/// Trait used to define thermodynamic constants for ideal gases.
///
/// Provides the fixed properties required to model a fluid as a calorically
/// perfect gas: the specific gas constant `R` and the constant pressure heat
/// capacity `cp`.
///
/// Implemented for [`Air`] and [`IdealGasCustom`], and for any custom fluid
/// that can be modeled as an ideal gas:
///
/// ```ignore
/// use kantrowitz_thermo::{model::ideal_gas::IdealGasFluid, units::SpecificGasConstant};
/// use uom::si::f64::SpecificHeatCapacity;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// struct MyGas;
///
/// impl IdealGasFluid for MyGas {
///     fn gas_constant(&self) -> SpecificGasConstant { /* ... */ }
///     fn cp(&self) -> SpecificHeatCapacity { /* ... */ }
/// }
/// ```
///
/// [`Air`]: crate::fluid::Air
/// [`IdealGasCustom`]: crate::fluid::IdealGasCustom
pub trait IdealGasFluid {
    /// Returns the specific gas constant `R`.
    fn gas_constant(&self) -> SpecificGasConstant;

    /// Returns the specific heat capacity at constant pressure `cp`.
    fn cp(&self) -> SpecificHeatCapacity;

    /// Returns the ratio of specific heats `γ = cp / (cp − R)`.
    fn gamma(&self) -> f64 {
        let cp = self.cp();
        (cp / (cp - self.gas_constant())).value
    }
}

/// A fluid property model using ideal gas assumptions.
///
/// Assumes ideal gas behavior and constant specific heats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdealGas;

impl IdealGas {
    /// Computes pressure using the ideal gas law.
    #[must_use]
    pub fn pressure(
        temperature: ThermodynamicTemperature,
        density: MassDensity,
        gas_constant: SpecificGasConstant,
    ) -> Pressure {
        density * gas_constant * temperature
    }

    /// Computes density using the ideal gas law.
    #[must_use]
    pub fn density(
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        gas_constant: SpecificGasConstant,
    ) -> MassDensity {
        pressure / (gas_constant * temperature)
    }

    /// Computes the speed of sound `a = √(γ·R·T)`.
    #[must_use]
    pub fn speed_of_sound(
        temperature: ThermodynamicTemperature,
        gamma: f64,
        gas_constant: SpecificGasConstant,
    ) -> Velocity {
        let r = gas_constant.get::<joule_per_kilogram_kelvin>();
        let t = temperature.get::<kelvin>();
        Velocity::new::<meter_per_second>((gamma * r * t).sqrt())
    }

    /// Creates a static state from temperature and pressure.
    ///
    /// # Errors
    ///
    /// Returns a [`StateError`] if the pressure or temperature is not
    /// positive and finite.
    pub fn state_from<F: IdealGasFluid>(
        &self,
        fluid: F,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<State<F>, StateError> {
        check_static(temperature, pressure)?;
        let density = IdealGas::density(temperature, pressure, fluid.gas_constant());

        Ok(State::new(temperature, density, fluid))
    }

    /// Creates a flow state by moving a static state at Mach number `mach`.
    ///
    /// # Errors
    ///
    /// Returns a [`StateError`] if `mach` is negative or non-finite, or if the
    /// fluid's ratio of specific heats is not greater than one.
    pub fn flow_state<F: IdealGasFluid>(
        &self,
        state: State<F>,
        mach: f64,
    ) -> Result<FlowState<F>, StateError> {
        let pressure =
            IdealGas::pressure(state.temperature, state.density, state.fluid.gas_constant());
        moving(state, pressure, mach)
    }

    /// Evaluates the flow state at static temperature, static pressure, and Mach number.
    ///
    /// Each call builds a fresh state from its arguments alone.
    ///
    /// # Errors
    ///
    /// Returns a [`StateError`] if the pressure or temperature is not positive
    /// and finite, or if `mach` is negative or non-finite.
    pub fn static_flow<F: IdealGasFluid>(
        &self,
        fluid: F,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        mach: f64,
    ) -> Result<FlowState<F>, StateError> {
        let state = self.state_from(fluid, temperature, pressure)?;
        moving(state, pressure, mach)
    }
}

fn check_static(
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
) -> Result<(), StateError> {
    let pascals = pressure.get::<pascal>();
    if !pascals.is_finite() || pascals <= 0.0 {
        return Err(StateError::NonPositivePressure { pascals });
    }

    let absolute = temperature.get::<kelvin>();
    if !absolute.is_finite() || absolute <= 0.0 {
        return Err(StateError::NonPositiveTemperature { kelvin: absolute });
    }

    Ok(())
}

fn moving<F: IdealGasFluid>(
    state: State<F>,
    pressure: Pressure,
    mach: f64,
) -> Result<FlowState<F>, StateError> {
    if !mach.is_finite() || mach < 0.0 {
        return Err(StateError::InvalidMach { mach });
    }

    let gamma = state.fluid.gamma();
    check_gamma(gamma)?;

    let speed_of_sound =
        IdealGas::speed_of_sound(state.temperature, gamma, state.fluid.gas_constant());

    Ok(FlowState {
        velocity: speed_of_sound * mach,
        speed_of_sound,
        mach,
        gamma,
        pressure,
        state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        mass_density::kilogram_per_cubic_meter,
        pressure::{kilopascal, psi},
        thermodynamic_temperature::{degree_celsius, degree_rankine},
    };

    use crate::fluid::{Air, IdealGasCustom};

    fn mock_gas() -> IdealGasCustom {
        IdealGasCustom::new(
            SpecificGasConstant::new::<joule_per_kilogram_kelvin>(400.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1400.0),
        )
        .with_name("mock")
    }

    #[test]
    fn custom_gas_gamma() {
        // cp / cv = 1400 / 1000
        assert_relative_eq!(mock_gas().gamma(), 1.4, epsilon = 1e-12);
    }

    #[test]
    fn state_from_uses_ideal_gas_law() {
        let state = IdealGas
            .state_from(
                mock_gas(),
                ThermodynamicTemperature::new::<kelvin>(250.0),
                Pressure::new::<kilopascal>(100.0),
            )
            .unwrap();

        // ρ = P / (R·T) = 100,000 / (400 · 250) = 1.0
        assert_relative_eq!(state.density.get::<kilogram_per_cubic_meter>(), 1.0);
        assert_eq!(state.fluid.name.as_deref(), Some("mock"));
    }

    #[test]
    fn flow_state_hand_calculation() {
        let state = IdealGas
            .state_from(
                mock_gas(),
                ThermodynamicTemperature::new::<kelvin>(250.0),
                Pressure::new::<kilopascal>(100.0),
            )
            .unwrap();

        let flow = IdealGas.flow_state(state, 0.5).unwrap();

        // a = √(1.4 · 400 · 250) = √140,000 = 374.166
        assert_relative_eq!(
            flow.speed_of_sound.get::<meter_per_second>(),
            140_000.0_f64.sqrt(),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            flow.velocity.get::<meter_per_second>(),
            0.5 * 140_000.0_f64.sqrt(),
            epsilon = 1e-9
        );
        assert_relative_eq!(flow.pressure.get::<kilopascal>(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(flow.gamma, 1.4, epsilon = 1e-12);
    }

    #[test]
    fn units_are_interchangeable() {
        let si = IdealGas
            .static_flow(
                Air,
                ThermodynamicTemperature::new::<kelvin>(292.1),
                Pressure::new::<pascal>(99.0),
                0.8,
            )
            .unwrap();

        let imperial = IdealGas
            .static_flow(
                Air,
                ThermodynamicTemperature::new::<degree_rankine>(292.1 * 1.8),
                Pressure::new::<psi>(99.0 * 0.000_145_037_738),
                0.8,
            )
            .unwrap();

        assert_relative_eq!(
            si.density().get::<kilogram_per_cubic_meter>(),
            imperial.density().get::<kilogram_per_cubic_meter>(),
            max_relative = 1e-8
        );
        assert_relative_eq!(
            si.velocity.get::<meter_per_second>(),
            imperial.velocity.get::<meter_per_second>(),
            max_relative = 1e-8
        );
    }

    #[test]
    fn rejects_non_positive_pressure() {
        let result = IdealGas.static_flow(
            Air,
            ThermodynamicTemperature::new::<kelvin>(292.1),
            Pressure::new::<pascal>(0.0),
            0.5,
        );
        assert_eq!(
            result.unwrap_err(),
            StateError::NonPositivePressure { pascals: 0.0 }
        );
    }

    #[test]
    fn rejects_non_positive_temperature() {
        let at_absolute_zero = IdealGas.static_flow(
            Air,
            ThermodynamicTemperature::new::<kelvin>(0.0),
            Pressure::new::<pascal>(99.0),
            0.5,
        );
        assert!(matches!(
            at_absolute_zero,
            Err(StateError::NonPositiveTemperature { .. })
        ));

        let below_absolute_zero = IdealGas.static_flow(
            Air,
            ThermodynamicTemperature::new::<degree_celsius>(-300.0),
            Pressure::new::<pascal>(99.0),
            0.5,
        );
        assert!(matches!(
            below_absolute_zero,
            Err(StateError::NonPositiveTemperature { .. })
        ));
    }

    #[test]
    fn rejects_negative_mach() {
        let result = IdealGas.static_flow(
            Air,
            ThermodynamicTemperature::new::<kelvin>(292.1),
            Pressure::new::<pascal>(99.0),
            -0.1,
        );
        assert!(matches!(result, Err(StateError::InvalidMach { .. })));
    }

    #[test]
    fn gas_at_rest_has_no_velocity() {
        let flow = IdealGas
            .static_flow(
                Air,
                ThermodynamicTemperature::new::<kelvin>(292.1),
                Pressure::new::<pascal>(99.0),
                0.0,
            )
            .unwrap();

        assert_relative_eq!(flow.velocity.get::<meter_per_second>(), 0.0);
        assert!(flow.speed_of_sound.get::<meter_per_second>() > 0.0);
    }
}
