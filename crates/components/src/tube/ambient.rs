use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

/// Static conditions of the air at rest inside the tube.
///
/// Values are validated when a gas state is evaluated from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientConditions {
    pub static_pressure: Pressure,
    pub static_temperature: ThermodynamicTemperature,
}

impl AmbientConditions {
    #[must_use]
    pub fn new(static_pressure: Pressure, static_temperature: ThermodynamicTemperature) -> Self {
        Self {
            static_pressure,
            static_temperature,
        }
    }
}

/// Near-vacuum tube air: 99 Pa at 292.1 K.
impl Default for AmbientConditions {
    fn default() -> Self {
        Self::new(
            Pressure::new::<pascal>(99.0),
            ThermodynamicTemperature::new::<kelvin>(292.1),
        )
    }
}
