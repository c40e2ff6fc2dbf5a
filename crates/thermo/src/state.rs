use uom::si::f64::{MassDensity, ThermodynamicTemperature};

/// Static thermodynamic state of a fluid.
///
/// The `fluid` field can be a simple marker type, such as [`Air`], or a
/// structured type carrying its own constants, such as [`IdealGasCustom`].
///
/// [`Air`]: crate::fluid::Air
/// [`IdealGasCustom`]: crate::fluid::IdealGasCustom
#[derive(Debug, Clone, PartialEq)]
pub struct State<Fluid> {
    pub temperature: ThermodynamicTemperature,
    pub density: MassDensity,
    pub fluid: Fluid,
}

impl<Fluid> State<Fluid> {
    /// Creates a new state with the given temperature, density, and fluid.
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, density: MassDensity, fluid: Fluid) -> Self {
        Self {
            temperature,
            density,
            fluid,
        }
    }
}
