use uom::si::f64::SpecificHeatCapacity;

use crate::{model::ideal_gas::IdealGasFluid, units::SpecificGasConstant};

/// User-defined ideal gas.
#[derive(Debug, Clone, PartialEq)]
pub struct IdealGasCustom {
    /// Optional name for identification.
    pub name: Option<String>,

    /// Specific gas constant.
    pub specific_gas_constant: SpecificGasConstant,

    /// Specific heat capacity at constant pressure.
    pub cp: SpecificHeatCapacity,
}

impl IdealGasCustom {
    /// Creates an unnamed gas from its gas constant and `cp`.
    #[must_use]
    pub fn new(specific_gas_constant: SpecificGasConstant, cp: SpecificHeatCapacity) -> Self {
        Self {
            name: None,
            specific_gas_constant,
            cp,
        }
    }

    /// Returns the gas with the given name attached.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }
}

impl IdealGasFluid for IdealGasCustom {
    fn gas_constant(&self) -> SpecificGasConstant {
        self.specific_gas_constant
    }

    fn cp(&self) -> SpecificHeatCapacity {
        self.cp
    }
}
