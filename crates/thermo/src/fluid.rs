mod air;
mod custom;

pub use air::Air;
pub use custom::IdealGasCustom;
