//! Evaluates the tube model across a range of pod Mach numbers.

use kantrowitz_core::Model;
use serde::Serialize;

use super::{ChokeResult, TubeLimitInput};

/// One row of a pod Mach sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub pod_mach: f64,
    pub result: ChokeResult,
}

/// Returns the pod Mach numbers 0.1, 0.2, …, 1.0.
#[must_use]
pub fn reference_pod_machs() -> Vec<f64> {
    (1..=10).map(|tenths| f64::from(tenths) / 10.0).collect()
}

/// Calls `model` once per pod Mach number, holding the rest of `base` fixed.
///
/// # Errors
///
/// Stops at and returns the first model error.
pub fn pod_mach_sweep<M>(
    model: &M,
    base: &TubeLimitInput,
    pod_machs: &[f64],
) -> Result<Vec<SweepPoint>, M::Error>
where
    M: Model<Input = TubeLimitInput, Output = ChokeResult>,
{
    pod_machs
        .iter()
        .map(|&pod_mach| {
            let input = TubeLimitInput { pod_mach, ..*base };
            model
                .call(&input)
                .map(|result| SweepPoint { pod_mach, result })
        })
        .collect()
}
