//! Closed-form relations for one-dimensional isentropic flow of a
//! calorically perfect gas.

use crate::StateError;

/// Returns the area ratio `A / A*` at Mach number `mach`.
///
/// `A*` is the sonic (throat) area that passes the same mass flow at the same
/// stagnation conditions:
///
/// ```text
/// A/A* = ((γ+1)/2)^(-e) · (1 + (γ-1)/2 · M²)^e / M,   e = (γ+1) / (2(γ-1))
/// ```
///
/// The ratio has its minimum of 1 at `M = 1` and is strictly decreasing for
/// subsonic Mach numbers.
///
/// # Errors
///
/// Returns [`StateError::InvalidMach`] unless `mach` is positive and finite,
/// and [`StateError::InvalidGamma`] unless `gamma` is finite and greater than 1.
pub fn area_ratio(mach: f64, gamma: f64) -> Result<f64, StateError> {
    check_gamma(gamma)?;
    if !mach.is_finite() || mach <= 0.0 {
        return Err(StateError::InvalidMach { mach });
    }

    let exponent = (gamma + 1.0) / (2.0 * (gamma - 1.0));
    let sonic = ((gamma + 1.0) / 2.0).powf(-exponent);

    Ok(sonic * temperature_ratio(mach, gamma).powf(exponent) / mach)
}

/// Returns the stagnation-to-static temperature ratio `Tt / T`.
#[must_use]
pub fn temperature_ratio(mach: f64, gamma: f64) -> f64 {
    1.0 + 0.5 * (gamma - 1.0) * mach * mach
}

/// Returns the stagnation-to-static pressure ratio `Pt / P`.
#[must_use]
pub fn pressure_ratio(mach: f64, gamma: f64) -> f64 {
    temperature_ratio(mach, gamma).powf(gamma / (gamma - 1.0))
}

pub(crate) fn check_gamma(gamma: f64) -> Result<(), StateError> {
    if gamma.is_finite() && gamma > 1.0 {
        Ok(())
    } else {
        Err(StateError::InvalidGamma { gamma })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn sonic_area_ratio_is_one() {
        assert_relative_eq!(area_ratio(1.0, 1.4).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(area_ratio(1.0, 1.3).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn matches_tabulated_values() {
        // Standard isentropic flow tables for γ = 1.4.
        assert_relative_eq!(area_ratio(0.3, 1.4).unwrap(), 2.035_065, epsilon = 1e-6);
        assert_relative_eq!(area_ratio(0.5, 1.4).unwrap(), 1.339_844, epsilon = 1e-6);
        assert_relative_eq!(area_ratio(2.0, 1.4).unwrap(), 1.6875, epsilon = 1e-12);

        assert_relative_eq!(temperature_ratio(0.5, 1.4), 1.05);
        assert_relative_eq!(pressure_ratio(0.5, 1.4), 1.186_213, epsilon = 1e-6);
    }

    #[test]
    fn area_ratio_is_undefined_at_rest() {
        assert_eq!(
            area_ratio(0.0, 1.4),
            Err(StateError::InvalidMach { mach: 0.0 })
        );
        assert!(matches!(
            area_ratio(f64::NAN, 1.4),
            Err(StateError::InvalidMach { .. })
        ));
        assert!(matches!(
            area_ratio(-0.5, 1.4),
            Err(StateError::InvalidMach { .. })
        ));
    }

    #[test]
    fn rejects_gamma_at_or_below_one() {
        assert_eq!(
            area_ratio(0.5, 1.0),
            Err(StateError::InvalidGamma { gamma: 1.0 })
        );
        assert!(check_gamma(0.9).is_err());
        assert!(check_gamma(1.4).is_ok());
    }

    proptest! {
        #[test]
        fn subsonic_area_ratio_is_above_one_and_decreasing(
            mach in 0.01_f64..0.98,
            step in 0.001_f64..0.02,
            gamma in 1.1_f64..1.67,
        ) {
            let here = area_ratio(mach, gamma).unwrap();
            let faster = area_ratio(mach + step, gamma).unwrap();
            prop_assert!(here > 1.0);
            prop_assert!(faster < here);
        }
    }
}
