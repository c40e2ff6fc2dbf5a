use thiserror::Error;

use super::point::Point;

/// Errors that can occur when validating solver bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,
}

/// The sign of a residual for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Residual is positive (or zero).
    Positive,
    /// Residual is negative.
    Negative,
}

impl Sign {
    /// Returns the sign of a residual value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Ordered finite bounds that every iterate is clamped into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(super) fn new(bounds: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bounds;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(BracketError::ZeroWidth);
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    pub(super) fn left(&self) -> f64 {
        self.left
    }

    pub(super) fn right(&self) -> f64 {
        self.right
    }

    /// Moves `x` onto the nearest bound if it falls outside.
    pub(super) fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.left, self.right)
    }

    /// Returns the two distinct starting points derived from a single seed.
    ///
    /// The second point is the seed perturbed by `step` relative to its
    /// magnitude (or by `step` itself for a zero seed), flipped to the other
    /// side when clamping would collapse it onto the first.
    pub(super) fn seed_pair(&self, seed: f64, step: f64) -> [f64; 2] {
        let first = self.clamp(seed);
        #[allow(clippy::float_cmp)]
        let delta = if first == 0.0 {
            step
        } else {
            step * first.abs()
        };

        let second = self.clamp(first + delta);
        #[allow(clippy::float_cmp)]
        if second == first {
            return [first, self.clamp(first - delta)];
        }
        [first, second]
    }
}

/// A sub-interval of the bounds known to contain a sign change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: f64,
    right: f64,
    left_sign: Sign,
}

impl Bracket {
    /// Creates a bracket from two evaluated points, if their residuals differ in sign.
    pub(super) fn from_points(a: Point, b: Point) -> Option<Self> {
        if Sign::of(a.residual) == Sign::of(b.residual) {
            return None;
        }

        let (left, right) = if a.x < b.x { (a, b) } else { (b, a) };
        Some(Self {
            left: left.x,
            right: right.x,
            left_sign: Sign::of(left.residual),
        })
    }

    /// Returns the midpoint of the bracket.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns true if `x` lies strictly inside the bracket.
    pub(super) fn contains(&self, x: f64) -> bool {
        self.left < x && x < self.right
    }

    /// Shrinks the bracket using a new interior point and its residual sign.
    pub(super) fn shrink(&mut self, x: f64, sign: Sign) {
        if self.left_sign == sign {
            self.left = x;
        } else {
            self.right = x;
        }
    }

    #[cfg(test)]
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn bounds_reorders_endpoints() {
        let bounds = Bounds::new([3.0, 1.0]).expect("valid bounds");
        assert_relative_eq!(bounds.left(), 1.0);
        assert_relative_eq!(bounds.right(), 3.0);
    }

    #[test]
    fn bounds_rejects_non_finite() {
        assert_eq!(Bounds::new([f64::NAN, 1.0]), Err(BracketError::NonFinite));
        assert_eq!(
            Bounds::new([0.0, f64::INFINITY]),
            Err(BracketError::NonFinite)
        );
    }

    #[test]
    fn bounds_rejects_zero_width() {
        assert_eq!(Bounds::new([2.0, 2.0]), Err(BracketError::ZeroWidth));
    }

    #[test]
    fn clamp_moves_outside_values_onto_bounds() {
        let bounds = Bounds::new([0.0, 1.0]).unwrap();
        assert_relative_eq!(bounds.clamp(-0.5), 0.0);
        assert_relative_eq!(bounds.clamp(0.25), 0.25);
        assert_relative_eq!(bounds.clamp(7.0), 1.0);
    }

    #[test]
    fn seed_pair_perturbs_relative_to_seed() {
        let bounds = Bounds::new([0.0, 1.0]).unwrap();
        let [first, second] = bounds.seed_pair(0.3, 0.01);
        assert_relative_eq!(first, 0.3);
        assert_relative_eq!(second, 0.303);
    }

    #[test]
    fn seed_pair_flips_at_upper_bound() {
        let bounds = Bounds::new([0.0, 1.0]).unwrap();
        let [first, second] = bounds.seed_pair(5.0, 0.01);
        assert_relative_eq!(first, 1.0);
        assert_relative_eq!(second, 0.99);
    }

    #[test]
    fn seed_pair_handles_zero_seed() {
        let bounds = Bounds::new([-1.0, 1.0]).unwrap();
        let [first, second] = bounds.seed_pair(0.0, 0.01);
        assert_relative_eq!(first, 0.0);
        assert_relative_eq!(second, 0.01);
    }

    #[test]
    fn bracket_requires_sign_change() {
        let a = Point::new(0.0, 1.0);
        let b = Point::new(1.0, 2.0);
        assert!(Bracket::from_points(a, b).is_none());
    }

    #[test]
    fn shrink_keeps_sign_change_inside() {
        let mut bracket =
            Bracket::from_points(Point::new(2.0, 1.0), Point::new(0.0, -1.0)).expect("bracket");
        assert_eq!(bracket.as_array(), [0.0, 2.0]);

        bracket.shrink(1.0, Sign::Negative);
        assert_eq!(bracket.as_array(), [1.0, 2.0]);

        bracket.shrink(1.5, Sign::Positive);
        assert_eq!(bracket.as_array(), [1.0, 1.5]);

        assert!(bracket.contains(1.25));
        assert!(!bracket.contains(1.5));
        assert_relative_eq!(bracket.midpoint(), 1.25);
    }
}
