use crate::equation::Evaluation;

/// How the solver chose the point evaluated in an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Plain secant update.
    Secant,
    /// Secant update that left the bounds and was moved onto the nearest bound.
    Clamped,
    /// Midpoint of the current bracket, used when the secant slope is
    /// degenerate or the secant update leaves the bracket.
    Bisection,
}

/// Iteration event emitted by the secant solver.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based, not counting the two seed evaluations).
    pub iter: usize,
    /// How the evaluated point was chosen.
    pub step: Step,
    /// Evaluation at the new iterate.
    pub eval: &'a Evaluation<I, O, 1>,
}

impl<I, O> Event<'_, I, O> {
    /// Returns the evaluated x value.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.eval.x[0]
    }

    /// Returns the residual at the evaluated x value.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.eval.residuals[0]
    }
}
