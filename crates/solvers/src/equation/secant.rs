//! Secant iteration for single-variable root finding.
//!
//! # Algorithm
//!
//! The secant method needs two starting points but callers supply one seed;
//! the second is the seed perturbed by [`Config::seed_step`]. Each iteration
//! draws a line through the two most recent evaluations and takes its zero
//! as the next iterate:
//!
//! ```text
//! x[k+1] = x[k] - f(x[k]) * (x[k] - x[k-1]) / (f(x[k]) - f(x[k-1]))
//! ```
//!
//! Every iterate is clamped into the caller's bounds. Once two evaluations
//! have residuals of opposite sign, the solver also tracks a bracket around
//! the root and bisects it whenever a secant update would leave it.
//!
//! A secant update is degenerate when the two residuals are equal (zero
//! slope), the update is not finite, or clamping leaves the iterate where it
//! was. The solver then bisects the bracket instead. If no bracket is known
//! yet it evaluates both bounds to establish one, and fails with
//! [`Error::NoBracket`] if they do not straddle a root.
//!
//! The solve converges when `|f(x)| <= residual_tol` or the change between
//! successive iterates is at most `x_abs_tol`.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the new point has been
//! evaluated. Seed and bound evaluations do not emit events. Observers can
//! return [`Action::StopEarly`] to halt with the best evaluation so far.

mod action;
mod best;
mod bracket;
mod config;
mod error;
mod event;
mod point;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use bracket::BracketError;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Event, Step};
pub use solution::{Solution, Status};

use kantrowitz_core::{EquationProblem, Model, Observer};

use crate::equation::{Evaluation, evaluate};

use best::Best;
use bracket::{Bounds, Bracket, Sign};
use point::Point;

/// Finds a root of the equation using the secant method.
///
/// The search starts at `seed` and stays within `bounds`.
/// See the [module docs](self) for details on clamping, the bisection
/// fallback, and observer events.
///
/// # Errors
///
/// Returns an error if the bounds or seed are invalid, an evaluation fails or
/// yields a non-finite residual, or a degenerate step cannot be recovered
/// because the bounds do not bracket a root.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    seed: f64,
    bounds: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let bounds = Bounds::new(bounds)?;
    if !seed.is_finite() {
        return Err(Error::NonFiniteSeed { seed });
    }

    let mut best = Best::empty();
    let [x0, x1] = bounds.seed_pair(seed, config.seed_step());

    let mut prev = evaluate_point(model, problem, x0, &mut best)?;
    if best.is_residual_converged(config.residual_tol()) {
        return best.finish(Status::Converged, 0);
    }

    let mut curr = evaluate_point(model, problem, x1, &mut best)?;
    if best.is_residual_converged(config.residual_tol()) {
        return best.finish(Status::Converged, 0);
    }

    let mut bracket = Bracket::from_points(prev, curr);

    for iter in 1..=config.max_iters() {
        let (x, step) = match propose(prev, curr, &bounds, bracket.as_ref()) {
            Some(proposal) => proposal,
            None => {
                let fallback = match bracket {
                    Some(bracket) => bracket,
                    None => bracket_bounds(model, problem, &bounds, &mut best)?,
                };
                bracket = Some(fallback);
                (fallback.midpoint(), Step::Bisection)
            }
        };

        let eval = checked_evaluate(model, problem, x)?;
        let next = Point::new(x, eval.residuals[0]);

        match bracket.as_mut() {
            Some(bracket) => bracket.shrink(next.x, Sign::of(next.residual)),
            None => bracket = Bracket::from_points(curr, next),
        }

        let residual_converged = next.residual.abs() <= config.residual_tol();
        let x_converged = (next.x - curr.x).abs() <= config.x_abs_tol();

        let event = Event {
            iter,
            step,
            eval: &eval,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            best.update(eval);
            return best.finish(Status::StoppedByObserver, iter);
        }

        if residual_converged || x_converged {
            return Ok(Solution::from_eval(eval, Status::Converged, iter));
        }

        best.update(eval);
        prev = curr;
        curr = next;
    }

    best.finish(Status::MaxIters, config.max_iters())
}

/// Runs the secant solver without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    seed: f64,
    bounds: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, seed, bounds, config, ())
}

/// Proposes the next iterate from the two most recent points.
///
/// Returns `None` when the secant update is degenerate.
fn propose(
    prev: Point,
    curr: Point,
    bounds: &Bounds,
    bracket: Option<&Bracket>,
) -> Option<(f64, Step)> {
    let denominator = curr.residual - prev.residual;

    #[allow(clippy::float_cmp)]
    if denominator == 0.0 {
        return None;
    }

    let x = curr.x - curr.residual * (curr.x - prev.x) / denominator;
    if !x.is_finite() {
        return None;
    }

    let clamped = bounds.clamp(x);

    #[allow(clippy::float_cmp)]
    if clamped == curr.x {
        return None;
    }

    match bracket {
        Some(bracket) if !bracket.contains(clamped) => Some((bracket.midpoint(), Step::Bisection)),
        #[allow(clippy::float_cmp)]
        _ if clamped == x => Some((x, Step::Secant)),
        _ => Some((clamped, Step::Clamped)),
    }
}

/// Evaluates both bounds and returns them as a bracket.
fn bracket_bounds<M, P>(
    model: &M,
    problem: &P,
    bounds: &Bounds,
    best: &mut Best<M::Input, M::Output>,
) -> Result<Bracket, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let left = evaluate_point(model, problem, bounds.left(), best)?;
    let right = evaluate_point(model, problem, bounds.right(), best)?;

    Bracket::from_points(left, right).ok_or(Error::NoBracket {
        left: left.x,
        right: right.x,
        left_residual: left.residual,
        right_residual: right.residual,
    })
}

/// Evaluates at `x`, records the evaluation as a best candidate, and returns the point.
fn evaluate_point<M, P>(
    model: &M,
    problem: &P,
    x: f64,
    best: &mut Best<M::Input, M::Output>,
) -> Result<Point, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let eval = checked_evaluate(model, problem, x)?;
    let point = Point::new(x, eval.residuals[0]);
    best.update(eval);
    Ok(point)
}

/// Evaluates at `x` and rejects non-finite residuals.
fn checked_evaluate<M, P>(
    model: &M,
    problem: &P,
    x: f64,
) -> Result<Evaluation<M::Input, M::Output, 1>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let eval = evaluate(model, problem, [x])?;
    let residual = eval.residuals[0];
    if !residual.is_finite() {
        return Err(Error::NonFiniteResidual { x, residual });
    }
    Ok(eval)
}
