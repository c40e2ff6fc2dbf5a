use super::*;

use std::convert::Infallible;

use approx::assert_relative_eq;
use kantrowitz_core::{EquationProblem, Model};

/// Model that evaluates a plain function of its input.
struct FnModel<F>(F);

impl<F: Fn(f64) -> f64> Model for FnModel<F> {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Infallible> {
        Ok((self.0)(*input))
    }
}

/// Equation problem whose residual is the model output itself.
struct ZeroOutput;

impl EquationProblem<1> for ZeroOutput {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Infallible> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Infallible> {
        Ok([*output])
    }
}

fn solve_fn(
    f: impl Fn(f64) -> f64,
    seed: f64,
    bounds: [f64; 2],
    config: &Config,
) -> Result<Solution<f64, f64>, Error> {
    solve_unobserved(&FnModel(f), &ZeroOutput, seed, bounds, config)
}

#[test]
fn finds_square_root() {
    let solution = solve_fn(|x| x * x - 2.0, 1.0, [0.0, 3.0], &Config::default())
        .expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-6);
    assert_relative_eq!(solution.snapshot.input, solution.x);
}

#[test]
fn finds_fixed_point_of_cosine() {
    let solution = solve_fn(|x| x.cos() - x, 0.0, [0.0, 1.0], &Config::default())
        .expect("should solve");

    assert!(solution.is_converged());
    assert_relative_eq!(solution.x, 0.739_085_133_215_160_6, epsilon = 1e-6);
}

#[test]
fn normalizes_reversed_bounds() {
    let forward = solve_fn(|x| x * x - 2.0, 1.0, [0.0, 3.0], &Config::default()).unwrap();
    let reversed = solve_fn(|x| x * x - 2.0, 1.0, [3.0, 0.0], &Config::default()).unwrap();

    assert_eq!(forward.x.to_bits(), reversed.x.to_bits());
    assert_eq!(forward.iters, reversed.iters);
}

#[test]
fn clamps_seed_outside_bounds() {
    let mut steps = Vec::new();
    let observer = |event: &Event<'_, f64, f64>| -> Option<Action> {
        assert!((0.0..=3.0).contains(&event.x()));
        steps.push(event.step);
        None
    };

    let solution = solve(
        &FnModel(|x: f64| x * x - 2.0),
        &ZeroOutput,
        5.0,
        [0.0, 3.0],
        &Config::default(),
        observer,
    )
    .expect("should solve");

    assert!(solution.is_converged());
    assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-6);
    assert!(!steps.is_empty());
}

#[test]
fn identical_calls_are_bit_identical() {
    let f = |x: f64| (x + 0.2).powi(3) - 0.5;
    let config = Config::default();

    let first = solve_fn(f, 0.3, [1e-6, 1.0], &config).unwrap();
    let second = solve_fn(f, 0.3, [1e-6, 1.0], &config).unwrap();

    assert_eq!(first.x.to_bits(), second.x.to_bits());
    assert_eq!(first.residual.to_bits(), second.residual.to_bits());
    assert_eq!(first.iters, second.iters);
}

#[test]
fn zero_slope_falls_back_to_bisection() {
    let step_fn = |x: f64| if x < 0.5 { -1.0 } else { 1.0 };
    let config = Config::new(100, 1e-9, 1e-12, 0.01).unwrap();

    let mut steps = Vec::new();
    let observer = |event: &Event<'_, f64, f64>| -> Option<Action> {
        steps.push(event.step);
        None
    };

    let solution = solve(
        &FnModel(step_fn),
        &ZeroOutput,
        0.3,
        [0.0, 1.0],
        &config,
        observer,
    )
    .expect("bisection should recover");

    assert_eq!(steps.first(), Some(&Step::Bisection));
    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 0.5, epsilon = 1e-8);
}

#[test]
fn zero_slope_without_bracket_is_an_error() {
    let result = solve_fn(|_| 1.0, 0.3, [0.0, 1.0], &Config::default());

    assert!(matches!(
        result,
        Err(Error::NoBracket {
            left_residual,
            right_residual,
            ..
        }) if left_residual > 0.0 && right_residual > 0.0
    ));
}

#[test]
fn root_beyond_bounds_is_an_error() {
    let mut steps = Vec::new();
    let observer = |event: &Event<'_, f64, f64>| -> Option<Action> {
        steps.push(event.step);
        None
    };

    let result = solve(
        &FnModel(|x: f64| x - 2.0),
        &ZeroOutput,
        0.5,
        [0.0, 1.0],
        &Config::default(),
        observer,
    );

    assert_eq!(steps, vec![Step::Clamped]);
    assert!(matches!(result, Err(Error::NoBracket { .. })));
}

#[test]
fn iteration_limit_reports_best_point() {
    let config = Config::new(1, 1e-12, 1e-12, 0.01).unwrap();
    let solution = solve_fn(|x| x * x - 2.0, 1.0, [0.0, 3.0], &config).unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 1);
    assert!(solution.residual.abs() > 1e-12);
}

#[test]
fn zero_iterations_returns_best_seed() {
    let config = Config::new(0, 1e-12, 1e-12, 0.01).unwrap();
    let solution = solve_fn(|x| x * x - 2.0, 1.0, [0.0, 3.0], &config).unwrap();

    // Seeds are 1.0 (residual -1.0) and 1.01 (residual -0.9799).
    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 0);
    assert_relative_eq!(solution.x, 1.01);
}

#[test]
fn converged_seed_skips_iteration() {
    let solution = solve_fn(|x| x - 0.3, 0.3, [0.0, 1.0], &Config::default()).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert_relative_eq!(solution.x, 0.3);
}

#[test]
fn observer_can_stop_iteration() {
    let mut calls = 0usize;
    let observer = |event: &Event<'_, f64, f64>| -> Option<Action> {
        calls += 1;
        (event.iter >= 2).then_some(Action::StopEarly)
    };

    let config = Config::new(50, 1e-15, 1e-15, 0.01).unwrap();
    let solution = solve(
        &FnModel(|x: f64| x * x - 2.0),
        &ZeroOutput,
        1.0,
        [0.0, 3.0],
        &config,
        observer,
    )
    .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_eq!(calls, 2);
}

#[test]
fn rejects_invalid_inputs() {
    let config = Config::default();

    assert!(matches!(
        solve_fn(|x| x, 0.5, [1.0, 1.0], &config),
        Err(Error::InvalidBounds(BracketError::ZeroWidth))
    ));
    assert!(matches!(
        solve_fn(|x| x, 0.5, [f64::NAN, 1.0], &config),
        Err(Error::InvalidBounds(BracketError::NonFinite))
    ));
    assert!(matches!(
        solve_fn(|x| x, f64::NAN, [0.0, 1.0], &config),
        Err(Error::NonFiniteSeed { .. })
    ));
}

#[test]
fn non_finite_residual_is_an_error() {
    let result = solve_fn(|x| 1.0 / (x - 0.3), 0.3, [0.0, 1.0], &Config::default());

    assert!(matches!(result, Err(Error::NonFiniteResidual { x, .. }) if x == 0.3));
}
