use crate::equation::Evaluation;

use super::{Error, Solution, Status};

/// Smallest-residual evaluation seen so far, reported when the solve stops
/// without converging.
///
/// Ties go to the newer evaluation, which for a secant sequence is usually
/// the one nearer the root.
pub(super) struct Best<I, O>(Option<Evaluation<I, O, 1>>);

impl<I, O> Best<I, O> {
    pub(super) fn empty() -> Self {
        Self(None)
    }

    fn residual(&self) -> Option<f64> {
        self.0.as_ref().map(|eval| eval.residuals[0].abs())
    }

    pub(super) fn update(&mut self, eval: Evaluation<I, O, 1>) {
        let candidate = eval.residuals[0].abs();
        if self.residual().is_none_or(|held| candidate <= held) {
            self.0 = Some(eval);
        }
    }

    pub(super) fn is_residual_converged(&self, residual_tol: f64) -> bool {
        self.residual().is_some_and(|held| held <= residual_tol)
    }

    /// Builds a solution from the held evaluation.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoSuccessfulEvaluation` if nothing was evaluated.
    pub(super) fn finish(self, status: Status, iters: usize) -> Result<Solution<I, O>, Error> {
        self.0
            .map(|eval| Solution::from_eval(eval, status, iters))
            .ok_or(Error::NoSuccessfulEvaluation)
    }
}
