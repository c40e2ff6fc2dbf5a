/// Equations posed on top of a [`Model`].
///
/// The problem turns `N` unknowns into a model input and, once the model has
/// run, reports `N` residuals. A root is an `x` where every residual is zero.
/// The limit Mach solve, for example, has one unknown (the Mach number) and
/// one residual (`A/A*` minus the tube-to-bypass area ratio).
///
/// [`Model`]: crate::Model
pub trait EquationProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the model input for the unknowns `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if `x` has no corresponding input.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Residuals of the equations at one model evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if a residual is undefined at this evaluation.
    fn residuals(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; N], Self::Error>;
}
