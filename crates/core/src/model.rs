/// Something a solver can call repeatedly, such as a gas state at a trial
/// Mach number or a whole tube limit calculation.
///
/// Calls must not depend on earlier calls: the same input gives the same
/// output.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// # Errors
    ///
    /// Returns [`Self::Error`] when the input is outside the model's domain.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// The input a model was called with and the output it produced.
///
/// Solvers keep one per evaluation so a result can report the model output at
/// the root without calling the model again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}
