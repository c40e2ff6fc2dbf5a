mod equation;

pub use equation::EquationProblem;
