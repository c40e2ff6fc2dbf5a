//! Numerical solvers for the Kantrowitz crates.
//!
//! Solvers operate on a [`Model`] paired with a problem trait from
//! `kantrowitz-core`, so the same model can be driven by different methods.
//!
//! [`Model`]: kantrowitz_core::Model

pub mod equation;
