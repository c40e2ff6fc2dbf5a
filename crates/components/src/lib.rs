//! Models for bodies traveling through tubes.
//!
//! - [`tube`]: choked-flow (Kantrowitz limit) analysis of the annular bypass
//!   around a pod moving through a cylindrical tube

pub mod tube;
