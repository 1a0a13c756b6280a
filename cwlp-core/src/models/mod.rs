//! This module contains a domain model of the capacitated warehouse location problem.

mod problem;
pub use self::problem::*;

mod solution;
pub use self::solution::*;
