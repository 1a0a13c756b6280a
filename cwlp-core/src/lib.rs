//! Core crate contains the main building blocks to formulate and solve variations of the
//! ***Capacitated Warehouse Location Problem***: a domain model, two interchangeable
//! formulation strategies, a catalog of optional constraint toggles and a solving
//! pipeline behind a narrow backend boundary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub(crate) mod helpers;

pub mod catalog;
pub mod formulation;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
