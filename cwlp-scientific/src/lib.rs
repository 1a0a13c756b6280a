//! Scientific crate contains logic to read and write problem formats used to benchmark
//! capacitated warehouse location algorithms.
//!
//!
//! # Supported formats
//!
//! - **dat**: a named section format with optional constraint sections
//! - **orlib**: the OR-Library `cap` warehouse location format
//! - **config**: a JSON formulation configuration

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub(crate) mod helpers;

#[cfg(test)]
#[path = "../tests/integration/known_instances_test.rs"]
mod known_instances_test;

pub use cwlp_core as core;

pub mod common;
pub mod config;
pub mod dat;
pub mod orlib;
