//! This module contains a solving pipeline: build an abstract model, hand it to an
//! external engine behind a narrow boundary and extract a domain solution.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

mod backend;
pub use self::backend::*;

mod extraction;
pub use self::extraction::*;

mod milp;
pub use self::milp::MilpBackend;

use crate::formulation::{FormulationConfig, create_model};
use crate::models::{ProblemInstance, Solution};
use crate::utils::{InfoLogger, ModelResult, Timer, create_stdout_logger};

/// A facade which runs the build, solve and extract pipeline against a solver backend.
///
/// The pipeline is synchronous and shares no mutable state with other invocations, so
/// one solver can run different formulations of an instance from concurrent threads.
pub struct Solver {
    backend: Box<dyn SolverBackend>,
    budget: SolveBudget,
    logger: InfoLogger,
}

impl Solver {
    /// Creates a solver over the given backend with an unlimited budget.
    pub fn new(backend: Box<dyn SolverBackend>) -> Self {
        Self { backend, budget: SolveBudget::unlimited(), logger: create_stdout_logger() }
    }

    /// Sets a solve budget.
    pub fn with_budget(mut self, budget: SolveBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Sets a logger used for pipeline diagnostics.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Builds a model for the given configuration and solves it.
    ///
    /// Terminal solver outcomes such as infeasible or unbounded are reported inside the
    /// solution; an error is returned only for an invalid instance or configuration.
    pub fn solve(&self, instance: &ProblemInstance, config: &FormulationConfig) -> ModelResult<Solution> {
        let model = create_model(instance, config, &self.logger)?;
        (self.logger)(&format!(
            "built {} model with {} variables and {} constraints",
            config.formulation,
            model.variable_count(),
            model.constraint_count()
        ));

        let timer = Timer::start();
        let run = self.backend.solve(&model, &self.budget);
        (self.logger)(&format!("{} finished with {} in {}ms", self.backend.name(), run.status, timer.elapsed_millis()));

        Ok(extract_solution(instance, &model, &run))
    }
}

impl Default for Solver {
    fn default() -> Self {
        let logger = create_stdout_logger();
        Self { backend: Box::new(MilpBackend::new(logger.clone())), budget: SolveBudget::unlimited(), logger }
    }
}
