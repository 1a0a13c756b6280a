#[cfg(test)]
#[path = "../../tests/unit/solver/milp_test.rs"]
mod milp_test;

use crate::formulation::{AbstractModel, LinearExpr, Relation, VariableKind};
use crate::models::SolveStatus;
use crate::solver::{BackendRun, SolveBudget, SolverBackend};
use crate::utils::{InfoLogger, create_stdout_logger};
use good_lp::{Expression, ProblemVariables, ResolutionError, Solution as _, SolverModel, Variable, constraint, default_solver, variable};

/// A backend which translates the abstract model into a `good_lp` problem solved by the
/// bundled pure Rust `microlp` engine. It handles the continuous and the bounded integer
/// variable shapes alike, so both formulation strategies go through it.
pub struct MilpBackend {
    logger: InfoLogger,
}

impl MilpBackend {
    /// Creates a backend which reports diagnostics to the given logger.
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger }
    }
}

impl Default for MilpBackend {
    fn default() -> Self {
        Self::new(create_stdout_logger())
    }
}

impl SolverBackend for MilpBackend {
    fn name(&self) -> &str {
        "microlp"
    }

    fn solve(&self, model: &AbstractModel, budget: &SolveBudget) -> BackendRun {
        if budget.is_limited() {
            (self.logger)("microlp solves to completion, the budget is not enforced mid run");
        }

        let mut problem = ProblemVariables::new();
        let variables: Vec<Variable> = model
            .variable_kinds()
            .iter()
            .map(|kind| match *kind {
                VariableKind::Binary => problem.add(variable().binary()),
                VariableKind::Continuous { min, max } => {
                    let definition = variable().min(min);
                    problem.add(if max.is_finite() { definition.max(max) } else { definition })
                }
                VariableKind::Integer { min, max } => problem.add(variable().integer().min(min).max(max)),
            })
            .collect();

        let objective = to_expression(model.objective(), &variables);

        let mut solver = problem.minimise(objective.clone()).using(default_solver);
        for linear in model.constraints() {
            let expression = to_expression(&linear.expr, &variables);
            solver.add_constraint(match linear.relation {
                Relation::LessOrEqual => constraint!(expression <= linear.rhs),
                Relation::GreaterOrEqual => constraint!(expression >= linear.rhs),
                Relation::Equal => constraint!(expression == linear.rhs),
            });
        }

        match solver.solve() {
            Ok(solution) => {
                let values = variables.iter().map(|&variable| solution.value(variable)).collect();
                let objective = Some(solution.eval(objective));

                BackendRun { status: SolveStatus::Optimal, values, objective }
            }
            Err(ResolutionError::Infeasible) => BackendRun::empty(SolveStatus::Infeasible),
            Err(ResolutionError::Unbounded) => BackendRun::empty(SolveStatus::Unbounded),
            Err(err) => BackendRun::empty(SolveStatus::Error(err.to_string())),
        }
    }
}

fn to_expression(expr: &LinearExpr, variables: &[Variable]) -> Expression {
    expr.terms().iter().map(|&(id, coefficient)| coefficient * variables[id.index()]).sum()
}
