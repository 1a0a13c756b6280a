use crate::formulation::AbstractModel;
use crate::models::SolveStatus;
use crate::utils::Float;
use std::time::Duration;

/// A time and iteration budget for a single backend run. An exhausted budget is the only
/// cancellation mechanism: backends which honor it return their best known assignment
/// with the feasible status instead of blocking indefinitely.
#[derive(Clone, Debug, Default)]
pub struct SolveBudget {
    /// A maximum wall time allowed for the run.
    pub max_time: Option<Duration>,
    /// A maximum amount of iterations or search nodes, backend specific.
    pub max_iterations: Option<usize>,
}

impl SolveBudget {
    /// Creates an unlimited budget.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Creates a budget bounded by wall time only.
    pub fn from_max_time(max_time: Duration) -> Self {
        Self { max_time: Some(max_time), max_iterations: None }
    }

    /// Returns true when any limit is set.
    pub fn is_limited(&self) -> bool {
        self.max_time.is_some() || self.max_iterations.is_some()
    }
}

/// A raw outcome of a backend run: a status plus, when an assignment exists, variable
/// values indexed by variable identifiers and an objective value.
#[derive(Clone, Debug)]
pub struct BackendRun {
    /// A solve status.
    pub status: SolveStatus,
    /// Variable values in identifier order, empty when no assignment exists.
    pub values: Vec<Float>,
    /// An objective value when an assignment exists.
    pub objective: Option<Float>,
}

impl BackendRun {
    /// Creates a run outcome which carries a status and no assignment.
    pub fn empty(status: SolveStatus) -> Self {
        Self { status, values: vec![], objective: None }
    }
}

/// An external solving engine behind a narrow interface: translate linear and boolean
/// constraints, set the objective, solve within a budget and read variable values back.
/// Both a MIP/LP engine and a CP engine satisfy this shape.
///
/// Implementations treat the model as read only and never panic: any internal failure
/// is reported as [`SolveStatus::Error`] inside the run outcome.
pub trait SolverBackend: Send + Sync {
    /// A backend name used in diagnostics.
    fn name(&self) -> &str;

    /// Solves the model within the given budget.
    fn solve(&self, model: &AbstractModel, budget: &SolveBudget) -> BackendRun;
}
