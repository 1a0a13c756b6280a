use crate::models::{CustomerIndex, WarehouseIndex};
use crate::utils::Float;
use std::fmt::{Display, Formatter};

/// Specifies a terminal status of a solve attempt.
///
/// Infeasible and unbounded outcomes are legitimate statuses, not failures: they are
/// distinguishable from a backend error which carries a diagnostic message.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveStatus {
    /// An optimal assignment is found and proven.
    Optimal,
    /// An assignment is found, but optimality is not proven (e.g. the budget expired).
    Feasible,
    /// The model is proven to have no solution.
    Infeasible,
    /// The objective is unbounded which signals a modeling defect such as negative costs.
    Unbounded,
    /// The backend failed with the given diagnostic message.
    Error(String),
}

impl Display for SolveStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Optimal => write!(f, "optimal"),
            Self::Feasible => write!(f, "feasible"),
            Self::Infeasible => write!(f, "infeasible"),
            Self::Unbounded => write!(f, "unbounded"),
            Self::Error(message) => write!(f, "error: {message}"),
        }
    }
}

/// A single non-zero supply assignment.
#[derive(Clone, Debug, PartialEq)]
pub struct SupplyEntry {
    /// A serving warehouse.
    pub warehouse: WarehouseIndex,
    /// A served customer.
    pub customer: CustomerIndex,
    /// A shipped quantity.
    pub quantity: Float,
}

/// Represents a solution in domain terms, ready to be consumed by external reporting.
#[derive(Clone, Debug)]
pub struct Solution {
    /// A solve status.
    pub status: SolveStatus,
    /// An objective value, present for optimal and feasible statuses only.
    pub objective: Option<Float>,
    /// Indices of open warehouses, sorted ascending.
    pub open_warehouses: Vec<WarehouseIndex>,
    /// Non-zero supply quantities, sparse.
    pub supply: Vec<SupplyEntry>,
    /// A fixed opening cost part of the objective.
    pub fixed_cost: Float,
    /// A transport cost part of the objective.
    pub transport_cost: Float,
}

impl Solution {
    /// Creates a solution which carries a terminal status and no assignment.
    pub fn empty(status: SolveStatus) -> Self {
        Self { status, objective: None, open_warehouses: vec![], supply: vec![], fixed_cost: 0., transport_cost: 0. }
    }

    /// Returns true when the solution carries a usable assignment.
    pub fn has_assignment(&self) -> bool {
        matches!(self.status, SolveStatus::Optimal | SolveStatus::Feasible)
    }

    /// Returns a supplied quantity for the given warehouse and customer pair.
    pub fn supplied(&self, warehouse: WarehouseIndex, customer: CustomerIndex) -> Float {
        self.supply
            .iter()
            .find(|entry| entry.warehouse == warehouse && entry.customer == customer)
            .map_or(0., |entry| entry.quantity)
    }

    /// Returns true when the given warehouse is open.
    pub fn is_open(&self, warehouse: WarehouseIndex) -> bool {
        self.open_warehouses.contains(&warehouse)
    }
}
