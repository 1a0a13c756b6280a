#[cfg(test)]
#[path = "../../tests/unit/solver/extraction_test.rs"]
mod extraction_test;

use crate::formulation::AbstractModel;
use crate::models::{ProblemInstance, Solution, SolveStatus, SupplyEntry};
use crate::solver::BackendRun;
use crate::utils::Float;

/// A tolerance used to snap boolean indicators and to drop numeric noise from supply
/// values, absorbing floating point noise of LP relaxations and solver tolerances.
pub const VALUE_TOLERANCE: Float = 1E-6;

/// Extracts a domain solution from a raw backend run. The function is pure: it reads the
/// variable roles and the raw values and touches nothing else.
///
/// Boolean indicators within [`VALUE_TOLERANCE`] of 0 or 1 are snapped; an indicator
/// farther from both bounds signals a defective backend assignment and yields an error
/// status. Supply values below the tolerance are reported as exactly zero and omitted.
pub fn extract_solution(instance: &ProblemInstance, model: &AbstractModel, run: &BackendRun) -> Solution {
    if !matches!(run.status, SolveStatus::Optimal | SolveStatus::Feasible) {
        return Solution::empty(run.status.clone());
    }

    if run.values.len() != model.variable_count() {
        return Solution::empty(SolveStatus::Error(format!(
            "backend returned {} values for {} variables",
            run.values.len(),
            model.variable_count()
        )));
    }

    let variables = model.variables();

    let mut open_warehouses = Vec::default();
    for (warehouse, id) in variables.open.iter().enumerate() {
        match snap_indicator(run.values[id.index()]) {
            Some(true) => open_warehouses.push(warehouse),
            Some(false) => {}
            None => {
                return Solution::empty(SolveStatus::Error(format!(
                    "open indicator of warehouse {warehouse} is not boolean: {}",
                    run.values[id.index()]
                )));
            }
        }
    }

    let mut supply = Vec::default();
    let mut transport_cost = 0.;
    for warehouse in 0..instance.warehouse_count {
        for customer in 0..instance.customer_count {
            let quantity = run.values[variables.served[warehouse][customer].index()];
            if quantity > VALUE_TOLERANCE {
                transport_cost += instance.transport_costs[warehouse][customer] * quantity;
                supply.push(SupplyEntry { warehouse, customer, quantity });
            }
        }
    }

    let fixed_cost = open_warehouses.iter().map(|&warehouse| instance.fixed_costs[warehouse]).sum();

    Solution { status: run.status.clone(), objective: run.objective, open_warehouses, supply, fixed_cost, transport_cost }
}

fn snap_indicator(value: Float) -> Option<bool> {
    if (value - 1.).abs() <= VALUE_TOLERANCE {
        Some(true)
    } else if value.abs() <= VALUE_TOLERANCE {
        Some(false)
    } else {
        None
    }
}
