#[cfg(test)]
#[path = "../../tests/unit/formulation/continuous_test.rs"]
mod continuous_test;

use crate::formulation::{AbstractModel, FormulationStrategy, LinearConstraint, LinearExpr, ModelVariables, VariableKind};
use crate::models::ProblemInstance;
use crate::utils::Float;

/// A continuous assignment encoding: a binary open indicator per warehouse plus a
/// non-negative continuous supply variable per warehouse and customer pair. This is the
/// classic MIP/LP shape of the problem.
pub struct ContinuousAssignment;

impl FormulationStrategy for ContinuousAssignment {
    fn name(&self) -> &str {
        "continuous assignment"
    }

    fn create_variables(&self, instance: &ProblemInstance, model: &mut AbstractModel) -> ModelVariables {
        let open = (0..instance.warehouse_count).map(|_| model.add_variable(VariableKind::Binary)).collect();

        let served = (0..instance.warehouse_count)
            .map(|_| {
                (0..instance.customer_count)
                    .map(|_| model.add_variable(VariableKind::Continuous { min: 0., max: Float::INFINITY }))
                    .collect()
            })
            .collect();

        ModelVariables { open, served, assign: None }
    }

    fn create_linkage_constraints(&self, instance: &ProblemInstance, variables: &ModelVariables) -> Vec<LinearConstraint> {
        // supply[w][c] ≤ demand[c] * open[w]
        (0..instance.warehouse_count)
            .flat_map(|warehouse| {
                (0..instance.customer_count).map(move |customer| (warehouse, customer))
            })
            .map(|(warehouse, customer)| {
                let mut expr = LinearExpr::new();
                expr.add_term(variables.served[warehouse][customer], 1.);
                expr.add_term(variables.open[warehouse], -instance.demands[customer]);

                LinearConstraint::less_or_equal(expr, 0.)
            })
            .collect()
    }
}
