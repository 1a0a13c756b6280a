#[cfg(test)]
#[path = "../../tests/unit/formulation/boolean_test.rs"]
mod boolean_test;

use crate::formulation::{AbstractModel, FormulationStrategy, LinearConstraint, LinearExpr, ModelVariables, VariableKind};
use crate::models::ProblemInstance;

/// A boolean assignment encoding in the constraint programming style: a binary open
/// indicator per warehouse, a binary assignment indicator per warehouse and customer
/// pair, and a bounded integer served quantity tied to the indicator.
pub struct BooleanAssignment;

impl FormulationStrategy for BooleanAssignment {
    fn name(&self) -> &str {
        "boolean assignment"
    }

    fn create_variables(&self, instance: &ProblemInstance, model: &mut AbstractModel) -> ModelVariables {
        let open = (0..instance.warehouse_count).map(|_| model.add_variable(VariableKind::Binary)).collect();

        let assign: Vec<Vec<_>> = (0..instance.warehouse_count)
            .map(|_| (0..instance.customer_count).map(|_| model.add_variable(VariableKind::Binary)).collect())
            .collect();

        let served = (0..instance.warehouse_count)
            .map(|_| {
                (0..instance.customer_count)
                    .map(|customer| {
                        model.add_variable(VariableKind::Integer { min: 0., max: instance.demands[customer] })
                    })
                    .collect()
            })
            .collect();

        ModelVariables { open, served, assign: Some(assign) }
    }

    fn create_linkage_constraints(&self, instance: &ProblemInstance, variables: &ModelVariables) -> Vec<LinearConstraint> {
        let assign = variables.assign.as_ref().expect("boolean formulation always creates assignment indicators");

        // assign[w][c] ≤ open[w] and served[w][c] ≤ demand[c] * assign[w][c]
        (0..instance.warehouse_count)
            .flat_map(|warehouse| (0..instance.customer_count).map(move |customer| (warehouse, customer)))
            .flat_map(|(warehouse, customer)| {
                let mut open_link = LinearExpr::new();
                open_link.add_term(assign[warehouse][customer], 1.);
                open_link.add_term(variables.open[warehouse], -1.);

                let mut served_link = LinearExpr::new();
                served_link.add_term(variables.served[warehouse][customer], 1.);
                served_link.add_term(assign[warehouse][customer], -instance.demands[customer]);

                [LinearConstraint::less_or_equal(open_link, 0.), LinearConstraint::less_or_equal(served_link, 0.)]
            })
            .collect()
    }
}
