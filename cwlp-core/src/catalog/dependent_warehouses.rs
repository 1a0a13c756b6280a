use crate::catalog::GeneratorContext;
use crate::formulation::{LinearConstraint, LinearExpr};
use crate::utils::ModelResult;

/// Creates constraints which allow a dependent warehouse to open only when its
/// prerequisite is open: `open[dependent] ≤ open[prerequisite]`.
pub(crate) fn create_dependency_constraints(context: &GeneratorContext<'_>) -> ModelResult<Vec<LinearConstraint>> {
    let variables = context.variables;

    Ok(context
        .instance
        .dependent_warehouses
        .iter()
        .map(|&(dependent, prerequisite)| {
            let mut expr = LinearExpr::new();
            expr.add_term(variables.open[dependent], 1.);
            expr.add_term(variables.open[prerequisite], -1.);

            LinearConstraint::less_or_equal(expr, 0.)
        })
        .collect())
}
