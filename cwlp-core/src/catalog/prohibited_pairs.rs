use crate::catalog::GeneratorContext;
use crate::formulation::{LinearConstraint, LinearExpr};
use crate::utils::ModelResult;

/// Creates constraints which forbid both warehouses of a prohibited pair to be open at
/// the same time: `open[a] + open[b] ≤ 1`.
pub(crate) fn create_prohibited_pair_constraints(context: &GeneratorContext<'_>) -> ModelResult<Vec<LinearConstraint>> {
    let variables = context.variables;

    Ok(context
        .instance
        .prohibited_pairs
        .iter()
        .map(|&(first, second)| {
            let mut expr = LinearExpr::new();
            expr.add_term(variables.open[first], 1.);
            expr.add_term(variables.open[second], 1.);

            LinearConstraint::less_or_equal(expr, 1.)
        })
        .collect())
}
