use crate::catalog::GeneratorContext;
use crate::formulation::{LinearConstraint, LinearExpr};
use crate::utils::ModelResult;

/// Creates constraints which force all warehouses of a group to share their open state:
/// `open[a] = open[b]` for consecutive group members.
pub(crate) fn create_group_constraints(context: &GeneratorContext<'_>) -> ModelResult<Vec<LinearConstraint>> {
    let variables = context.variables;

    Ok(context
        .instance
        .open_together_groups
        .iter()
        .flat_map(|group| {
            group.windows(2).map(move |pair| {
                let mut expr = LinearExpr::new();
                expr.add_term(variables.open[pair[0]], 1.);
                expr.add_term(variables.open[pair[1]], -1.);

                LinearConstraint::equal(expr, 0.)
            })
        })
        .collect())
}
