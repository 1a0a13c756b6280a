use crate::catalog::GeneratorContext;
use crate::formulation::{LinearConstraint, LinearExpr};
use crate::utils::{ModelError, ModelResult};

/// Creates constraints which force every open warehouse to serve at least the configured
/// fraction of its capacity: `Σ_c served[w][c] ≥ fraction * capacity[w] * open[w]`.
/// The open indicator makes the bound vanish for closed warehouses.
pub(crate) fn create_minimum_usage_constraints(context: &GeneratorContext<'_>) -> ModelResult<Vec<LinearConstraint>> {
    let fraction = context.minimum_usage_fraction.ok_or_else(|| {
        ModelError::InvalidConfiguration(
            "minimum_capacity_usage requires a usage fraction from the instance or the configuration".to_string(),
        )
    })?;

    if !(0. ..=1.).contains(&fraction) {
        return Err(ModelError::InvalidConfiguration(format!("minimum usage fraction must be within [0, 1], got {fraction}")));
    }

    let (instance, variables) = (context.instance, context.variables);

    Ok((0..instance.warehouse_count)
        .map(|warehouse| {
            let mut expr: LinearExpr =
                (0..instance.customer_count).map(|customer| (variables.served[warehouse][customer], 1.)).collect();
            expr.add_term(variables.open[warehouse], -fraction * instance.capacities[warehouse]);

            LinearConstraint::greater_or_equal(expr, 0.)
        })
        .collect())
}
