//! This module provides building blocks to express the warehouse location problem as an
//! abstract optimization model under interchangeable formulation strategies.

#[cfg(test)]
#[path = "../../tests/unit/formulation/builder_test.rs"]
mod builder_test;

mod model;
pub use self::model::*;

mod boolean;
pub use self::boolean::BooleanAssignment;

mod continuous;
pub use self::continuous::ContinuousAssignment;

use crate::catalog::{ConstraintToggleSet, GeneratorContext, create_toggle_constraints};
use crate::models::ProblemInstance;
use crate::utils::{Float, InfoLogger, ModelError, ModelResult};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Specifies which mathematical encoding the builder emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormulationKind {
    /// A continuous assignment MIP/LP encoding.
    Lp,
    /// A boolean assignment CP encoding.
    Cp,
}

impl Display for FormulationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lp => write!(f, "LP"),
            Self::Cp => write!(f, "CP"),
        }
    }
}

impl FromStr for FormulationKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LP" => Ok(Self::Lp),
            "CP" => Ok(Self::Cp),
            _ => Err(ModelError::InvalidConfiguration(format!("unknown formulation: '{s}', expected 'LP' or 'CP'"))),
        }
    }
}

/// A configuration of a single formulation request.
#[derive(Clone, Debug)]
pub struct FormulationConfig {
    /// A formulation kind to use.
    pub formulation: FormulationKind,
    /// Enabled optional constraints.
    pub toggles: ConstraintToggleSet,
    /// Overrides the minimum usage fraction of the instance when set.
    pub minimum_usage_fraction: Option<Float>,
}

impl FormulationConfig {
    /// Creates a configuration with all optional constraints disabled.
    pub fn new(formulation: FormulationKind) -> Self {
        Self { formulation, toggles: ConstraintToggleSet::default(), minimum_usage_fraction: None }
    }

    /// Sets enabled optional constraints.
    pub fn with_toggles(mut self, toggles: ConstraintToggleSet) -> Self {
        self.toggles = toggles;
        self
    }

    /// Sets a minimum usage fraction override.
    pub fn with_minimum_usage_fraction(mut self, fraction: Float) -> Self {
        self.minimum_usage_fraction = Some(fraction);
        self
    }
}

/// A strategy which encodes the problem into decision variables and linkage constraints.
///
/// Implementations share the demand, capacity and objective semantics applied by
/// [`create_model`] and differ only in the variable shape.
pub trait FormulationStrategy {
    /// A short encoding name used in diagnostics.
    fn name(&self) -> &str;

    /// Creates decision variables inside the model and reports their domain roles.
    fn create_variables(&self, instance: &ProblemInstance, model: &mut AbstractModel) -> ModelVariables;

    /// Creates constraints which tie serving a customer to the warehouse being open.
    fn create_linkage_constraints(&self, instance: &ProblemInstance, variables: &ModelVariables) -> Vec<LinearConstraint>;
}

/// Builds an abstract model for the given instance and configuration.
///
/// A detected capacity shortfall is reported through the logger and does not abort the
/// build: such model is legitimately infeasible and the solver proves that.
pub fn create_model(instance: &ProblemInstance, config: &FormulationConfig, logger: &InfoLogger) -> ModelResult<AbstractModel> {
    instance.validate()?;

    let (total_demand, total_capacity) = (instance.total_demand(), instance.total_capacity());
    if total_demand > total_capacity {
        (logger)(&format!("total demand {total_demand} exceeds total capacity {total_capacity}, the model cannot be feasible"));
    }

    let strategy: &dyn FormulationStrategy = match config.formulation {
        FormulationKind::Lp => &ContinuousAssignment,
        FormulationKind::Cp => &BooleanAssignment,
    };

    let mut model = AbstractModel::new();
    let variables = strategy.create_variables(instance, &mut model);

    model.add_constraints(create_demand_constraints(instance, &variables));
    model.add_constraints(create_capacity_constraints(instance, &variables));
    model.add_constraints(strategy.create_linkage_constraints(instance, &variables));

    let context = GeneratorContext {
        instance,
        variables: &variables,
        minimum_usage_fraction: config.minimum_usage_fraction.or(instance.minimum_usage_fraction),
    };
    model.add_constraints(create_toggle_constraints(&context, &config.toggles)?);

    model.set_objective(create_objective(instance, &variables));
    model.set_variables(variables);

    Ok(model)
}

/// Creates `Σ_w served[w][c] = demand[c]` constraints: no shortage and no surplus.
fn create_demand_constraints(instance: &ProblemInstance, variables: &ModelVariables) -> Vec<LinearConstraint> {
    (0..instance.customer_count)
        .map(|customer| {
            let expr = (0..instance.warehouse_count).map(|warehouse| (variables.served[warehouse][customer], 1.)).collect();

            LinearConstraint::equal(expr, instance.demands[customer])
        })
        .collect()
}

/// Creates `Σ_c served[w][c] ≤ capacity[w] * open[w]` constraints: a closed warehouse
/// has zero capacity.
fn create_capacity_constraints(instance: &ProblemInstance, variables: &ModelVariables) -> Vec<LinearConstraint> {
    (0..instance.warehouse_count)
        .map(|warehouse| {
            let mut expr: LinearExpr =
                (0..instance.customer_count).map(|customer| (variables.served[warehouse][customer], 1.)).collect();
            expr.add_term(variables.open[warehouse], -instance.capacities[warehouse]);

            LinearConstraint::less_or_equal(expr, 0.)
        })
        .collect()
}

fn create_objective(instance: &ProblemInstance, variables: &ModelVariables) -> LinearExpr {
    let fixed = (0..instance.warehouse_count).map(|warehouse| (variables.open[warehouse], instance.fixed_costs[warehouse]));
    let transport = (0..instance.warehouse_count).flat_map(|warehouse| {
        (0..instance.customer_count)
            .map(move |customer| (variables.served[warehouse][customer], instance.transport_costs[warehouse][customer]))
    });

    fixed.chain(transport).collect()
}
