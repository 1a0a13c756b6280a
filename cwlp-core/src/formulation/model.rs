#[cfg(test)]
#[path = "../../tests/unit/formulation/model_test.rs"]
mod model_test;

use crate::utils::Float;

/// A dense identifier of a decision variable inside an [`AbstractModel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VariableId(usize);

impl VariableId {
    /// Returns a position of the variable inside the model.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Specifies a decision variable domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VariableKind {
    /// A boolean indicator variable.
    Binary,
    /// A continuous variable within inclusive bounds.
    Continuous {
        /// A lower bound.
        min: Float,
        /// An upper bound, infinite when unbounded.
        max: Float,
    },
    /// An integer variable within inclusive bounds.
    Integer {
        /// A lower bound.
        min: Float,
        /// An upper bound.
        max: Float,
    },
}

/// A linear combination of decision variables.
#[derive(Clone, Debug, Default)]
pub struct LinearExpr {
    terms: Vec<(VariableId, Float)>,
}

impl LinearExpr {
    /// Creates an empty expression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single term.
    pub fn add_term(&mut self, variable: VariableId, coefficient: Float) {
        self.terms.push((variable, coefficient));
    }

    /// Returns terms as (variable, coefficient) pairs.
    pub fn terms(&self) -> &[(VariableId, Float)] {
        &self.terms
    }
}

impl FromIterator<(VariableId, Float)> for LinearExpr {
    fn from_iter<T: IntoIterator<Item = (VariableId, Float)>>(iter: T) -> Self {
        Self { terms: iter.into_iter().collect() }
    }
}

/// A relation between a linear expression and a constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    /// The expression is less than or equal to the constant.
    LessOrEqual,
    /// The expression is greater than or equal to the constant.
    GreaterOrEqual,
    /// The expression is equal to the constant.
    Equal,
}

/// A linear constraint of form `expression (≤|≥|=) rhs`.
#[derive(Clone, Debug)]
pub struct LinearConstraint {
    /// A left hand side expression.
    pub expr: LinearExpr,
    /// A relation kind.
    pub relation: Relation,
    /// A right hand side constant.
    pub rhs: Float,
}

impl LinearConstraint {
    /// Creates an `expression ≤ rhs` constraint.
    pub fn less_or_equal(expr: LinearExpr, rhs: Float) -> Self {
        Self { expr, relation: Relation::LessOrEqual, rhs }
    }

    /// Creates an `expression ≥ rhs` constraint.
    pub fn greater_or_equal(expr: LinearExpr, rhs: Float) -> Self {
        Self { expr, relation: Relation::GreaterOrEqual, rhs }
    }

    /// Creates an `expression = rhs` constraint.
    pub fn equal(expr: LinearExpr, rhs: Float) -> Self {
        Self { expr, relation: Relation::Equal, rhs }
    }
}

/// Keeps track of which decision variable plays which domain role, so that solution
/// extraction does not depend on variable ordering or names.
#[derive(Clone, Debug, Default)]
pub struct ModelVariables {
    /// An open indicator per warehouse.
    pub open: Vec<VariableId>,
    /// A served quantity per warehouse and customer: continuous supply in the continuous
    /// formulation, a bounded integer in the boolean one.
    pub served: Vec<Vec<VariableId>>,
    /// An assignment indicator per warehouse and customer, boolean formulation only.
    pub assign: Option<Vec<Vec<VariableId>>>,
}

/// An abstract optimization model: decision variables, linear constraints and a linear
/// minimization objective.
///
/// A model is built fresh per solve, owned by a single builder invocation and discarded
/// once the raw assignment is extracted.
#[derive(Clone, Debug, Default)]
pub struct AbstractModel {
    kinds: Vec<VariableKind>,
    variables: ModelVariables,
    constraints: Vec<LinearConstraint>,
    objective: LinearExpr,
}

impl AbstractModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a decision variable of the given kind and returns its identifier.
    pub fn add_variable(&mut self, kind: VariableKind) -> VariableId {
        let id = VariableId(self.kinds.len());
        self.kinds.push(kind);
        id
    }

    /// Appends a constraint.
    pub fn add_constraint(&mut self, constraint: LinearConstraint) {
        self.constraints.push(constraint);
    }

    /// Appends multiple constraints.
    pub fn add_constraints(&mut self, constraints: impl IntoIterator<Item = LinearConstraint>) {
        self.constraints.extend(constraints);
    }

    /// Sets a minimization objective.
    pub fn set_objective(&mut self, objective: LinearExpr) {
        self.objective = objective;
    }

    /// Sets domain roles of the decision variables.
    pub fn set_variables(&mut self, variables: ModelVariables) {
        self.variables = variables;
    }

    /// Returns domains of all decision variables in identifier order.
    pub fn variable_kinds(&self) -> &[VariableKind] {
        &self.kinds
    }

    /// Returns domain roles of the decision variables.
    pub fn variables(&self) -> &ModelVariables {
        &self.variables
    }

    /// Returns all constraints.
    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    /// Returns a minimization objective.
    pub fn objective(&self) -> &LinearExpr {
        &self.objective
    }

    /// Returns an amount of decision variables.
    pub fn variable_count(&self) -> usize {
        self.kinds.len()
    }

    /// Returns an amount of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}
