//! This module provides a catalog of optional constraints which can be toggled per solve
//! without changing the base formulation. Adding a toggle means adding one generator
//! module and one registry entry.

#[cfg(test)]
#[path = "../../tests/unit/catalog/catalog_test.rs"]
mod catalog_test;

mod dependent_warehouses;
mod minimum_usage;
mod open_together;
mod prohibited_pairs;

use crate::formulation::{LinearConstraint, ModelVariables};
use crate::models::ProblemInstance;
use crate::utils::{Float, ModelError, ModelResult};
use lazy_static::lazy_static;
use rustc_hash::{FxHashMap, FxHashSet};

/// A name of the toggle which forces open warehouses to use a minimum capacity fraction.
pub const MINIMUM_CAPACITY_USAGE: &str = "minimum_capacity_usage";

/// A name of the toggle which forbids both warehouses of a pair to be open.
pub const PROHIBITED_PAIRS: &str = "prohibited_pairs";

/// A name of the toggle which allows a dependent warehouse to open only with its prerequisite.
pub const DEPENDENT_WAREHOUSES: &str = "dependent_warehouses";

/// A name of the toggle which forces warehouse groups to share their open state.
pub const OPEN_TOGETHER_GROUPS: &str = "open_together_groups";

/// Carries everything a constraint generator may inspect: the instance, the variable
/// roles of the model in progress and the resolved minimum usage fraction.
pub struct GeneratorContext<'a> {
    /// A problem instance.
    pub instance: &'a ProblemInstance,
    /// Variable roles of the model in progress.
    pub variables: &'a ModelVariables,
    /// A minimum usage fraction resolved from the configuration or the instance.
    pub minimum_usage_fraction: Option<Float>,
}

/// A function which emits constraint expressions for one catalog entry. Generators are
/// independent and order insensitive: they rely only on the base variables existing.
pub type ConstraintGenerator = fn(&GeneratorContext<'_>) -> ModelResult<Vec<LinearConstraint>>;

lazy_static! {
    static ref CATALOG: FxHashMap<&'static str, ConstraintGenerator> = {
        let mut catalog: FxHashMap<&'static str, ConstraintGenerator> = FxHashMap::default();

        catalog.insert(MINIMUM_CAPACITY_USAGE, minimum_usage::create_minimum_usage_constraints);
        catalog.insert(PROHIBITED_PAIRS, prohibited_pairs::create_prohibited_pair_constraints);
        catalog.insert(DEPENDENT_WAREHOUSES, dependent_warehouses::create_dependency_constraints);
        catalog.insert(OPEN_TOGETHER_GROUPS, open_together::create_group_constraints);

        catalog
    };
}

fn find_generator(name: &str) -> ModelResult<ConstraintGenerator> {
    CATALOG.get(name).copied().ok_or_else(|| ModelError::UnknownConstraint(format!("'{name}' is not in the catalog")))
}

/// A validated set of enabled optional constraints. All constraints are disabled unless
/// explicitly enabled.
#[derive(Clone, Debug, Default)]
pub struct ConstraintToggleSet {
    enabled: Vec<String>,
}

impl ConstraintToggleSet {
    /// Creates a toggle set with the given constraints enabled.
    ///
    /// Unknown and repeated names are rejected with [`ModelError::UnknownConstraint`].
    pub fn new<I, S>(names: I) -> ModelResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::try_from_flags(names.into_iter().map(|name| (name, true)))
    }

    /// Creates a toggle set from (name, enabled) pairs. Disabled names are validated too,
    /// but stay out of the set.
    pub fn try_from_flags<I, S>(flags: I) -> ModelResult<Self>
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let mut enabled = Vec::default();

        for (name, is_enabled) in flags {
            let name = name.as_ref();
            find_generator(name)?;

            if !seen.insert(name.to_string()) {
                return Err(ModelError::UnknownConstraint(format!("'{name}' is requested more than once")));
            }

            if is_enabled {
                enabled.push(name.to_string());
            }
        }

        // keep the model layout deterministic regardless of the requested order
        enabled.sort();

        Ok(Self { enabled })
    }

    /// Returns enabled constraint names in their application order.
    pub fn enabled(&self) -> impl Iterator<Item = &str> {
        self.enabled.iter().map(String::as_str)
    }

    /// Returns true when the given constraint is enabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.iter().any(|enabled| enabled == name)
    }

    /// Returns true when no optional constraint is enabled.
    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }
}

/// Emits constraints of every enabled catalog entry in the application order.
pub fn create_toggle_constraints(context: &GeneratorContext<'_>, toggles: &ConstraintToggleSet) -> ModelResult<Vec<LinearConstraint>> {
    toggles.enabled().try_fold(Vec::default(), |mut constraints, name| {
        constraints.extend(find_generator(name)?(context)?);
        Ok(constraints)
    })
}
