#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::utils::{Float, ModelError, ModelResult};

/// A type alias for a zero-based warehouse index.
pub type WarehouseIndex = usize;

/// A type alias for a zero-based customer index.
pub type CustomerIndex = usize;

/// Defines a capacitated warehouse location problem.
///
/// An instance is immutable once constructed: every solve borrows it read only, so
/// concurrent solves over one instance are safe.
#[derive(Clone, Debug, PartialEq)]
pub struct ProblemInstance {
    /// Amount of candidate warehouses.
    pub warehouse_count: usize,
    /// Amount of customers.
    pub customer_count: usize,
    /// Specifies an opening cost per warehouse.
    pub fixed_costs: Vec<Float>,
    /// Specifies a supply capacity per warehouse.
    pub capacities: Vec<Float>,
    /// Specifies a demanded quantity per customer.
    pub demands: Vec<Float>,
    /// Specifies unit transport costs as a warehouse major matrix.
    pub transport_costs: Vec<Vec<Float>>,
    /// Specifies warehouse pairs which must not be open at the same time.
    pub prohibited_pairs: Vec<(WarehouseIndex, WarehouseIndex)>,
    /// Specifies (dependent, prerequisite) pairs: the first warehouse may open only if
    /// the second one is open.
    pub dependent_warehouses: Vec<(WarehouseIndex, WarehouseIndex)>,
    /// Specifies warehouse groups which share their open state.
    pub open_together_groups: Vec<Vec<WarehouseIndex>>,
    /// An optional minimum capacity usage fraction applied to open warehouses.
    pub minimum_usage_fraction: Option<Float>,
}

impl ProblemInstance {
    /// Returns a total demanded quantity over all customers.
    pub fn total_demand(&self) -> Float {
        self.demands.iter().sum()
    }

    /// Returns a total capacity over all warehouses.
    pub fn total_capacity(&self) -> Float {
        self.capacities.iter().sum()
    }

    /// Checks that dimensions, value signs and index references are consistent.
    pub fn validate(&self) -> ModelResult<()> {
        self.check_dimensions()?;
        self.check_values()?;
        self.check_references()
    }

    fn check_dimensions(&self) -> ModelResult<()> {
        if self.warehouse_count == 0 {
            return Err(ModelError::DimensionMismatch("warehouse count must be positive".to_string()));
        }

        if self.customer_count == 0 {
            return Err(ModelError::DimensionMismatch("customer count must be positive".to_string()));
        }

        let expectations = [
            ("fixed costs", self.fixed_costs.len(), self.warehouse_count),
            ("capacities", self.capacities.len(), self.warehouse_count),
            ("demands", self.demands.len(), self.customer_count),
            ("transport cost rows", self.transport_costs.len(), self.warehouse_count),
        ];
        for (name, actual, expected) in expectations {
            if actual != expected {
                return Err(ModelError::DimensionMismatch(format!("{name}: expected {expected} values, got {actual}")));
            }
        }

        self.transport_costs.iter().enumerate().try_for_each(|(warehouse, row)| {
            if row.len() != self.customer_count {
                Err(ModelError::DimensionMismatch(format!(
                    "transport cost row {warehouse}: expected {} values, got {}",
                    self.customer_count,
                    row.len()
                )))
            } else {
                Ok(())
            }
        })
    }

    fn check_values(&self) -> ModelResult<()> {
        let has_negative = self
            .fixed_costs
            .iter()
            .chain(self.capacities.iter())
            .chain(self.demands.iter())
            .chain(self.transport_costs.iter().flatten())
            .any(|&value| value < 0.);

        if has_negative {
            return Err(ModelError::InvalidConfiguration("costs, capacities and demands must be non-negative".to_string()));
        }

        if let Some(fraction) = self.minimum_usage_fraction {
            if !(0. ..=1.).contains(&fraction) {
                return Err(ModelError::InvalidConfiguration(format!(
                    "minimum usage fraction must be within [0, 1], got {fraction}"
                )));
            }
        }

        Ok(())
    }

    fn check_references(&self) -> ModelResult<()> {
        let pairs = self.prohibited_pairs.iter().chain(self.dependent_warehouses.iter());
        let indices = pairs.flat_map(|&(a, b)| [a, b]).chain(self.open_together_groups.iter().flatten().copied());

        for index in indices {
            if index >= self.warehouse_count {
                return Err(ModelError::InvalidConfiguration(format!(
                    "warehouse index {index} is out of range 0..{}",
                    self.warehouse_count
                )));
            }
        }

        Ok(())
    }
}
