#[cfg(test)]
#[path = "../../tests/unit/dat/writer_test.rs"]
mod writer_test;

use cwlp_core::prelude::*;
use std::io::{BufWriter, Write};

/// A trait to write a problem in the dat format.
pub trait DatInstance {
    /// Writes the instance as dat text with one-based warehouse indices. Optional
    /// sections are emitted only when the instance carries their data.
    fn write_dat<W: Write>(&self, writer: &mut BufWriter<W>) -> ModelResult<()>;
}

impl DatInstance for ProblemInstance {
    fn write_dat<W: Write>(&self, writer: &mut BufWriter<W>) -> ModelResult<()> {
        writeln!(writer, "nWarehouses = {};", self.warehouse_count)?;
        writeln!(writer, "nCustomers = {};", self.customer_count)?;
        writeln!(writer, "fixedCost = {};", format_vector(&self.fixed_costs))?;
        writeln!(writer, "capacity = {};", format_vector(&self.capacities))?;
        writeln!(writer, "demand = {};", format_vector(&self.demands))?;

        let rows = self.transport_costs.iter().map(|row| format!("  {}", format_vector(row))).collect::<Vec<_>>().join(",\n");
        writeln!(writer, "transportCost = [\n{rows}\n];")?;

        if !self.prohibited_pairs.is_empty() {
            writeln!(writer, "prohibited_pairs = {};", format_pairs(&self.prohibited_pairs))?;
        }
        if !self.dependent_warehouses.is_empty() {
            writeln!(writer, "dependent_warehouses = {};", format_pairs(&self.dependent_warehouses))?;
        }
        if !self.open_together_groups.is_empty() {
            let groups = self.open_together_groups.iter().map(|group| format_group(group)).collect::<Vec<_>>().join(", ");
            writeln!(writer, "open_together_groups = [{groups}];")?;
        }
        if let Some(fraction) = self.minimum_usage_fraction {
            writeln!(writer, "minUsageFraction = {fraction};")?;
        }

        writer.flush()?;

        Ok(())
    }
}

fn format_vector(values: &[Float]) -> String {
    format!("[{}]", values.iter().map(|value| value.to_string()).collect::<Vec<_>>().join(", "))
}

fn format_pairs(pairs: &[(WarehouseIndex, WarehouseIndex)]) -> String {
    format!("[{}]", pairs.iter().map(|&(a, b)| format!("({}, {})", a + 1, b + 1)).collect::<Vec<_>>().join(", "))
}

fn format_group(group: &[WarehouseIndex]) -> String {
    format!("[{}]", group.iter().map(|&index| (index + 1).to_string()).collect::<Vec<_>>().join(", "))
}
