#[cfg(test)]
#[path = "../../tests/unit/orlib/reader_test.rs"]
mod reader_test;

use crate::common::*;
use cwlp_core::prelude::*;
use std::io::{BufReader, Read};

/// A trait to read a problem in the OR-Library cap format: warehouse and customer counts,
/// then a capacity and a fixed cost per warehouse, then per customer its demand followed
/// by the cost of allocating the whole demand to each warehouse.
pub trait OrLibProblem {
    /// Reads an OR-Library problem converting allocation costs into unit transport costs.
    fn read_orlib(self) -> ModelResult<ProblemInstance>;
}

impl<R: Read> OrLibProblem for BufReader<R> {
    fn read_orlib(mut self) -> ModelResult<ProblemInstance> {
        read_orlib_format(&read_text(&mut self)?)
    }
}

impl OrLibProblem for String {
    fn read_orlib(self) -> ModelResult<ProblemInstance> {
        read_orlib_format(&self)
    }
}

fn read_orlib_format(text: &str) -> ModelResult<ProblemInstance> {
    let mut stream = TokenStream::whitespace(text);

    let warehouse_count = stream.next_count("warehouse count")?;
    let customer_count = stream.next_count("customer count")?;

    let mut capacities = Vec::with_capacity(warehouse_count);
    let mut fixed_costs = Vec::with_capacity(warehouse_count);
    for _ in 0..warehouse_count {
        capacities.push(stream.next_non_negative("capacity")?);
        fixed_costs.push(stream.next_non_negative("fixed cost")?);
    }

    let mut demands = Vec::with_capacity(customer_count);
    let mut transport_costs = vec![vec![0.; customer_count]; warehouse_count];
    for customer in 0..customer_count {
        let demand = stream.next_non_negative("demand")?;
        demands.push(demand);

        // allocation costs cover the whole demand and are stored customer major
        for row in transport_costs.iter_mut() {
            let allocation_cost = stream.next_non_negative("allocation cost")?;
            row[customer] = if demand > 0. { allocation_cost / demand } else { 0. };
        }
    }

    if let Some(token) = stream.peek() {
        return Err(ModelError::parse_at(token.line, format!("unexpected trailing content: '{}'", token.text)));
    }

    let instance = ProblemInstance {
        warehouse_count,
        customer_count,
        fixed_costs,
        capacities,
        demands,
        transport_costs,
        prohibited_pairs: vec![],
        dependent_warehouses: vec![],
        open_together_groups: vec![],
        minimum_usage_fraction: None,
    };
    instance.validate()?;

    Ok(instance)
}
