#[cfg(test)]
#[path = "../../tests/unit/dat/reader_test.rs"]
mod reader_test;

use crate::common::*;
use cwlp_core::prelude::*;
use std::io::{BufReader, Read};

const OPTIONAL_SECTIONS: [&str; 4] = ["prohibited_pairs", "dependent_warehouses", "open_together_groups", "minUsageFraction"];

/// Specifies how absent optional sections are treated by the reader.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DatReaderMode {
    /// Absent optional sections mean empty constraint data.
    #[default]
    Lenient,
    /// Absent pair sections are reported as parse errors.
    Strict,
}

/// A trait to read a problem in the dat format.
pub trait DatProblem {
    /// Reads a dat problem treating absent optional sections as empty.
    fn read_dat(self) -> ModelResult<ProblemInstance>;

    /// Reads a dat problem with the given optional section handling.
    fn read_dat_with_mode(self, mode: DatReaderMode) -> ModelResult<ProblemInstance>;
}

impl<R: Read> DatProblem for BufReader<R> {
    fn read_dat(self) -> ModelResult<ProblemInstance> {
        self.read_dat_with_mode(DatReaderMode::default())
    }

    fn read_dat_with_mode(mut self, mode: DatReaderMode) -> ModelResult<ProblemInstance> {
        read_dat_format(&read_text(&mut self)?, mode)
    }
}

impl DatProblem for String {
    fn read_dat(self) -> ModelResult<ProblemInstance> {
        self.read_dat_with_mode(DatReaderMode::default())
    }

    fn read_dat_with_mode(self, mode: DatReaderMode) -> ModelResult<ProblemInstance> {
        read_dat_format(&self, mode)
    }
}

fn read_dat_format(text: &str, mode: DatReaderMode) -> ModelResult<ProblemInstance> {
    let mut stream = TokenStream::punctuated(text);

    let warehouse_count = read_count(&mut stream, "nWarehouses")?;
    let customer_count = read_count(&mut stream, "nCustomers")?;
    let fixed_costs = read_vector(&mut stream, "fixedCost")?;
    let capacities = read_vector(&mut stream, "capacity")?;
    let demands = read_vector(&mut stream, "demand")?;
    let transport_costs = read_matrix(&mut stream, "transportCost")?;

    let mut prohibited_pairs = None;
    let mut dependent_warehouses = None;
    let mut open_together_groups = None;
    let mut minimum_usage_fraction = None;

    // optional sections come in any order, each at most once
    while let Some(token) = stream.peek() {
        match token.text {
            "prohibited_pairs" if prohibited_pairs.is_none() => {
                prohibited_pairs = Some(read_pairs(&mut stream, "prohibited_pairs", warehouse_count)?);
            }
            "dependent_warehouses" if dependent_warehouses.is_none() => {
                dependent_warehouses = Some(read_pairs(&mut stream, "dependent_warehouses", warehouse_count)?);
            }
            "open_together_groups" if open_together_groups.is_none() => {
                open_together_groups = Some(read_groups(&mut stream, warehouse_count)?);
            }
            "minUsageFraction" if minimum_usage_fraction.is_none() => {
                minimum_usage_fraction = Some(read_fraction(&mut stream)?);
            }
            section if OPTIONAL_SECTIONS.contains(&section) => {
                return Err(ModelError::parse_at(token.line, format!("section '{section}' is defined more than once")));
            }
            section => {
                return Err(ModelError::parse_at(token.line, format!("unknown section '{section}'")));
            }
        }
    }

    if mode == DatReaderMode::Strict && (prohibited_pairs.is_none() || dependent_warehouses.is_none()) {
        return Err(ModelError::parse("prohibited_pairs and dependent_warehouses sections are required in strict mode"));
    }

    let instance = ProblemInstance {
        warehouse_count,
        customer_count,
        fixed_costs,
        capacities,
        demands,
        transport_costs,
        prohibited_pairs: prohibited_pairs.unwrap_or_default(),
        dependent_warehouses: dependent_warehouses.unwrap_or_default(),
        open_together_groups: open_together_groups.unwrap_or_default(),
        minimum_usage_fraction,
    };
    instance.validate()?;

    Ok(instance)
}

fn read_count(stream: &mut TokenStream<'_>, name: &str) -> ModelResult<usize> {
    stream.expect(name)?;
    stream.expect("=")?;
    let count = stream.next_count(name)?;
    stream.expect(";")?;

    Ok(count)
}

fn read_vector(stream: &mut TokenStream<'_>, name: &str) -> ModelResult<Vec<Float>> {
    stream.expect(name)?;
    stream.expect("=")?;
    let values = read_values(stream, name)?;
    stream.expect(";")?;

    Ok(values)
}

fn read_matrix(stream: &mut TokenStream<'_>, name: &str) -> ModelResult<Vec<Vec<Float>>> {
    stream.expect(name)?;
    stream.expect("=")?;
    stream.expect("[")?;

    let mut rows = Vec::new();
    loop {
        if let Some(token) = stream.peek() {
            if token.text == "]" {
                stream.expect("]")?;
                break;
            }
        }
        if !rows.is_empty() {
            stream.expect(",")?;
        }
        rows.push(read_values(stream, name)?);
    }
    stream.expect(";")?;

    Ok(rows)
}

fn read_values(stream: &mut TokenStream<'_>, name: &str) -> ModelResult<Vec<Float>> {
    stream.expect("[")?;

    let mut values = Vec::new();
    loop {
        if let Some(token) = stream.peek() {
            if token.text == "]" {
                stream.expect("]")?;
                break;
            }
        }
        if !values.is_empty() {
            stream.expect(",")?;
        }
        values.push(stream.next_non_negative(name)?);
    }

    Ok(values)
}

fn read_pairs(
    stream: &mut TokenStream<'_>,
    name: &str,
    warehouse_count: usize,
) -> ModelResult<Vec<(WarehouseIndex, WarehouseIndex)>> {
    stream.expect(name)?;
    stream.expect("=")?;
    stream.expect("[")?;

    let mut pairs = Vec::new();
    loop {
        if let Some(token) = stream.peek() {
            if token.text == "]" {
                stream.expect("]")?;
                break;
            }
        }
        if !pairs.is_empty() {
            stream.expect(",")?;
        }

        stream.expect("(")?;
        let first = read_index(stream, warehouse_count)?;
        stream.expect(",")?;
        let second = read_index(stream, warehouse_count)?;
        stream.expect(")")?;
        pairs.push((first, second));
    }
    stream.expect(";")?;

    Ok(pairs)
}

fn read_groups(stream: &mut TokenStream<'_>, warehouse_count: usize) -> ModelResult<Vec<Vec<WarehouseIndex>>> {
    stream.expect("open_together_groups")?;
    stream.expect("=")?;
    stream.expect("[")?;

    let mut groups = Vec::new();
    loop {
        if let Some(token) = stream.peek() {
            if token.text == "]" {
                stream.expect("]")?;
                break;
            }
        }
        if !groups.is_empty() {
            stream.expect(",")?;
        }
        groups.push(read_group(stream, warehouse_count)?);
    }
    stream.expect(";")?;

    Ok(groups)
}

fn read_group(stream: &mut TokenStream<'_>, warehouse_count: usize) -> ModelResult<Vec<WarehouseIndex>> {
    stream.expect("[")?;

    let mut group = Vec::new();
    loop {
        if let Some(token) = stream.peek() {
            if token.text == "]" {
                stream.expect("]")?;
                break;
            }
        }
        if !group.is_empty() {
            stream.expect(",")?;
        }
        group.push(read_index(stream, warehouse_count)?);
    }

    Ok(group)
}

fn read_fraction(stream: &mut TokenStream<'_>) -> ModelResult<Float> {
    stream.expect("minUsageFraction")?;
    stream.expect("=")?;
    let fraction = stream.next_non_negative("usage fraction")?;
    stream.expect(";")?;

    Ok(fraction)
}

/// Converts a one-based warehouse index from the input into the zero-based form.
fn read_index(stream: &mut TokenStream<'_>, warehouse_count: usize) -> ModelResult<WarehouseIndex> {
    let token = stream.next_token("warehouse index")?;
    match token.text.parse::<usize>() {
        Ok(index) if (1..=warehouse_count).contains(&index) => Ok(index - 1),
        Ok(index) => Err(ModelError::parse_at(token.line, format!("warehouse index {index} is out of range 1..={warehouse_count}"))),
        Err(_) => Err(ModelError::parse_at(token.line, format!("expected warehouse index, got '{}'", token.text))),
    }
}
