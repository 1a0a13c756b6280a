#[cfg(test)]
#[path = "../../tests/unit/config/reader_test.rs"]
mod reader_test;

use cwlp_core::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigData {
    formulation: String,
    #[serde(default)]
    toggles: HashMap<String, bool>,
    #[serde(default)]
    minimum_capacity_usage_fraction: Option<Float>,
}

/// Reads a formulation configuration from a JSON source.
pub fn read_formulation_config<R: Read>(reader: R) -> ModelResult<FormulationConfig> {
    let data: ConfigData =
        serde_json::from_reader(reader).map_err(|err| ModelError::parse(format!("cannot deserialize configuration: {err}")))?;

    // map iteration order is arbitrary, keep reported toggle errors deterministic
    let mut flags: Vec<_> = data.toggles.into_iter().collect();
    flags.sort();

    let config = FormulationConfig::new(data.formulation.parse::<FormulationKind>()?)
        .with_toggles(ConstraintToggleSet::try_from_flags(flags)?);

    Ok(match data.minimum_capacity_usage_fraction {
        Some(fraction) => config.with_minimum_usage_fraction(fraction),
        None => config,
    })
}
