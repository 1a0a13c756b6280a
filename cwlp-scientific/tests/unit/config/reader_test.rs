use super::*;

#[test]
fn can_read_full_configuration() {
    let json = r#"{
        "formulation": "CP",
        "toggles": {
            "minimum_capacity_usage": true,
            "prohibited_pairs": false,
            "dependent_warehouses": true
        },
        "minimumCapacityUsageFraction": 0.75
    }"#;

    let config = read_formulation_config(json.as_bytes()).unwrap();

    assert_eq!(config.formulation, FormulationKind::Cp);
    assert!(config.toggles.is_enabled("minimum_capacity_usage"));
    assert!(config.toggles.is_enabled("dependent_warehouses"));
    assert!(!config.toggles.is_enabled("prohibited_pairs"));
    assert_eq!(config.minimum_usage_fraction, Some(0.75));
}

#[test]
fn can_default_toggles_and_fraction() {
    let config = read_formulation_config(r#"{"formulation": "lp"}"#.as_bytes()).unwrap();

    assert_eq!(config.formulation, FormulationKind::Lp);
    assert!(config.toggles.is_empty());
    assert_eq!(config.minimum_usage_fraction, None);
}

#[test]
fn can_reject_unknown_toggle() {
    let json = r#"{"formulation": "LP", "toggles": {"warp_drive": true}}"#;

    let result = read_formulation_config(json.as_bytes());

    assert!(matches!(result, Err(ModelError::UnknownConstraint(_))));
}

#[test]
fn can_reject_unknown_formulation() {
    let result = read_formulation_config(r#"{"formulation": "QP"}"#.as_bytes());

    assert!(matches!(result, Err(ModelError::InvalidConfiguration(_))));
}

#[test]
fn can_reject_malformed_json() {
    let result = read_formulation_config("{".as_bytes());

    assert!(matches!(result, Err(ModelError::Parse { line: None, .. })));
}
