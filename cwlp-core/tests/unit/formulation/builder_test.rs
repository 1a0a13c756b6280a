use super::*;
use crate::catalog::{MINIMUM_CAPACITY_USAGE, PROHIBITED_PAIRS};
use crate::helpers::*;
use crate::utils::create_silent_logger;
use std::sync::{Arc, Mutex};

#[test]
fn can_build_continuous_model() {
    let instance = create_two_warehouse_instance();
    let config = FormulationConfig::new(FormulationKind::Lp);

    let model = create_model(&instance, &config, &create_silent_logger()).unwrap();

    // 2 open + 6 supply variables, 3 demand + 2 capacity + 6 linkage constraints
    assert_eq!(model.variable_count(), 8);
    assert_eq!(model.constraint_count(), 11);
    assert_eq!(model.objective().terms().len(), 8);
    assert_eq!(model.variables().open.len(), 2);
}

#[test]
fn can_build_boolean_model() {
    let instance = create_two_warehouse_instance();
    let config = FormulationConfig::new(FormulationKind::Cp);

    let model = create_model(&instance, &config, &create_silent_logger()).unwrap();

    assert_eq!(model.variable_count(), 14);
    assert_eq!(model.constraint_count(), 17);
    assert!(model.variables().assign.is_some());
}

#[test]
fn can_keep_demand_constraints_as_equalities() {
    let instance = create_two_warehouse_instance();
    let config = FormulationConfig::new(FormulationKind::Lp);

    let model = create_model(&instance, &config, &create_silent_logger()).unwrap();

    let demands: Vec<_> = model.constraints().iter().filter(|constraint| constraint.relation == Relation::Equal).collect();
    assert_eq!(demands.len(), 3);
    assert_eq!(demands[0].rhs, 15.);
}

#[test]
fn can_append_toggle_constraints() {
    let mut instance = create_two_warehouse_instance();
    instance.prohibited_pairs.push((0, 1));
    let config = FormulationConfig::new(FormulationKind::Lp)
        .with_toggles(ConstraintToggleSet::new([PROHIBITED_PAIRS]).unwrap());

    let model = create_model(&instance, &config, &create_silent_logger()).unwrap();

    assert_eq!(model.constraint_count(), 12);
    let last = model.constraints().last().unwrap();
    assert_eq!(last.relation, Relation::LessOrEqual);
    assert_eq!(last.rhs, 1.);
}

#[test]
fn can_reject_minimum_usage_toggle_without_fraction() {
    let instance = create_two_warehouse_instance();
    let config = FormulationConfig::new(FormulationKind::Lp)
        .with_toggles(ConstraintToggleSet::new([MINIMUM_CAPACITY_USAGE]).unwrap());

    let result = create_model(&instance, &config, &create_silent_logger());

    assert!(matches!(result, Err(ModelError::InvalidConfiguration(_))));
}

#[test]
fn can_prefer_config_fraction_over_instance() {
    let mut instance = create_two_warehouse_instance();
    instance.minimum_usage_fraction = Some(0.5);
    let config = FormulationConfig::new(FormulationKind::Lp)
        .with_toggles(ConstraintToggleSet::new([MINIMUM_CAPACITY_USAGE]).unwrap())
        .with_minimum_usage_fraction(0.9);

    let model = create_model(&instance, &config, &create_silent_logger()).unwrap();

    let usage = model.constraints().iter().find(|constraint| constraint.relation == Relation::GreaterOrEqual).unwrap();
    let open_term = usage.expr.terms().last().copied().unwrap();
    assert_eq!(open_term, (model.variables().open[0], -45.));
}

#[test]
fn can_report_capacity_shortfall() {
    let mut instance = create_two_warehouse_instance();
    instance.demands = vec![40., 40., 40.];
    let messages: Arc<Mutex<Vec<String>>> = Arc::default();
    let captured = messages.clone();
    let logger: InfoLogger = Arc::new(move |message: &str| captured.lock().unwrap().push(message.to_string()));

    create_model(&instance, &FormulationConfig::new(FormulationKind::Lp), &logger).unwrap();

    assert!(messages.lock().unwrap().iter().any(|message| message.contains("exceeds total capacity")));
}

#[test]
fn can_reject_invalid_instance() {
    let mut instance = create_two_warehouse_instance();
    instance.capacities[0] = -50.;

    let result = create_model(&instance, &FormulationConfig::new(FormulationKind::Lp), &create_silent_logger());

    assert!(matches!(result, Err(ModelError::InvalidConfiguration(_))));
}

#[test]
fn can_parse_formulation_kind_from_text() {
    assert_eq!("lp".parse::<FormulationKind>().unwrap(), FormulationKind::Lp);
    assert_eq!("CP".parse::<FormulationKind>().unwrap(), FormulationKind::Cp);
    assert!(matches!("QP".parse::<FormulationKind>(), Err(ModelError::InvalidConfiguration(_))));
    assert_eq!(FormulationKind::Lp.to_string(), "LP");
}
