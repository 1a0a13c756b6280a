use super::*;
use crate::formulation::{FormulationConfig, FormulationKind, create_model};
use crate::helpers::*;
use crate::utils::create_silent_logger;

fn create_lp_model(instance: &ProblemInstance) -> AbstractModel {
    create_model(instance, &FormulationConfig::new(FormulationKind::Lp), &create_silent_logger()).unwrap()
}

fn create_run_values(model: &AbstractModel) -> Vec<Float> {
    let variables = model.variables();
    let mut values = vec![0.; model.variable_count()];

    values[variables.open[0].index()] = 1. - 5E-7;
    values[variables.open[1].index()] = 3E-7;
    for customer in 0..3 {
        values[variables.served[0][customer].index()] = 15.;
    }
    values[variables.served[1][0].index()] = 1E-9;

    values
}

#[test]
fn can_extract_solution_with_snapped_indicators() {
    let instance = create_two_warehouse_instance();
    let model = create_lp_model(&instance);
    let run = BackendRun { status: SolveStatus::Optimal, values: create_run_values(&model), objective: Some(55.) };

    let solution = extract_solution(&instance, &model, &run);

    assert_eq!(solution.status, SolveStatus::Optimal);
    assert_eq!(solution.open_warehouses, vec![0]);
    assert_eq!(solution.objective, Some(55.));
    assert_eq!(solution.fixed_cost, 10.);
    assert_eq!(solution.transport_cost, 45.);
    assert!(solution.is_open(0));
    assert!(!solution.is_open(1));
    assert_eq!(solution.supplied(0, 1), 15.);
}

#[test]
fn can_drop_noise_supply_values() {
    let instance = create_two_warehouse_instance();
    let model = create_lp_model(&instance);
    let run = BackendRun { status: SolveStatus::Optimal, values: create_run_values(&model), objective: Some(55.) };

    let solution = extract_solution(&instance, &model, &run);

    assert_eq!(solution.supply.len(), 3);
    assert_eq!(solution.supplied(1, 0), 0.);
}

#[test]
fn can_reject_non_boolean_indicator() {
    let instance = create_two_warehouse_instance();
    let model = create_lp_model(&instance);
    let mut values = create_run_values(&model);
    values[model.variables().open[1].index()] = 0.4;
    let run = BackendRun { status: SolveStatus::Optimal, values, objective: Some(55.) };

    let solution = extract_solution(&instance, &model, &run);

    assert!(matches!(solution.status, SolveStatus::Error(ref message) if message.contains("not boolean")));
    assert!(!solution.has_assignment());
    assert_eq!(solution.objective, None);
}

#[test]
fn can_reject_wrong_value_count() {
    let instance = create_two_warehouse_instance();
    let model = create_lp_model(&instance);
    let run = BackendRun { status: SolveStatus::Optimal, values: vec![1.], objective: Some(55.) };

    let solution = extract_solution(&instance, &model, &run);

    assert!(matches!(solution.status, SolveStatus::Error(ref message) if message.contains("1 values for 8 variables")));
}

#[test]
fn can_pass_terminal_status_through() {
    let instance = create_two_warehouse_instance();
    let model = create_lp_model(&instance);

    for status in [SolveStatus::Infeasible, SolveStatus::Unbounded, SolveStatus::Error("engine failure".to_string())] {
        let solution = extract_solution(&instance, &model, &BackendRun::empty(status.clone()));

        assert_eq!(solution.status, status);
        assert_eq!(solution.objective, None);
        assert!(solution.open_warehouses.is_empty());
        assert!(solution.supply.is_empty());
    }
}
