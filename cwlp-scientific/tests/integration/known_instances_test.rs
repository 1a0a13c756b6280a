use crate::config::read_formulation_config;
use crate::core::prelude::*;
use crate::dat::DatProblem;
use crate::helpers::*;
use crate::orlib::OrLibProblem;

fn create_silent_solver() -> Solver {
    let logger = create_silent_logger();
    Solver::new(Box::new(MilpBackend::new(logger.clone()))).with_logger(logger)
}

fn solve(instance: &ProblemInstance, config: &FormulationConfig) -> Solution {
    create_silent_solver().solve(instance, config).unwrap()
}

#[test]
fn can_solve_known_instance_with_both_formulations() {
    let instance = create_two_warehouse_instance();

    for kind in [FormulationKind::Lp, FormulationKind::Cp] {
        let solution = solve(&instance, &FormulationConfig::new(kind));

        assert_eq!(solution.status, SolveStatus::Optimal);
        assert_eq!(solution.open_warehouses, vec![0]);
        assert!((solution.objective.unwrap() - 55.).abs() < 1E-6);

        for customer in 0..instance.customer_count {
            assert!((solution.supplied(0, customer) - 15.).abs() < 1E-6);
        }
    }
}

#[test]
fn can_solve_instance_with_configured_toggles() {
    let instance = DatBuilder::default()
        .set_counts(3, 3)
        .set_fixed_costs(vec![5., 5., 50.])
        .set_capacities(vec![30., 30., 60.])
        .set_demands(vec![15., 15., 15.])
        .set_transport_costs(vec![vec![1., 1., 1.], vec![1., 1., 1.], vec![3., 3., 3.]])
        .set_prohibited_pairs(vec![(1, 2)])
        .build()
        .read_dat()
        .unwrap();

    let base = read_formulation_config(r#"{"formulation": "LP"}"#.as_bytes()).unwrap();
    let restricted = read_formulation_config(r#"{"formulation": "LP", "toggles": {"prohibited_pairs": true}}"#.as_bytes()).unwrap();

    assert!((solve(&instance, &base).objective.unwrap() - 55.).abs() < 1E-6);
    assert!((solve(&instance, &restricted).objective.unwrap() - 130.).abs() < 1E-6);
}

#[test]
fn can_read_equal_instances_from_dat_and_orlib() {
    let dat_instance = create_two_warehouse_instance();
    let orlib_instance = ["2 3", "50 10", "50 15", "15", "15 30", "15", "15 30", "15", "15 30"]
        .join("\n")
        .read_orlib()
        .unwrap();

    assert_eq!(orlib_instance, dat_instance);

    let solution = solve(&orlib_instance, &FormulationConfig::new(FormulationKind::Cp));
    assert!((solution.objective.unwrap() - 55.).abs() < 1E-6);
}

#[test]
fn can_detect_infeasible_known_instance() {
    let instance = create_two_warehouse_dat().set_demands(vec![60., 60., 60.]).build().read_dat().unwrap();

    for kind in [FormulationKind::Lp, FormulationKind::Cp] {
        let solution = solve(&instance, &FormulationConfig::new(kind));

        assert_eq!(solution.status, SolveStatus::Infeasible);
        assert_eq!(solution.objective, None);
    }
}
