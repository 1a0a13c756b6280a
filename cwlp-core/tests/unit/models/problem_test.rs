use super::*;
use crate::helpers::*;

#[test]
fn can_compute_demand_and_capacity_totals() {
    let instance = create_two_warehouse_instance();

    assert_eq!(instance.total_demand(), 45.);
    assert_eq!(instance.total_capacity(), 100.);
}

#[test]
fn can_validate_consistent_instance() {
    assert_eq!(create_two_warehouse_instance().validate(), Ok(()));
}

#[test]
fn can_detect_wrong_cost_vector_size() {
    let mut instance = create_two_warehouse_instance();
    instance.fixed_costs.push(1.);

    assert!(matches!(instance.validate(), Err(ModelError::DimensionMismatch(_))));
}

#[test]
fn can_detect_wrong_transport_row_size() {
    let mut instance = create_two_warehouse_instance();
    instance.transport_costs[1].pop();

    assert!(matches!(instance.validate(), Err(ModelError::DimensionMismatch(_))));
}

#[test]
fn can_detect_zero_counts() {
    let instance = InstanceBuilder::default().set_demands(vec![10.]).build();

    assert!(matches!(instance.validate(), Err(ModelError::DimensionMismatch(_))));
}

#[test]
fn can_detect_negative_values() {
    let mut instance = create_two_warehouse_instance();
    instance.demands[2] = -1.;

    assert!(matches!(instance.validate(), Err(ModelError::InvalidConfiguration(_))));
}

#[test]
fn can_detect_out_of_range_pair_reference() {
    let mut instance = create_two_warehouse_instance();
    instance.prohibited_pairs.push((0, 9));

    assert!(matches!(instance.validate(), Err(ModelError::InvalidConfiguration(_))));
}

#[test]
fn can_detect_out_of_range_group_member() {
    let mut instance = create_two_warehouse_instance();
    instance.open_together_groups.push(vec![1, 2]);

    assert!(matches!(instance.validate(), Err(ModelError::InvalidConfiguration(_))));
}

#[test]
fn can_detect_invalid_usage_fraction() {
    let mut instance = create_two_warehouse_instance();
    instance.minimum_usage_fraction = Some(1.5);

    assert!(matches!(instance.validate(), Err(ModelError::InvalidConfiguration(_))));
}
