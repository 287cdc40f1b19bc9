// File: crates/strata-core/tests/extent.rs
// Purpose: Validate extent folding and the empty-group short-circuit.

use approx::assert_relative_eq;
use strata_core::ProfileExtent;

#[test]
fn empty_group_has_no_extent() {
    assert_eq!(ProfileExtent::from_samples(&[]), None);
}

#[test]
fn single_sample_collapses_to_degenerate_extent() {
    let extent = ProfileExtent::from_samples(&[(5.0, 2.0)]).expect("one sample is enough");
    assert_relative_eq!(extent.station_min, 5.0);
    assert_relative_eq!(extent.station_max, 5.0);
    assert_relative_eq!(extent.value_min, 2.0);
    assert_relative_eq!(extent.value_max, 2.0);
    assert!(extent.is_degenerate());
    assert_relative_eq!(extent.station_span(), 0.0);
}

#[test]
fn bounds_fold_over_all_samples() {
    let extent = ProfileExtent::from_samples(&[(3.0, -1.0), (0.5, 4.0), (7.25, 2.0)])
        .expect("non-empty group");
    assert_relative_eq!(extent.station_min, 0.5);
    assert_relative_eq!(extent.station_max, 7.25);
    assert_relative_eq!(extent.value_min, -1.0);
    assert_relative_eq!(extent.value_max, 4.0);
    assert_relative_eq!(extent.station_span(), 6.75);
    assert_relative_eq!(extent.value_span(), 5.0);
    assert!(!extent.is_degenerate());
}
