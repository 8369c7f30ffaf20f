//! Tests for the knapsack optimizer.

use std::sync::Arc;

use greencity_core::{Device, GreenCityError};
use greencity_test::{arb_catalog, brute_force_best, device, sample_catalog};
use proptest::prelude::*;

use super::*;
use crate::event::CountingProgressListener;

fn names<'a>(selection: &Selection<'a, Device>) -> Vec<&'a str> {
    selection.iter().map(Device::name).collect()
}

#[test]
fn test_scenario_budget_fifty_picks_b_and_c() {
    let catalog = sample_catalog();
    let selection = solve(&catalog, 50.0).unwrap();

    assert_eq!(names(&selection), ["B", "C"]);
    assert_eq!(selection.indices(), [1, 2]);
    assert_eq!(selection.total_cost(), 50.0);
    assert_eq!(selection.total_value(), 75.0);
    assert_eq!(selection.capacity(), 50);
}

#[test]
fn test_scenario_budget_five_is_empty() {
    let catalog = sample_catalog();
    let selection = solve(&catalog, 5.0).unwrap();

    assert!(selection.is_empty());
    assert_eq!(selection.total_value(), 0.0);
    // Empty totals are +0.0 so they never print as "-0.00".
    assert!(selection.total_cost().is_sign_positive());
    assert!(selection.total_value().is_sign_positive());
}

#[test]
fn test_scenario_budget_sixty_takes_everything() {
    let catalog = sample_catalog();
    let selection = solve(&catalog, 60.0).unwrap();

    assert_eq!(names(&selection), ["A", "B", "C"]);
    assert_eq!(selection.total_value(), 95.0);
}

#[test]
fn test_zero_budget_is_empty() {
    let catalog = vec![device("Free", 0.0, 10.0), device("A", 10.0, 20.0)];
    let selection = solve(&catalog, 0.0).unwrap();
    assert!(selection.is_empty());
    assert_eq!(selection.capacity(), 0);

    // Rounds down to zero as well.
    assert!(solve(&catalog, 0.49).unwrap().is_empty());
}

#[test]
fn test_zero_capacity_agrees_with_exhaustive_search() {
    let catalog = vec![device("Free", 0.2, 3.0)];
    let selection = solve(&catalog, 0.3).unwrap();
    assert!(selection.is_empty());
    assert_eq!(selection.total_value(), brute_force_best(&catalog, 0.3));
}

#[test]
fn test_empty_catalog_is_empty_for_any_budget() {
    let catalog: Vec<Device> = Vec::new();
    assert!(solve(&catalog, 0.0).unwrap().is_empty());
    assert!(solve(&catalog, 1_000.0).unwrap().is_empty());
    assert!(solve(&catalog, f64::INFINITY).unwrap().is_empty());
}

#[test]
fn test_negative_budget_is_rejected() {
    let catalog = sample_catalog();
    let err = solve(&catalog, -1.0).unwrap_err();
    assert!(matches!(err, GreenCityError::InvalidBudget(_)));

    let err = solve(&catalog, -0.2).unwrap_err();
    assert!(matches!(err, GreenCityError::InvalidBudget(_)));
}

#[test]
fn test_nan_budget_is_rejected() {
    let err = solve(&sample_catalog(), f64::NAN).unwrap_err();
    assert!(matches!(err, GreenCityError::InvalidBudget(_)));
}

#[test]
fn test_capacity_limit_is_enforced() {
    let catalog = sample_catalog();
    let solver = KnapsackSolver::new(OptimizerConfig::with_max_table_bytes(1024));

    // 51 doubles, 3 words and 3 weights fit.
    assert_eq!(solver.solve(&catalog, 50.0).unwrap().len(), 2);

    let err = solver.solve(&catalog, 500.0).unwrap_err();
    let expected = required_table_bytes(3, 500).unwrap();
    assert_eq!(
        err,
        GreenCityError::CapacityLimit {
            required: expected,
            limit: 1024,
        }
    );
}

#[test]
fn test_infinite_budget_hits_capacity_limit() {
    let err = solve(&sample_catalog(), f64::INFINITY).unwrap_err();
    assert!(matches!(
        err,
        GreenCityError::CapacityLimit {
            required: u64::MAX,
            ..
        }
    ));
}

#[test]
fn test_default_ceiling_rejects_huge_budget() {
    let err = solve(&sample_catalog(), 1e12).unwrap_err();
    assert!(matches!(err, GreenCityError::CapacityLimit { .. }));
}

#[test]
fn test_unaffordable_item_is_never_included() {
    let catalog = vec![
        device("Cheap", 5.0, 1.0),
        device("Jackpot", 101.0, 1_000_000.0),
    ];
    let selection = solve(&catalog, 100.0).unwrap();
    assert_eq!(names(&selection), ["Cheap"]);
}

#[test]
fn test_all_zero_values_select_nothing() {
    let catalog = vec![
        device("A", 0.0, 0.0),
        device("B", 5.0, 0.0),
        Device::new("C", "Test", 1.0, 50.0, 0),
    ];
    assert!(solve(&catalog, 10.0).unwrap().is_empty());
}

#[test]
fn test_free_item_with_value_is_included() {
    let catalog = vec![device("Gift", 0.2, 3.0), device("A", 10.0, 20.0)];
    let selection = solve(&catalog, 10.0).unwrap();
    assert_eq!(names(&selection), ["Gift", "A"]);
}

#[test]
fn test_identical_items_resolve_to_the_first() {
    let catalog = vec![device("Twin 1", 10.0, 20.0), device("Twin 2", 10.0, 20.0)];

    for _ in 0..5 {
        let selection = solve(&catalog, 10.0).unwrap();
        assert_eq!(selection.indices(), [0]);
    }
}

#[test]
fn test_ties_keep_the_earlier_optimum() {
    // {Big} and {Half 1, Half 2} are both worth 30 at cost 20.
    let catalog = vec![
        device("Big", 20.0, 30.0),
        device("Half 1", 10.0, 15.0),
        device("Half 2", 10.0, 15.0),
    ];
    let selection = solve(&catalog, 20.0).unwrap();
    assert_eq!(names(&selection), ["Big"]);

    // Same items, other order: now the pair comes first.
    let reordered = vec![catalog[1].clone(), catalog[2].clone(), catalog[0].clone()];
    let selection = solve(&reordered, 20.0).unwrap();
    assert_eq!(names(&selection), ["Half 1", "Half 2"]);
}

#[test]
fn test_costs_and_budget_are_rounded() {
    let catalog = vec![device("X", 10.4, 1.0), device("Y", 10.6, 1.0)];

    // round(20.5) = 21 >= 10 + 11
    let selection = solve(&catalog, 20.5).unwrap();
    assert_eq!(selection.len(), 2);
    assert_eq!(selection.total_rounded_cost(), 21);
    assert!((selection.total_cost() - 21.0).abs() < 1e-9);

    // round(20.4) = 20 < 21
    assert_eq!(solve(&catalog, 20.4).unwrap().len(), 1);

    // round(9.5) = 10 >= round(10.4)
    assert_eq!(solve(&catalog, 9.5).unwrap().indices(), [0]);
}

#[test]
fn test_repeated_calls_are_identical() {
    let catalog: Vec<Device> = (0..40)
        .map(|i| device(&format!("D{i}"), f64::from(i % 7 + 1), f64::from((i * 13) % 17)))
        .collect();

    let first = solve(&catalog, 37.0).unwrap();
    for _ in 0..3 {
        assert_eq!(solve(&catalog, 37.0).unwrap(), first);
    }
}

#[test]
fn test_selection_accessors() {
    let catalog = sample_catalog();
    let selection = solve(&catalog, 30.0).unwrap();

    assert_eq!(selection.len(), 2);
    assert_eq!(selection.items().len(), 2);
    assert_eq!((&selection).into_iter().count(), 2);
    assert_eq!(selection.to_vec(), vec![catalog[0].clone(), catalog[1].clone()]);
    assert_eq!(selection.clone().into_items(), vec![&catalog[0], &catalog[1]]);
}

#[test]
fn test_solves_over_borrowed_items() {
    let catalog = sample_catalog();
    let refs: Vec<&Device> = catalog.iter().collect();
    let selection = solve(&refs, 50.0).unwrap();
    assert_eq!(selection.indices(), [1, 2]);
}

#[test]
fn test_progress_events() {
    let listener = Arc::new(CountingProgressListener::new());
    let config = OptimizerConfig {
        progress_interval: 50,
        ..OptimizerConfig::default()
    };
    let solver = KnapsackSolver::new(config).with_listener(listener.clone());

    let catalog: Vec<Device> = (0..120).map(|i| device(&format!("D{i}"), 1.0, 1.0)).collect();
    let selection = solver.solve(&catalog, 30.0).unwrap();

    assert_eq!(listener.started_count(), 1);
    assert_eq!(listener.progress_count(), 2);
    assert_eq!(listener.last_processed(), 100);
    assert_eq!(listener.ended_count(), 1);
    assert_eq!(listener.last_selected(), selection.len());
    assert_eq!(selection.len(), 30);
}

#[test]
fn test_progress_interval_zero_disables_progress() {
    let listener = Arc::new(CountingProgressListener::new());
    let mut solver = KnapsackSolver::new(OptimizerConfig {
        progress_interval: 0,
        ..OptimizerConfig::default()
    });
    solver.add_listener(listener.clone());

    solver.solve(&sample_catalog(), 60.0).unwrap();
    assert_eq!(listener.progress_count(), 0);
    assert_eq!(listener.ended_count(), 1);
}

#[test]
fn test_listeners_fire_on_trivial_inputs_but_not_on_errors() {
    let listener = Arc::new(CountingProgressListener::new());
    let solver = KnapsackSolver::default().with_listener(listener.clone());

    solver.solve(&sample_catalog(), 0.0).unwrap();
    assert_eq!(listener.started_count(), 1);
    assert_eq!(listener.ended_count(), 1);

    let _ = solver.solve(&sample_catalog(), -5.0);
    let _ = solver.solve(&sample_catalog(), f64::INFINITY);
    assert_eq!(listener.started_count(), 1);
    assert_eq!(listener.ended_count(), 1);
}

proptest! {
    /// The DP optimum matches exhaustive search on small catalogs.
    #[test]
    fn prop_matches_brute_force(catalog in arb_catalog(12), budget in 0.0f64..200.0) {
        let selection = solve(&catalog, budget).unwrap();
        prop_assert_eq!(selection.total_value(), brute_force_best(&catalog, budget));
    }

    /// The selection always fits the rounded budget.
    #[test]
    fn prop_selection_is_feasible(catalog in arb_catalog(15), budget in 0.0f64..120.0) {
        let selection = solve(&catalog, budget).unwrap();
        prop_assert!(selection.total_rounded_cost() <= budget.round() as u64);
        prop_assert_eq!(selection.capacity(), budget.round() as u64);
    }

    /// The selection is a subsequence of the input in original order.
    #[test]
    fn prop_selection_preserves_order(catalog in arb_catalog(15), budget in 0.0f64..120.0) {
        let selection = solve(&catalog, budget).unwrap();
        prop_assert!(selection.indices().windows(2).all(|w| w[0] < w[1]));
        for (&index, &item) in selection.indices().iter().zip(selection.items()) {
            prop_assert!(std::ptr::eq(&catalog[index], item));
        }
    }

    /// Ties never pull in a zero-value item.
    #[test]
    fn prop_no_zero_value_items(catalog in arb_catalog(15), budget in 0.0f64..120.0) {
        let selection = solve(&catalog, budget).unwrap();
        prop_assert!(selection.iter().all(|d| d.objective_value() > 0.0));
    }
}
