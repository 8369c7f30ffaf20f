//! Exhaustive-search reference optimizer.

use greencity_core::item::round_currency;
use greencity_core::KnapsackItem;

/// Largest catalog the oracle accepts.
pub const MAX_ORACLE_ITEMS: usize = 20;

/// Best total objective value over all subsets whose rounded cost fits
/// `round(budget)`. A budget that rounds to zero selects nothing, even when
/// some items round to a zero cost.
///
/// Enumerates all `2^n` subsets, so only use it on small inputs.
///
/// # Panics
///
/// Panics if `items.len()` exceeds [`MAX_ORACLE_ITEMS`].
///
/// # Example
///
/// ```
/// use greencity_test::{brute_force_best, sample_catalog};
///
/// assert_eq!(brute_force_best(&sample_catalog(), 50.0), 75.0);
/// ```
pub fn brute_force_best<T: KnapsackItem>(items: &[T], budget: f64) -> f64 {
    assert!(
        items.len() <= MAX_ORACLE_ITEMS,
        "oracle limited to {MAX_ORACLE_ITEMS} items, got {}",
        items.len()
    );
    let capacity = round_currency(budget);
    let mut best = 0.0_f64;
    if capacity == 0 {
        return best;
    }

    for mask in 0u32..(1u32 << items.len()) {
        let mut cost = 0u64;
        let mut value = 0.0;
        for (i, item) in items.iter().enumerate() {
            if mask & (1 << i) != 0 {
                cost += item.rounded_cost();
                value += item.objective_value();
            }
        }
        if cost <= capacity && value > best {
            best = value;
        }
    }
    best
}
