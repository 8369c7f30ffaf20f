//! Exact 0/1 knapsack by dynamic programming over rounded costs.
//!
//! Costs and the budget are rounded to whole currency units. `best[i][w]` is
//! the best total objective value reachable with the first `i` items at a
//! rounded cost of at most `w`:
//!
//! ```text
//! best[0][w] = 0
//! best[i][w] = best[i-1][w]                                   if wt_i > w
//!            = max(best[i-1][w], best[i-1][w - wt_i] + val_i)  otherwise
//! ```
//!
//! Only one row of `best` is kept, updated from high `w` to low so that
//! `best[i-1][w - wt_i]` is read before it is overwritten. Whether item `i`
//! was taken at `(i, w)` is recorded in a packed bitset, and the flag is set
//! only when taking the item is a strict improvement. On ties the item is
//! left out, which makes the returned optimum prefer earlier items.
//!
//! Reconstruction walks the items backwards from the full capacity,
//! following the flags, then restores input order.

mod selection;
mod table;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use greencity_config::OptimizerConfig;
use greencity_core::item::round_currency;
use greencity_core::{GreenCityError, KnapsackItem, Result};

use crate::event::{ProgressListener, ProgressSupport};

pub use selection::Selection;
pub use table::required_table_bytes;

use table::InclusionTable;

/// Solves with the default [`OptimizerConfig`] and no listeners.
///
/// # Errors
///
/// See [`KnapsackSolver::solve`].
pub fn solve<T: KnapsackItem>(items: &[T], budget: f64) -> Result<Selection<'_, T>> {
    KnapsackSolver::default().solve(items, budget)
}

/// Budgeted 0/1 knapsack optimizer.
///
/// Holds only configuration and listeners, so one solver can serve any
/// number of calls, from any thread.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use greencity_config::OptimizerConfig;
/// use greencity_core::{Device, GreenCityError};
/// use greencity_solver::{CountingProgressListener, KnapsackSolver};
///
/// let listener = Arc::new(CountingProgressListener::new());
/// let solver = KnapsackSolver::new(OptimizerConfig::with_max_table_bytes(4096))
///     .with_listener(listener.clone());
///
/// let catalog = vec![Device::new("Boiler", "HVAC", 120.0, 300.0, 2)];
/// assert_eq!(solver.solve(&catalog, 150.0).unwrap().len(), 1);
/// assert_eq!(listener.ended_count(), 1);
///
/// let err = solver.solve(&catalog, 1_000_000.0).unwrap_err();
/// assert!(matches!(err, GreenCityError::CapacityLimit { .. }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct KnapsackSolver {
    config: OptimizerConfig,
    events: ProgressSupport,
}

impl KnapsackSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: OptimizerConfig) -> Self {
        Self {
            config,
            events: ProgressSupport::new(),
        }
    }

    /// Registers a progress listener.
    pub fn with_listener(mut self, listener: Arc<dyn ProgressListener>) -> Self {
        self.events.add_listener(listener);
        self
    }

    /// Registers a progress listener on an existing solver.
    pub fn add_listener(&mut self, listener: Arc<dyn ProgressListener>) {
        self.events.add_listener(listener);
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Returns the subsequence of `items` with the greatest total objective
    /// value whose total rounded cost fits in `round(budget)`.
    ///
    /// # Errors
    ///
    /// - [`GreenCityError::InvalidBudget`] if `budget` is negative or NaN.
    /// - [`GreenCityError::CapacityLimit`] if the tables for this budget
    ///   would exceed `max_table_bytes`. Nothing is allocated in that case.
    pub fn solve<'a, T: KnapsackItem>(
        &self,
        items: &'a [T],
        budget: f64,
    ) -> Result<Selection<'a, T>> {
        if budget.is_nan() || budget < 0.0 {
            return Err(GreenCityError::InvalidBudget(format!(
                "budget must be a non-negative amount, got {budget}"
            )));
        }

        let capacity = round_currency(budget);
        let n = items.len();

        if n == 0 || capacity == 0 {
            self.events.fire_solve_started(n, capacity);
            self.events.fire_solve_ended(0, 0.0);
            return Ok(Selection::empty(capacity));
        }

        let stride = self.checked_stride(n, capacity)?;
        self.events.fire_solve_started(n, capacity);

        let weights: Vec<u64> = items.iter().map(T::rounded_cost).collect();
        let mut best = vec![0.0_f64; stride];
        let mut taken = InclusionTable::new(n, stride);
        let cap = stride - 1;

        for (i, item) in items.iter().enumerate() {
            // Anything heavier than the whole budget keeps the previous row.
            if weights[i] <= capacity {
                let wt = weights[i] as usize;
                let val = item.objective_value();
                for w in (wt..=cap).rev() {
                    let candidate = best[w - wt] + val;
                    if candidate > best[w] {
                        best[w] = candidate;
                        taken.set(i, w);
                    }
                }
            }

            let processed = i + 1;
            let interval = self.config.progress_interval;
            if interval > 0 && processed % interval == 0 {
                self.events.fire_items_processed(processed, n);
            }
        }

        let mut chosen = Vec::new();
        let mut w = cap;
        for i in (0..n).rev() {
            if taken.get(i, w) {
                chosen.push(i);
                w -= weights[i] as usize;
            }
        }
        chosen.reverse();

        let selected = chosen.iter().map(|&i| &items[i]).collect();
        let selection = Selection::new(selected, chosen, capacity);
        self.events
            .fire_solve_ended(selection.len(), selection.total_value());
        Ok(selection)
    }

    /// Checks the table size against the ceiling and returns `capacity + 1`.
    fn checked_stride(&self, item_count: usize, capacity: u64) -> Result<usize> {
        let limit = self.config.max_table_bytes;
        let exceeded = |required: u64| GreenCityError::CapacityLimit { required, limit };

        let required = required_table_bytes(item_count, capacity).ok_or(exceeded(u64::MAX))?;
        if required > limit {
            return Err(exceeded(required));
        }

        // Fits the ceiling but maybe not this platform's address space.
        let stride = usize::try_from(capacity)
            .ok()
            .and_then(|c| c.checked_add(1))
            .ok_or(exceeded(required))?;
        item_count.checked_mul(stride).ok_or(exceeded(required))?;
        Ok(stride)
    }
}
