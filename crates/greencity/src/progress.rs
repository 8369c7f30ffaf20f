//! Bridges optimizer progress into the log.

use greencity_solver::ProgressListener;
use tracing::info;

/// Logs optimizer lifecycle events as structured `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingProgressListener;

impl ProgressListener for TracingProgressListener {
    fn on_solve_started(&self, item_count: usize, capacity: u64) {
        info!(event = "solve_start", item_count = item_count as u64, capacity);
    }

    fn on_items_processed(&self, processed: usize, total: usize) {
        info!(
            event = "progress",
            processed = processed as u64,
            total = total as u64,
        );
    }

    fn on_solve_ended(&self, selected_count: usize, total_value: f64) {
        info!(
            event = "solve_end",
            selected_count = selected_count as u64,
            total_value,
        );
    }
}
