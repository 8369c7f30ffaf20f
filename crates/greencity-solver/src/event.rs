//! Progress notifications for the knapsack optimizer.
//!
//! The optimizer never logs. Instead it reports to any number of
//! registered [`ProgressListener`]s, called synchronously in registration
//! order on the solving thread.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use greencity_solver::event::{ProgressListener, ProgressSupport};
//!
//! #[derive(Debug)]
//! struct Printer;
//!
//! impl ProgressListener for Printer {
//!     fn on_items_processed(&self, processed: usize, total: usize) {
//!         println!("{processed}/{total}");
//!     }
//! }
//!
//! let mut support = ProgressSupport::new();
//! support.add_listener(Arc::new(Printer));
//! assert!(support.has_listeners());
//! ```

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Listener for optimizer lifecycle and progress events.
///
/// Every hook has a no-op default so implementors only override what they
/// need.
pub trait ProgressListener: Send + Sync + Debug {
    /// Called once the inputs are validated, before the table fill.
    ///
    /// # Arguments
    ///
    /// * `item_count` - Number of candidate items
    /// * `capacity` - Budget rounded to whole currency units
    fn on_solve_started(&self, _item_count: usize, _capacity: u64) {}

    /// Called every `progress_interval` items during the table fill.
    fn on_items_processed(&self, _processed: usize, _total: usize) {}

    /// Called after reconstruction with the size and value of the optimum.
    fn on_solve_ended(&self, _selected_count: usize, _total_value: f64) {}
}

/// Broadcasts optimizer events to registered listeners.
#[derive(Clone, Default)]
pub struct ProgressSupport {
    listeners: Vec<Arc<dyn ProgressListener>>,
}

impl ProgressSupport {
    /// Creates an instance with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listener.
    pub fn add_listener(&mut self, listener: Arc<dyn ProgressListener>) {
        self.listeners.push(listener);
    }

    /// Removes all listeners.
    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    pub fn fire_solve_started(&self, item_count: usize, capacity: u64) {
        for listener in &self.listeners {
            listener.on_solve_started(item_count, capacity);
        }
    }

    pub fn fire_items_processed(&self, processed: usize, total: usize) {
        for listener in &self.listeners {
            listener.on_items_processed(processed, total);
        }
    }

    pub fn fire_solve_ended(&self, selected_count: usize, total_value: f64) {
        for listener in &self.listeners {
            listener.on_solve_ended(selected_count, total_value);
        }
    }

    /// Returns the number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Returns true if any listener is registered.
    pub fn has_listeners(&self) -> bool {
        !self.listeners.is_empty()
    }
}

impl Debug for ProgressSupport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressSupport")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// A counting listener that tracks event occurrences.
///
/// Useful for testing and statistics collection.
#[derive(Debug, Default)]
pub struct CountingProgressListener {
    started_count: AtomicUsize,
    progress_count: AtomicUsize,
    ended_count: AtomicUsize,
    last_processed: AtomicUsize,
    last_selected: AtomicUsize,
}

impl CountingProgressListener {
    /// Creates a new counting listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of solve started events.
    pub fn started_count(&self) -> usize {
        self.started_count.load(Ordering::SeqCst)
    }

    /// Returns the number of progress events.
    pub fn progress_count(&self) -> usize {
        self.progress_count.load(Ordering::SeqCst)
    }

    /// Returns the number of solve ended events.
    pub fn ended_count(&self) -> usize {
        self.ended_count.load(Ordering::SeqCst)
    }

    /// Returns the `processed` argument of the latest progress event.
    pub fn last_processed(&self) -> usize {
        self.last_processed.load(Ordering::SeqCst)
    }

    /// Returns the `selected_count` argument of the latest ended event.
    pub fn last_selected(&self) -> usize {
        self.last_selected.load(Ordering::SeqCst)
    }

    /// Resets all counters to zero.
    pub fn reset(&self) {
        self.started_count.store(0, Ordering::SeqCst);
        self.progress_count.store(0, Ordering::SeqCst);
        self.ended_count.store(0, Ordering::SeqCst);
        self.last_processed.store(0, Ordering::SeqCst);
        self.last_selected.store(0, Ordering::SeqCst);
    }
}

impl ProgressListener for CountingProgressListener {
    fn on_solve_started(&self, _item_count: usize, _capacity: u64) {
        self.started_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_items_processed(&self, processed: usize, _total: usize) {
        self.progress_count.fetch_add(1, Ordering::SeqCst);
        self.last_processed.store(processed, Ordering::SeqCst);
    }

    fn on_solve_ended(&self, selected_count: usize, _total_value: f64) {
        self.ended_count.fetch_add(1, Ordering::SeqCst);
        self.last_selected.store(selected_count, Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
