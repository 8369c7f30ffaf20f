//! GreenCity Solver Engine
//!
//! This crate provides the budgeted selection optimizer:
//! - [`KnapsackSolver`], an exact 0/1 knapsack over integer-rounded costs
//! - [`Selection`], the ordered optimal subset it returns
//! - Progress listeners for monitoring long table fills
//!
//! The optimizer performs no I/O and takes no logging dependency. Callers
//! that want progress output register a [`ProgressListener`].
//!
//! # Example
//!
//! ```
//! use greencity_core::Device;
//! use greencity_solver::solve;
//!
//! let catalog = vec![
//!     Device::new("A", "Lighting", 10.0, 20.0, 1),
//!     Device::new("B", "HVAC", 20.0, 35.0, 1),
//!     Device::new("C", "Solar", 30.0, 40.0, 1),
//! ];
//!
//! let selection = solve(&catalog, 50.0).unwrap();
//! let names: Vec<&str> = selection.iter().map(|d| d.name()).collect();
//! assert_eq!(names, ["B", "C"]);
//! assert_eq!(selection.total_value(), 75.0);
//! ```

pub mod event;
pub mod knapsack;

pub use event::{CountingProgressListener, ProgressListener, ProgressSupport};
pub use knapsack::{required_table_bytes, solve, KnapsackSolver, Selection};
