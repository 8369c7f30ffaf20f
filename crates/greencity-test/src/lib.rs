//! Shared test fixtures for GreenCity crates.
//!
//! This crate provides data and pure functions for testing.
//!
//! - [`catalog`] - Device fixtures and catalog text
//! - [`oracle`] - Exhaustive-search reference optimizer
//! - [`strategy`] - `proptest` strategies for random catalogs
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! greencity-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use greencity_test::catalog::sample_catalog;
//! use greencity_test::oracle::brute_force_best;
//! ```

pub mod catalog;
pub mod oracle;
pub mod strategy;

// Re-export commonly used items at crate root for convenience
pub use catalog::{device, sample_catalog, SAMPLE_CSV, SAMPLE_CSV_DEVICES};
pub use oracle::brute_force_best;
pub use strategy::{arb_catalog, arb_device};
