//! GreenCity Core - Core types and traits for budgeted device selection
//!
//! This crate provides the fundamental abstractions shared by the workspace:
//! - The [`Device`] catalog record
//! - The [`KnapsackItem`] trait consumed by the optimizer
//! - Error types for optimizer failures

pub mod device;
pub mod error;
pub mod item;

pub use device::Device;
pub use error::{GreenCityError, Result};
pub use item::KnapsackItem;
