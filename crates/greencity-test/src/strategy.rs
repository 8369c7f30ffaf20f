//! `proptest` strategies for random catalogs.
//!
//! Objective values are whole numbers so that sums are exact regardless of
//! the order they are added in, which keeps optimizer-vs-oracle
//! comparisons free of floating-point noise.

use greencity_core::Device;
use proptest::prelude::*;

/// A device with cost in `[0, 60)` (two decimals), energy in `0..=100`
/// and score in `0..=5`.
pub fn arb_device() -> impl Strategy<Value = Device> {
    (0u32..6000, 0u32..=100, 0u32..=5).prop_map(|(cents, energy, score)| {
        Device::new(
            format!("D{cents}-{energy}-{score}"),
            "Random",
            f64::from(cents) / 100.0,
            f64::from(energy),
            score,
        )
    })
}

/// A catalog of up to `max_len` random devices.
pub fn arb_catalog(max_len: usize) -> impl Strategy<Value = Vec<Device>> {
    prop::collection::vec(arb_device(), 0..=max_len)
}
