//! Device fixtures.
//!
//! # Example
//!
//! ```
//! use greencity_test::catalog::{device, sample_catalog};
//!
//! let catalog = sample_catalog();
//! assert_eq!(catalog.len(), 3);
//! assert_eq!(device("X", 5.0, 7.0).objective_value(), 7.0);
//! ```

use greencity_core::Device;

/// A device whose objective value is exactly `value` (score 1).
pub fn device(name: &str, cost: f64, value: f64) -> Device {
    Device::new(name, "Test", cost, value, 1)
}

/// The three-device catalog used throughout the scenario tests.
///
/// | name | cost | value |
/// |------|------|-------|
/// | A    | 10   | 20    |
/// | B    | 20   | 35    |
/// | C    | 30   | 40    |
pub fn sample_catalog() -> Vec<Device> {
    vec![
        device("A", 10.0, 20.0),
        device("B", 20.0, 35.0),
        device("C", 30.0, 40.0),
    ]
}

/// A small catalog file in the shipped CSV layout, including rows the
/// loader must skip (short row, unparseable cost, negative cost, blank).
pub const SAMPLE_CSV: &str = "\
DeviceName,Category,CostTRY,EnergySaved_kWh,SustainabilityScore
LED Retrofit,Lighting,320.50,85.5,3
Heat Pump,HVAC,12499.99,3100,5
Broken Row,HVAC,100
Solar Panel,Generation,abc,1200,4

Refund,Misc,-40,10,1
Smart Thermostat , Control , 899 , 410.25 , 4 , extra
";

/// Number of valid devices in [`SAMPLE_CSV`].
pub const SAMPLE_CSV_DEVICES: usize = 3;
