//! The device catalog record.

use std::fmt;

use crate::item::KnapsackItem;

/// An energy-related device that can be bought for the city.
///
/// Devices are immutable once built. The optimizer maximizes
/// [`Device::objective_value`], the energy saved weighted by the
/// sustainability score.
///
/// # Example
///
/// ```
/// use greencity_core::Device;
///
/// let panel = Device::new("Solar Panel", "Generation", 4500.0, 1200.0, 4);
/// assert_eq!(panel.objective_value(), 4800.0);
/// assert_eq!(
///     panel.to_string(),
///     "Solar Panel (₺4500.00, 1200.0 kWh/yr, score 4)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Device {
    name: String,
    category: String,
    cost: f64,
    energy_saved_kwh: f64,
    sustainability_score: u32,
}

impl Device {
    /// Creates a new device.
    ///
    /// `cost` and `energy_saved_kwh` are expected to be non-negative; the
    /// catalog loader filters rows that are not.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        cost: f64,
        energy_saved_kwh: f64,
        sustainability_score: u32,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            cost,
            energy_saved_kwh,
            sustainability_score,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Price in the catalog currency.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Yearly energy saved, in kWh.
    pub fn energy_saved_kwh(&self) -> f64 {
        self.energy_saved_kwh
    }

    pub fn sustainability_score(&self) -> u32 {
        self.sustainability_score
    }

    /// Energy saved multiplied by the sustainability score.
    pub fn objective_value(&self) -> f64 {
        self.energy_saved_kwh * f64::from(self.sustainability_score)
    }
}

impl KnapsackItem for Device {
    fn cost(&self) -> f64 {
        self.cost
    }

    fn objective_value(&self) -> f64 {
        Device::objective_value(self)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (₺{:.2}, {:.1} kWh/yr, score {})",
            self.name, self.cost, self.energy_saved_kwh, self.sustainability_score
        )
    }
}
