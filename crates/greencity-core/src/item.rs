//! The item abstraction consumed by the knapsack optimizer.

/// A candidate that can be selected under a budget.
///
/// The optimizer only ever reads these two quantities; everything else about
/// an item (names, categories, raw measurements) is opaque to it.
///
/// # Example
///
/// ```
/// use greencity_core::KnapsackItem;
///
/// struct Crate {
///     price: f64,
///     worth: f64,
/// }
///
/// impl KnapsackItem for Crate {
///     fn cost(&self) -> f64 {
///         self.price
///     }
///
///     fn objective_value(&self) -> f64 {
///         self.worth
///     }
/// }
///
/// let c = Crate { price: 12.4, worth: 3.0 };
/// assert_eq!(c.rounded_cost(), 12);
/// ```
pub trait KnapsackItem {
    /// Monetary cost of the item. Assumed non-negative.
    fn cost(&self) -> f64;

    /// The quantity the optimizer maximizes. Assumed non-negative.
    fn objective_value(&self) -> f64;

    /// Cost rounded to the nearest whole currency unit.
    fn rounded_cost(&self) -> u64 {
        round_currency(self.cost())
    }
}

impl<T: KnapsackItem + ?Sized> KnapsackItem for &T {
    fn cost(&self) -> f64 {
        (**self).cost()
    }

    fn objective_value(&self) -> f64 {
        (**self).objective_value()
    }
}

/// Rounds a non-negative amount to the nearest whole unit, halves up.
///
/// Negative and NaN amounts map to 0; amounts beyond `u64::MAX` saturate.
pub fn round_currency(amount: f64) -> u64 {
    // `as` saturates for out-of-range floats and maps NaN to 0.
    amount.round() as u64
}
