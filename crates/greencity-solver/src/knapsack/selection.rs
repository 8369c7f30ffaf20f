//! The optimizer's result.

use greencity_core::KnapsackItem;

/// An optimal subset of the input, in original relative order.
///
/// Borrows the selected items from the slice handed to the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a, T> {
    items: Vec<&'a T>,
    indices: Vec<usize>,
    capacity: u64,
}

impl<'a, T> Selection<'a, T> {
    pub(crate) fn new(items: Vec<&'a T>, indices: Vec<usize>, capacity: u64) -> Self {
        debug_assert_eq!(items.len(), indices.len());
        Self {
            items,
            indices,
            capacity,
        }
    }

    /// An empty selection at the given capacity.
    pub(crate) fn empty(capacity: u64) -> Self {
        Self::new(Vec::new(), Vec::new(), capacity)
    }

    /// The selected items in input order.
    pub fn items(&self) -> &[&'a T] {
        &self.items
    }

    /// Positions of the selected items in the input slice, strictly increasing.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The budget the selection was computed for, in whole currency units.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.items.iter().copied()
    }

    /// Consumes the selection, returning the borrowed items.
    pub fn into_items(self) -> Vec<&'a T> {
        self.items
    }

    /// Clones the selected items out of the input.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().map(|&item| item.clone()).collect()
    }
}

impl<'a, T: KnapsackItem> Selection<'a, T> {
    /// Sum of the unrounded costs.
    pub fn total_cost(&self) -> f64 {
        self.items.iter().fold(0.0, |acc, item| acc + item.cost())
    }

    /// Sum of the rounded costs; never exceeds [`capacity`](Self::capacity).
    pub fn total_rounded_cost(&self) -> u64 {
        self.items.iter().map(|item| item.rounded_cost()).sum()
    }

    /// Sum of the objective values.
    pub fn total_value(&self) -> f64 {
        self.items
            .iter()
            .fold(0.0, |acc, item| acc + item.objective_value())
    }
}

impl<'s, 'a, T> IntoIterator for &'s Selection<'a, T> {
    type Item = &'a T;
    type IntoIter = std::iter::Copied<std::slice::Iter<'s, &'a T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter().copied()
    }
}
