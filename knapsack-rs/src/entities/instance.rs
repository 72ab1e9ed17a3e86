use crate::KnapsackError;
use crate::entities::Item;
use serde::Serialize;

/// Instance of the 0/1 knapsack problem: a capacity and an ordered sequence of items,
/// stored as two parallel arrays of weights and profits.
///
/// The position of an item is its identity: it joins the weight and profit arrays
/// and is what solvers report back. The arrays are never resized after construction.
///
/// Every item weighs at least 1, and the sums of all weights and of all profits fit in a `u64`,
/// so no subset of items can overflow its totals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KPInstance {
    capacity: u64,
    weights: Vec<u64>,
    profits: Vec<u64>,
}

impl KPInstance {
    pub fn new(capacity: u64, weights: Vec<u64>, profits: Vec<u64>) -> Result<Self, KnapsackError> {
        if weights.len() != profits.len() {
            return Err(KnapsackError::LengthMismatch {
                n_weights: weights.len(),
                n_profits: profits.len(),
            });
        }
        if let Some(id) = weights.iter().position(|&w| w == 0) {
            return Err(KnapsackError::ZeroWeight { id });
        }
        if checked_total(&weights).is_none() || checked_total(&profits).is_none() {
            return Err(KnapsackError::ValueOverflow);
        }
        Ok(Self {
            capacity,
            weights,
            profits,
        })
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    pub fn profits(&self) -> &[u64] {
        &self.profits
    }

    pub fn n_items(&self) -> usize {
        self.weights.len()
    }

    pub fn item(&self, id: usize) -> Item {
        Item {
            id,
            weight: self.weights[id],
            profit: self.profits[id],
        }
    }

    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        (0..self.n_items()).map(|id| self.item(id))
    }

    /// Sum of the weights of the given items
    pub fn weight_of(&self, items: &[usize]) -> u64 {
        items.iter().map(|&id| self.weights[id]).sum()
    }

    /// Sum of the profits of the given items
    pub fn profit_of(&self, items: &[usize]) -> u64 {
        items.iter().map(|&id| self.profits[id]).sum()
    }
}

fn checked_total(values: &[u64]) -> Option<u64> {
    values.iter().try_fold(0u64, |acc, &v| acc.checked_add(v))
}
