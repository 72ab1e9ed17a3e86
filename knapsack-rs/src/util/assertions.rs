use crate::entities::{KPInstance, KPSolution};
use itertools::Itertools;
use log::error;

//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks

pub fn profits_non_increasing(profits: &[u64]) -> bool {
    profits.iter().tuple_windows().all(|(a, b)| a >= b)
}

pub fn items_strictly_ascending(items: &[usize]) -> bool {
    items.iter().tuple_windows().all(|(a, b)| a < b)
}

/// Checks that a solution only refers to existing items, respects the capacity
/// and that its totals match the items it contains.
pub fn solution_is_consistent(instance: &KPInstance, sol: &KPSolution) -> bool {
    if !items_strictly_ascending(&sol.items) {
        error!("solution items are not strictly ascending: {:?}", sol.items);
        return false;
    }
    if sol.items.iter().any(|&id| id >= instance.n_items()) {
        error!(
            "solution refers to items outside of the instance ({} items): {:?}",
            instance.n_items(),
            sol.items
        );
        return false;
    }
    if sol.total_weight > instance.capacity() {
        error!(
            "solution weight ({}) exceeds capacity ({})",
            sol.total_weight,
            instance.capacity()
        );
        return false;
    }
    let weight = instance.weight_of(&sol.items);
    let profit = instance.profit_of(&sol.items);
    if weight != sol.total_weight || profit != sol.total_profit {
        error!(
            "solution totals ({}, {}) do not match its items ({}, {})",
            sol.total_weight, sol.total_profit, weight, profit
        );
        return false;
    }
    true
}

/// Checks that every included item still fit when it was added, scanning in position order.
pub fn greedy_inclusions_fit(instance: &KPInstance, sol: &KPSolution) -> bool {
    let mut cum_weight = 0;
    sol.items.iter().all(|&id| {
        cum_weight += instance.weights()[id];
        cum_weight <= instance.capacity()
    })
}
