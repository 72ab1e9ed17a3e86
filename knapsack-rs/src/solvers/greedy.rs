use crate::KnapsackError;
use crate::entities::{KPInstance, KPSolution};
use crate::solvers::KPSolver;
use crate::util::assertions::{greedy_inclusions_fit, solution_is_consistent};
use log::debug;

/// Scans the items in position order and takes every item that still fits.
///
/// Skipped items are never reconsidered. With profits sorted in descending order this takes
/// the most profitable items first, but since the weights are not sorted along with them the
/// result is only a lower bound of the optimum.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySolver;

impl KPSolver for GreedySolver {
    type Output = KPSolution;
    const NAME: &'static str = "GREEDY";

    fn solve(&self, instance: &KPInstance) -> Result<KPSolution, KnapsackError> {
        let capacity = instance.capacity();
        let mut sol = KPSolution::default();

        for item in instance.items() {
            // total_weight never exceeds capacity, so the subtraction cannot underflow
            if item.weight <= capacity - sol.total_weight {
                sol.total_weight += item.weight;
                sol.total_profit += item.profit;
                sol.items.push(item.id);
                debug!(
                    "[{}] taking item {} (w: {}, p: {}), load {}/{}",
                    Self::NAME,
                    item.id,
                    item.weight,
                    item.profit,
                    sol.total_weight,
                    capacity
                );
            }
        }

        debug_assert!(solution_is_consistent(instance, &sol));
        debug_assert!(greedy_inclusions_fit(instance, &sol));

        Ok(sol)
    }
}
