use crate::KnapsackError;
use crate::entities::KPInstance;

mod dp;
mod greedy;

#[doc(inline)]
pub use dp::DPSolver;
#[doc(inline)]
pub use dp::DPTable;
#[doc(inline)]
pub use greedy::GreedySolver;

/// A solver for the 0/1 knapsack problem.
/// Solvers are pure: solving the same instance twice yields the same output.
pub trait KPSolver {
    type Output;

    /// Short tag used in log messages
    const NAME: &'static str;

    fn solve(&self, instance: &KPInstance) -> Result<Self::Output, KnapsackError>;
}
