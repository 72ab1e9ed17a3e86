use crate::KnapsackError;
use crate::entities::{DPSolution, KPInstance, KPSolution};
use crate::generator::Generator;
use crate::solvers::{DPSolver, GreedySolver, KPSolver};
use crate::util::ComparisonConfig;
use log::info;
use rand::Rng;
use std::time::Instant;

/// Outcome of running both solvers on the same instance.
#[derive(Clone, Debug)]
pub struct ComparisonReport {
    pub instance: KPInstance,
    pub greedy: KPSolution,
    pub dp: DPSolution,
    /// Wall-clock time of the greedy solver in milliseconds, if measured
    pub greedy_time_ms: Option<f64>,
    /// Wall-clock time of the DP solver in milliseconds, if measured
    pub dp_time_ms: Option<f64>,
}

impl ComparisonReport {
    /// Profit the greedy solver left on the table compared to the optimum
    pub fn profit_gap(&self) -> u64 {
        self.dp.solution.total_profit - self.greedy.total_profit
    }
}

/// Generates an instance and solves it with both the [`GreedySolver`] and the [`DPSolver`].
/// Nothing is retained between runs: every call to [`Comparison::run`] draws a fresh instance.
#[derive(Clone, Copy, Debug, Default)]
pub struct Comparison {
    pub config: ComparisonConfig,
}

impl Comparison {
    pub fn new(config: ComparisonConfig) -> Self {
        Self { config }
    }

    /// Generates an instance with `n_items` items and the given capacity using `rng`, and compares both solvers on it.
    pub fn run(
        &self,
        capacity: u64,
        n_items: usize,
        rng: &mut impl Rng,
    ) -> Result<ComparisonReport, KnapsackError> {
        let instance =
            Generator::new(self.config.generator).generate_instance(capacity, n_items, rng)?;
        self.run_instance(instance)
    }

    /// Compares both solvers on a given instance.
    pub fn run_instance(&self, instance: KPInstance) -> Result<ComparisonReport, KnapsackError> {
        info!(
            "[CMP] comparing solvers on {} items with capacity {}",
            instance.n_items(),
            instance.capacity()
        );

        let (greedy, greedy_time_ms) = timed_solve(&GreedySolver, &instance, self.config.time_solvers)?;
        let (dp, dp_time_ms) = timed_solve(
            &DPSolver::new(self.config.max_table_cells),
            &instance,
            self.config.time_solvers,
        )?;

        debug_assert!(dp.solution.total_profit >= greedy.total_profit);

        let report = ComparisonReport {
            instance,
            greedy,
            dp,
            greedy_time_ms,
            dp_time_ms,
        };

        info!(
            "[CMP] greedy profit: {}, optimal profit: {} (gap: {})",
            report.greedy.total_profit,
            report.dp.solution.total_profit,
            report.profit_gap()
        );

        Ok(report)
    }
}

fn timed_solve<S: KPSolver>(
    solver: &S,
    instance: &KPInstance,
    measure: bool,
) -> Result<(S::Output, Option<f64>), KnapsackError> {
    let start = Instant::now();
    let output = solver.solve(instance)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    info!("[{}] solved in {:.3}ms", S::NAME, elapsed_ms);

    Ok((output, measure.then_some(elapsed_ms)))
}
