use crate::KnapsackError;
use crate::entities::KPInstance;
use crate::util::GeneratorConfig;
use crate::util::assertions::profits_non_increasing;
use log::debug;
use rand::Rng;

/// Generates random knapsack instances.
///
/// Every weight and profit is drawn independently and uniformly from `[min_value, max_value)`,
/// with `min_value >= 1` since items cannot be weightless.
/// Afterwards the profits, and only the profits, are sorted in descending order.
/// The weight at position `i` therefore has no relation to the profit at position `i`
/// other than sharing the position. Solvers rely on this ordering: the greedy solver
/// scans positions in order and so considers the highest profits first.
#[derive(Clone, Copy, Debug, Default)]
pub struct Generator {
    pub config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Draws `count` weights and `count` profits, returned as `(weights, profits)`.
    pub fn generate(
        &self,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<(Vec<u64>, Vec<u64>), KnapsackError> {
        let GeneratorConfig {
            min_value,
            max_value,
        } = self.config;

        if count == 0 {
            return Ok((vec![], vec![]));
        }
        if min_value == 0 {
            return Err(KnapsackError::ZeroMinValue);
        }
        if min_value >= max_value {
            return Err(KnapsackError::EmptyValueRange {
                min: min_value,
                max: max_value,
            });
        }

        let mut weights = Vec::with_capacity(count);
        let mut profits = Vec::with_capacity(count);
        for _ in 0..count {
            weights.push(rng.random_range(min_value..max_value));
            profits.push(rng.random_range(min_value..max_value));
        }

        profits.sort_unstable_by(|a, b| b.cmp(a));

        debug_assert!(profits_non_increasing(&profits));
        debug!("[GEN] generated {count} items in [{min_value}, {max_value})");

        Ok((weights, profits))
    }

    /// Generates a complete instance with `count` items and the given capacity.
    pub fn generate_instance(
        &self,
        capacity: u64,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<KPInstance, KnapsackError> {
        let (weights, profits) = self.generate(count, rng)?;
        KPInstance::new(capacity, weights, profits)
    }
}
