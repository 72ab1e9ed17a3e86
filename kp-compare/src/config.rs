use knapsack_rs::util::ComparisonConfig;
use serde::{Deserialize, Serialize};

/// Configuration for the comparison runner
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct KPCConfig {
    /// Seed for the PRNG. If undefined, every run draws its instance from OS entropy
    #[serde(default)]
    pub prng_seed: Option<u64>,
    /// Configuration of the generator and solvers
    #[serde(default)]
    pub comparison: ComparisonConfig,
}
