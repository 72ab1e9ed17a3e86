use serde::{Deserialize, Serialize};

/// Upper bound on the number of cells of a DP table unless configured otherwise (800MB of `u64`s)
pub const DEFAULT_MAX_TABLE_CELLS: usize = 100_000_000;

///Configuration of the instance generator
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
    ///Smallest value a weight or profit can take
    pub min_value: u64,
    ///Exclusive upper bound of the weights and profits
    pub max_value: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_value: 1,
            max_value: 100,
        }
    }
}

///Configuration of a [`Comparison`](crate::compare::Comparison) run.
///Fields missing from a serialized config take their default value.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ComparisonConfig {
    pub generator: GeneratorConfig,
    ///Maximum number of cells the DP table may allocate. No limit if undefined
    pub max_table_cells: Option<usize>,
    ///Measure the wall-clock time of each solver
    pub time_solvers: bool,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            max_table_cells: Some(DEFAULT_MAX_TABLE_CELLS),
            time_solvers: true,
        }
    }
}
