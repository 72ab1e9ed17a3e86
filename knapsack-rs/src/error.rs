use thiserror::Error;

/// Validation failures raised by the library. A solve either completes fully or fails with one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnapsackError {
    #[error("weights ({n_weights}) and profits ({n_profits}) must have the same length")]
    LengthMismatch { n_weights: usize, n_profits: usize },
    #[error("capacity must be non-negative, got {0}")]
    NegativeCapacity(i64),
    #[error("number of items must be non-negative, got {0}")]
    NegativeItemCount(i64),
    #[error("item {id} has a negative weight ({weight})")]
    NegativeWeight { id: usize, weight: i64 },
    #[error("item {id} has a weight of 0, every item must weigh at least 1")]
    ZeroWeight { id: usize },
    #[error("item {id} has a negative profit ({profit})")]
    NegativeProfit { id: usize, profit: i64 },
    #[error("sum of all weights or of all profits exceeds {}", u64::MAX)]
    ValueOverflow,
    #[error("value range must start at 1 or higher")]
    ZeroMinValue,
    #[error("value range [{min}, {max}) is empty")]
    EmptyValueRange { min: u64, max: u64 },
    #[error("DP table of {} cells exceeds the limit of {limit} cells", .cells.map_or("overflowing".to_string(), |c| c.to_string()))]
    TableTooLarge { cells: Option<usize>, limit: usize },
}
