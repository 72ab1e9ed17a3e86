use crate::KnapsackError;
use crate::entities::{DPSolution, KPInstance, KPSolution};
use crate::solvers::KPSolver;
use crate::util::DEFAULT_MAX_TABLE_CELLS;
use crate::util::assertions::solution_is_consistent;
use log::debug;
use ndarray::Array2;
use thousands::Separable;

/// Exact solver based on the classic dynamic-programming table.
#[derive(Clone, Copy, Debug)]
pub struct DPSolver {
    /// Solving fails instead of allocating a table with more cells than this. No limit if `None`.
    pub max_table_cells: Option<usize>,
}

impl DPSolver {
    pub fn new(max_table_cells: Option<usize>) -> Self {
        Self { max_table_cells }
    }
}

impl Default for DPSolver {
    fn default() -> Self {
        Self::new(Some(DEFAULT_MAX_TABLE_CELLS))
    }
}

impl KPSolver for DPSolver {
    type Output = DPSolution;
    const NAME: &'static str = "DP";

    fn solve(&self, instance: &KPInstance) -> Result<DPSolution, KnapsackError> {
        let table = DPTable::fill(instance, self.max_table_cells)?;

        let items = table.reconstruct();
        let solution = KPSolution {
            total_weight: instance.weight_of(&items),
            total_profit: table.optimum(),
            items,
        };

        debug_assert!(solution_is_consistent(instance, &solution));

        Ok(DPSolution {
            solution,
            last_row_delta: table.last_row_delta(),
        })
    }
}

/// Table where cell `(i, j)` holds the best profit achievable with the first `i` items and a capacity of `j`.
/// Stored as a single flat arena of `(n + 1) x (capacity + 1)` cells.
#[derive(Clone, Debug)]
pub struct DPTable {
    cells: Array2<u64>,
    /// Weights of the items the table was filled with, needed to walk it back
    weights: Vec<u64>,
}

impl DPTable {
    /// Allocates and fills the table for `instance`.
    /// Fails if the table would hold more than `max_cells` cells.
    pub fn fill(instance: &KPInstance, max_cells: Option<usize>) -> Result<Self, KnapsackError> {
        let n = instance.n_items();
        let dims = usize::try_from(instance.capacity())
            .ok()
            .and_then(|c| c.checked_add(1))
            .and_then(|w| w.checked_mul(n + 1).map(|n_cells| (w, n_cells)));

        let (width, n_cells) = match (dims, max_cells) {
            (None, limit) => {
                return Err(KnapsackError::TableTooLarge {
                    cells: None,
                    limit: limit.unwrap_or(usize::MAX),
                });
            }
            (Some((_, n_cells)), Some(limit)) if n_cells > limit => {
                return Err(KnapsackError::TableTooLarge {
                    cells: Some(n_cells),
                    limit,
                });
            }
            (Some(dims), _) => dims,
        };

        debug!(
            "[DP] filling table of {} x {} ({} cells)",
            n + 1,
            width,
            n_cells.separate_with_commas()
        );

        // row 0 and column 0 stay zero
        let mut cells = Array2::<u64>::zeros((n + 1, width));
        let (weights, profits) = (instance.weights(), instance.profits());

        for i in 1..=n {
            let (w, p) = (weights[i - 1], profits[i - 1]);
            for j in 1..width {
                let without = cells[[i - 1, j]];
                cells[[i, j]] = match w <= j as u64 {
                    true => without.max(p + cells[[i - 1, j - w as usize]]),
                    false => without,
                };
            }
        }

        Ok(Self {
            cells,
            weights: weights.to_vec(),
        })
    }

    pub fn n_items(&self) -> usize {
        self.cells.nrows() - 1
    }

    pub fn capacity(&self) -> usize {
        self.cells.ncols() - 1
    }

    /// Best achievable profit using the first `i` items with capacity `j`
    pub fn get(&self, i: usize, j: usize) -> u64 {
        self.cells[[i, j]]
    }

    /// Optimal profit of the whole instance
    pub fn optimum(&self) -> u64 {
        self.get(self.n_items(), self.capacity())
    }

    /// `dp[n][capacity] - dp[n-1][capacity]`, or 0 if the table has no items
    pub fn last_row_delta(&self) -> u64 {
        match self.n_items() {
            0 => 0,
            n => self.optimum() - self.get(n - 1, self.capacity()),
        }
    }

    /// Walks back from `(n, capacity)` to recover the positions of an optimal selection, in ascending order.
    /// Item `i - 1` is part of the selection whenever row `i` improved on row `i - 1` at the current capacity.
    pub fn reconstruct(&self) -> Vec<usize> {
        let weights = &self.weights;
        let mut items = vec![];
        let (mut i, mut j) = (self.n_items(), self.capacity());
        while i > 0 && j > 0 {
            if self.get(i, j) != self.get(i - 1, j) {
                items.push(i - 1);
                j -= weights[i - 1] as usize;
            }
            i -= 1;
        }
        // discovered from the last position to the first
        items.reverse();
        items
    }
}
