use crate::entities::KPInstance;
use serde::{Deserialize, Serialize};

/// Selection of items produced by a solver.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KPSolution {
    pub total_weight: u64,
    pub total_profit: u64,
    /// 0-based positions of the selected items, strictly ascending
    pub items: Vec<usize>,
}

impl KPSolution {
    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Fraction of the capacity used by the selection
    pub fn usage(&self, instance: &KPInstance) -> f32 {
        match instance.capacity() {
            0 => 0.0,
            c => self.total_weight as f32 / c as f32,
        }
    }
}

/// Result of the dynamic-programming solver.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DPSolution {
    pub solution: KPSolution,
    /// `dp[n][capacity] - dp[n-1][capacity]`, 0 for an instance without items.
    /// This is not the profit of any particular item in general and carries no meaning for correctness.
    pub last_row_delta: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_is_relative_to_capacity() {
        let instance = KPInstance::new(10, vec![5, 4, 6, 3], vec![10, 40, 30, 50]).unwrap();
        let sol = KPSolution {
            total_weight: 7,
            total_profit: 90,
            items: vec![1, 3],
        };
        assert_eq!(sol.usage(&instance), 0.7);

        let empty = KPInstance::new(0, vec![], vec![]).unwrap();
        assert_eq!(KPSolution::default().usage(&empty), 0.0);
    }
}
