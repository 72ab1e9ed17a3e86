use serde::{Deserialize, Serialize};

/// External representation of a [`KPInstance`](crate::entities::KPInstance).
/// Signed integers, so that invalid input can be represented and rejected on import.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtInstance {
    pub capacity: i64,
    pub weights: Vec<i64>,
    pub profits: Vec<i64>,
}

/// External representation of an [`Item`](crate::entities::Item)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ExtItem {
    /// 1-based number of the item
    pub no: usize,
    pub weight: u64,
    pub profit: u64,
}

/// External representation of a [`KPSolution`](crate::entities::KPSolution)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ExtSolution {
    pub total_weight: u64,
    pub total_profit: u64,
    /// 1-based numbers of the selected items, ascending
    pub items: Vec<usize>,
}

/// External representation of a [`DPSolution`](crate::entities::DPSolution)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ExtDPSolution {
    #[serde(flatten)]
    pub solution: ExtSolution,
    pub last_row_delta: u64,
}

/// External representation of a [`ComparisonReport`](crate::compare::ComparisonReport),
/// everything a presentation layer needs to render the outcome of a comparison.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ExtReport {
    pub capacity: u64,
    pub items: Vec<ExtItem>,
    pub greedy: ExtSolution,
    #[serde(rename = "DP")]
    pub dp: ExtDPSolution,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub greedy_time_ms: Option<f64>,
    #[serde(rename = "DPTimeMs", skip_serializing_if = "Option::is_none", default)]
    pub dp_time_ms: Option<f64>,
}
