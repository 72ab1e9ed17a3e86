use serde::{Deserialize, Serialize};

/// A single item of a [`KPInstance`](crate::entities::KPInstance).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// 0-based position of the item in the instance, also its identifier
    pub id: usize,
    pub weight: u64,
    pub profit: u64,
}

impl Item {
    /// 1-based number under which the item is presented
    pub fn display_no(&self) -> usize {
        self.id + 1
    }
}
