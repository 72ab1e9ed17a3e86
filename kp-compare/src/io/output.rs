use crate::config::KPCConfig;
use knapsack_rs::io::ext_repr::ExtReport;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct KPCOutput {
    pub report: ExtReport,
    pub config: KPCConfig,
}
