use crate::compare::ComparisonReport;
use crate::entities::{DPSolution, Item, KPSolution};
use crate::io::ext_repr::{ExtDPSolution, ExtItem, ExtReport, ExtSolution};

/// Exports an item, numbering it from 1
pub fn export_item(item: &Item) -> ExtItem {
    ExtItem {
        no: item.display_no(),
        weight: item.weight,
        profit: item.profit,
    }
}

/// Exports a solution, shifting its item positions to 1-based numbers
pub fn export_solution(solution: &KPSolution) -> ExtSolution {
    ExtSolution {
        total_weight: solution.total_weight,
        total_profit: solution.total_profit,
        items: solution.items.iter().map(|id| id + 1).collect(),
    }
}

fn export_dp_solution(dp_solution: &DPSolution) -> ExtDPSolution {
    ExtDPSolution {
        solution: export_solution(&dp_solution.solution),
        last_row_delta: dp_solution.last_row_delta,
    }
}

/// Exports a comparison report out of the library
pub fn export_report(report: &ComparisonReport) -> ExtReport {
    ExtReport {
        capacity: report.instance.capacity(),
        items: report.instance.items().map(|item| export_item(&item)).collect(),
        greedy: export_solution(&report.greedy),
        dp: export_dp_solution(&report.dp),
        greedy_time_ms: report.greedy_time_ms,
        dp_time_ms: report.dp_time_ms,
    }
}
