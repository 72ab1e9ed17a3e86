use std::sync::LazyLock;
use std::time::Instant;

use anyhow::{Context, Result};
use knapsack_rs::compare::Comparison;
use knapsack_rs::io::{export_report, import_dimensions, import_instance};
use log::info;
use rand::SeedableRng;
use rand::prelude::SmallRng;

use crate::config::KPCConfig;
use crate::io::cli::Request;
use crate::io::output::KPCOutput;

pub mod config;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Creates the PRNG for a single run, deterministic if a seed is provided
pub fn create_rng(prng_seed: Option<u64>) -> SmallRng {
    match prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}

/// Executes a single comparison run and bundles its report with the config that produced it.
pub fn run(request: &Request, config: KPCConfig) -> Result<KPCOutput> {
    let comparison = Comparison::new(config.comparison);

    let report = match request {
        Request::Random { capacity, n_items } => {
            let (capacity, n_items) = import_dimensions(*capacity, *n_items)?;
            let mut rng = create_rng(config.prng_seed);
            comparison
                .run(capacity, n_items, &mut rng)
                .context("comparison on generated instance failed")?
        }
        Request::Fixed(ext_instance) => {
            let instance = import_instance(ext_instance)?;
            comparison
                .run_instance(instance)
                .context("comparison on provided instance failed")?
        }
    };

    info!(
        "[MAIN] greedy: {} items, weight {} ({:.1}% of capacity), profit {}",
        report.greedy.n_items(),
        report.greedy.total_weight,
        report.greedy.usage(&report.instance) * 100.0,
        report.greedy.total_profit
    );
    info!(
        "[MAIN] dp:     {} items, weight {} ({:.1}% of capacity), profit {}",
        report.dp.solution.n_items(),
        report.dp.solution.total_weight,
        report.dp.solution.usage(&report.instance) * 100.0,
        report.dp.solution.total_profit
    );

    Ok(KPCOutput {
        report: export_report(&report),
        config,
    })
}
