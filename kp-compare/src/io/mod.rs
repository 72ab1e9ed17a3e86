use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use itertools::Itertools;
use knapsack_rs::io::ext_repr::{ExtInstance, ExtReport};
use log::{Level, LevelFilter, debug, info, log};
use serde::Serialize;

use crate::EPOCH;

pub mod cli;
pub mod output;

pub fn read_json_instance(path: &Path) -> Result<ExtInstance> {
    let file = File::open(path)
        .with_context(|| format!("could not open instance file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse instance file: {}", path.display()))
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open report file: {}", path.display()))?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write report file: {}", path.display()))?;

    info!(
        "report written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or_default()
    );
    Ok(())
}

/// Logs the items and both selections of a report in a tabular form
pub fn log_report(report: &ExtReport) {
    debug!("  No | Weight | Profit");
    for item in &report.items {
        debug!("{:>4} | {:>6} | {:>6}", item.no, item.weight, item.profit);
    }
    info!(
        "capacity {}, greedy items [{}], dp items [{}]",
        report.capacity,
        report.greedy.items.iter().join(", "),
        report.dp.solution.items.iter().join(", ")
    );
    if let (Some(g), Some(d)) = (report.greedy_time_ms, report.dp_time_ms) {
        info!("greedy took {g:.3}ms, dp took {d:.3}ms");
    }
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    log!(Level::Info, "[EPOCH]: {}", jiff::Timestamp::now());
    Ok(())
}
