use std::fs::{self, File};
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use kp_compare::config::KPCConfig;
use kp_compare::io::cli::Cli;
use kp_compare::{EPOCH, io};
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            KPCConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed KPCConfig: {config:?}");

    let request = args.request()?;
    let output = kp_compare::run(&request, config)?;

    io::log_report(&output.report);

    if let Some(folder) = &args.solution_folder {
        fs::create_dir_all(folder)
            .with_context(|| format!("could not create solution folder: {folder:?}"))?;
        let report_path = folder.join(format!("report_{}.json", args.output_stem()));
        io::write_json(&output, &report_path)?;
    }

    info!("[MAIN] finished in {:.3}ms", EPOCH.elapsed().as_secs_f64() * 1000.0);

    Ok(())
}
