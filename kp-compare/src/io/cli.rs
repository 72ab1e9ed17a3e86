use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use knapsack_rs::io::ext_repr::ExtInstance;
use log::LevelFilter;

use crate::io::read_json_instance;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Capacity of the knapsack
    #[arg(short, long, allow_negative_numbers = true, required_unless_present = "input_file")]
    pub capacity: Option<i64>,
    /// Number of items to generate
    #[arg(short, long, allow_negative_numbers = true, required_unless_present = "input_file")]
    pub n_items: Option<i64>,
    /// Solve a fixed instance instead of a generated one
    #[arg(short, long, value_name = "FILE", conflicts_with_all = ["capacity", "n_items"])]
    pub input_file: Option<PathBuf>,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: Option<PathBuf>,
    #[arg(long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

/// What a single run should compare the solvers on
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// A freshly generated instance
    Random { capacity: i64, n_items: i64 },
    /// An instance provided by the user
    Fixed(ExtInstance),
}

impl Cli {
    pub fn request(&self) -> Result<Request> {
        match (&self.input_file, self.capacity, self.n_items) {
            (Some(path), _, _) => Ok(Request::Fixed(read_json_instance(path)?)),
            (None, Some(capacity), Some(n_items)) => Ok(Request::Random { capacity, n_items }),
            _ => anyhow::bail!("either an input file or both capacity and number of items are required"),
        }
    }

    /// Stem used to name the output files
    pub fn output_stem(&self) -> String {
        match (&self.input_file, self.capacity, self.n_items) {
            (Some(path), _, _) => path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "instance".to_string()),
            (None, capacity, n_items) => {
                format!("c{}_n{}", capacity.unwrap_or(0), n_items.unwrap_or(0))
            }
        }
    }
}
