//! Defines command-line interface options using `clap` for the explorer.

use argo_explorer::config::{ExplorerConfig, FailurePolicy, DATA_DIR_ENV, DEFAULT_DATA_DIR};
use argo_explorer::discovery::PROFILE_FILE_PATTERN;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Explore Argo float profile files
#[derive(Parser, Debug)]
#[command(
    version,
    name = "argo-explorer",
    about = "Decode Argo *_prof.nc files and summarize their profiles"
)]
pub struct Args {
    /// Directory containing the profile files
    #[arg(short, long, env = DATA_DIR_ENV, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// File-name pattern of profile files
    #[arg(long, default_value = PROFILE_FILE_PATTERN)]
    pub pattern: String,

    /// Only show these floats (repeatable). Defaults to every float.
    #[arg(short, long = "platform")]
    pub platforms: Vec<String>,

    /// First observation date to include, formatted as YYYY-MM-DD
    #[arg(long, value_parser = parse_date)]
    pub from: Option<NaiveDate>,

    /// Last observation date to include, formatted as YYYY-MM-DD
    #[arg(long, value_parser = parse_date)]
    pub to: Option<NaiveDate>,

    /// Skip files that cannot be decoded instead of aborting
    #[arg(long)]
    pub skip_malformed: bool,

    /// Write the filtered view as JSON to this path
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write the full profile table as JSON to this path
    #[arg(long)]
    pub table_json: Option<PathBuf>,

    /// Print the structure of one profile file and exit
    #[arg(long)]
    pub inspect: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    pub fn config(&self) -> ExplorerConfig {
        let policy = if self.skip_malformed {
            FailurePolicy::SkipAndLog
        } else {
            FailurePolicy::Abort
        };
        ExplorerConfig {
            data_dir: self.data_dir.clone(),
            file_pattern: self.pattern.clone(),
            failure_policy: policy,
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{s}': expected YYYY-MM-DD ({e})"))
}
