//! Entry point for the Argo profile explorer.
//! Handles CLI parsing, logging setup, file loading, filtering and the terminal report.

use argo_explorer::discovery::discover_profile_files;
use argo_explorer::filter::{select, DateRange, FilterCriteria};
use argo_explorer::loader::{LoadCache, ProfileLoader};
use argo_explorer::metadata::ProfileFileLayout;
use argo_explorer::presentation::{print_report, ExplorerView};
use argo_explorer::ExplorerError;
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;
use tracing::{error, info};

mod cli;

use cli::Args;

fn setup_logging(args: &Args) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("argo_explorer={log_level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn run(args: &Args) -> Result<(), ExplorerError> {
    if let Some(path) = &args.inspect {
        let file = netcdf::open(path)?;
        ProfileFileLayout::inspect(&file).print(&path.display().to_string());
        return Ok(());
    }

    let config = args.config();
    let files = discover_profile_files(&config.data_dir, &config.file_pattern)?;
    info!("Found {} profile files in {}", files.len(), config.data_dir.display());

    let loader = ProfileLoader::new(config.failure_policy);
    let mut cache = LoadCache::new();
    let outcome = cache.get_or_load(&files, |files| loader.load(files))?;
    let table = outcome.table.ensure_not_empty()?;

    if let Some(path) = &args.table_json {
        table.write_json(BufWriter::new(File::create(path)?))?;
        info!("Saved profile table to {}", path.display());
    }

    let mut criteria = FilterCriteria::defaults_for(table, chrono::Utc::now().date_naive());
    if !args.platforms.is_empty() {
        criteria.platforms = args.platforms.iter().cloned().collect();
    }
    let start = args.from.unwrap_or(criteria.dates.start);
    let end = args.to.unwrap_or(criteria.dates.end);
    criteria.dates = DateRange::new(start, end)?;

    let selection = select(table, &criteria);
    let view = ExplorerView::build(&selection);

    if let Some(path) = &args.json {
        view.write_json(BufWriter::new(File::create(path)?))?;
        println!("✅ Saved view to {}", path.display());
    }

    print_report(&selection, &view);
    Ok(())
}

fn main() {
    let args = Args::parse();
    setup_logging(&args);

    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
