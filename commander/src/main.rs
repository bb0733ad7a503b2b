use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{error, info};
use rescue_planner::{
    load::{load_incidents, load_network},
    plan_rescue,
    travelgraph::TravelGraph,
};
use rescue_structs::network::{Network, DEFAULT_ORIGIN};

mod report;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

/// Plans a single rescue boat's route over scored incidents.
#[derive(Parser, Debug)]
#[command(name = "rescue_commander", version)]
struct CommanderConfig {
    /// Incident CSV with id, location, age, has_life_threat, needs_medicine columns.
    #[arg(long, default_value = "data/incidents.csv")]
    incidents: PathBuf,
    /// Network JSON file. The built-in Gampaha district network is used when absent.
    #[arg(long)]
    network: Option<PathBuf>,
    /// Location the boat starts from.
    #[arg(long, default_value = DEFAULT_ORIGIN)]
    origin: String,
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
    /// Print profiler timings (needs the `prof` feature).
    #[arg(long)]
    profile: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = CommanderConfig::parse();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CommanderConfig) -> Result<()> {
    let incidents = load_incidents(&config.incidents)
        .with_context(|| format!("loading incidents from {}", config.incidents.display()))?;

    let network = match &config.network {
        Some(path) => load_network(path)
            .with_context(|| format!("loading network from {}", path.display()))?,
        None => {
            info!("No network file given, using the Gampaha district network");
            Network::gampaha_district()
        }
    };
    let graph = TravelGraph::build(&network);

    let result = plan_rescue(&graph, &config.origin, &incidents);
    let output = match (&result, config.format) {
        (Ok(plan), Format::Table) => report::render_table(plan)?,
        (Ok(plan), Format::Json) => serde_json::to_string_pretty(plan)?,
        (Err(err), Format::Table) => report::render_failure(err)?,
        (Err(err), Format::Json) => serde_json::to_string_pretty(&report::failure_json(err))?,
    };
    println!("{}", output);

    if config.profile {
        #[cfg(feature = "prof")]
        hprof::profiler().print_timing();
        #[cfg(not(feature = "prof"))]
        log::warn!("profiling not available -- enable the 'prof' crate feature");
    }

    result.context("planning failed")?;
    Ok(())
}
