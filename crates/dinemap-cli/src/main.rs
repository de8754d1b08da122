mod browse;
mod geocode;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::browse::FilterArgs;

#[derive(Debug, Parser)]
#[command(name = "dinemap")]
#[command(about = "Browse, filter, and geocode a curated restaurant list")]
struct Cli {
    /// Records file (JSON or YAML); overrides `DINEMAP_RECORDS_PATH`
    #[arg(long, global = true)]
    records: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List restaurants matching the given filters
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Print the matching records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the selectable values for every facet
    Facets {
        /// Print the option lists as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one restaurant with its additional details
    Show {
        /// Record id
        id: String,
    },
    /// Resolve coordinates for the restaurants matching the given filters
    Geocode {
        #[command(flatten)]
        filters: FilterArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `--help` and usage errors must not depend on the environment.
    let cli = Cli::parse();
    let config = dinemap_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let path = cli
        .records
        .clone()
        .unwrap_or_else(|| config.records_path.clone());
    let records = dinemap_core::load_records(&path)
        .with_context(|| format!("failed to load records from {}", path.display()))?;
    tracing::info!(env = %config.env, count = records.len(), "records loaded");

    match cli.command {
        Commands::List { filters, json } => browse::run_list(&records, &filters, json)?,
        Commands::Facets { json } => browse::run_facets(&records, json)?,
        Commands::Show { id } => browse::run_show(&records, &id)?,
        Commands::Geocode { filters } => geocode::run_geocode(&records, &filters, &config).await?,
    }

    Ok(())
}
