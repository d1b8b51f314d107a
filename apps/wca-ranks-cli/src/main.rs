use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wca_ranks_engine::Metric;
use wca_ranks_tables::{TableSource, DEFAULT_DATA_DIR, DEFAULT_FILE_PREFIX};

mod commands;
mod config;
mod error;

use error::CliResult;

#[derive(Parser)]
#[command(name = "wca-ranks")]
#[command(about = "Rebuild the WCA RanksAverage and RanksSingle tables for a range of competition years")]
#[command(version)]
struct Cli {
    /// Directory holding the export TSV files
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// File name prefix of the export tables
    #[arg(long, global = true, default_value = DEFAULT_FILE_PREFIX)]
    table_prefix: String,

    /// Directory for the generated CSV tables
    #[arg(long, global = true, default_value = "output")]
    output_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write combined world/continent/country ranks tables
    Ranks {
        /// Ranking metric (average or single); repeat for several tables
        #[arg(short, long = "metric", default_values_t = Metric::ALL)]
        metrics: Vec<Metric>,

        /// Only count competitions held in or after this year
        #[arg(long)]
        min_year: Option<i32>,

        /// Only count competitions held in or before this year
        #[arg(long)]
        max_year: Option<i32>,
    },

    /// Write one best-result table per event
    EventRanks {
        /// Ranking metric (average or single)
        #[arg(short, long, default_value_t = Metric::Average)]
        metric: Metric,

        /// Only count competitions held in or after this year
        #[arg(long)]
        min_year: Option<i32>,

        /// Only count competitions held in or before this year
        #[arg(long)]
        max_year: Option<i32>,
    },

    /// Run the jobs listed in a YAML configuration file
    Run {
        /// Run configuration file
        config: PathBuf,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let source = TableSource::new(cli.data_dir, cli.table_prefix);

    match cli.command {
        Commands::Ranks {
            metrics,
            min_year,
            max_year,
        } => commands::ranks::execute(&source, &cli.output_dir, &metrics, min_year, max_year),

        Commands::EventRanks {
            metric,
            min_year,
            max_year,
        } => commands::event_ranks::execute(&source, &cli.output_dir, metric, min_year, max_year),

        Commands::Run { config } => commands::run::execute(&config, &source, &cli.output_dir),
    }
}
