//! CLI definition using clap

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use lanerate_types::{OutputFormat, TrailerType};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lane-rate")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Look up posted loads on a lane and tier their rates")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Shipment CSV file. Uses config value, then synthetic data, if not specified.
    #[arg(long, short = 'd', global = true)]
    pub data: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search loads on a lane and tier their rates
    Search {
        /// Origin city (e.g., "Los Angeles")
        #[arg(long, short = 'o')]
        origin: String,

        /// Destination city (e.g., "Dallas")
        #[arg(long, short = 'D')]
        destination: String,

        /// Trailer type
        #[arg(long, short = 't', value_enum)]
        trailer: TrailerType,

        /// Tier margin in currency units. Uses config value if not specified.
        #[arg(long, short = 'm')]
        margin: Option<f64>,

        /// Earliest pickup date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Latest pickup date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Also write the results to an Excel file
        #[arg(long, short = 'x')]
        export: Option<PathBuf>,
    },

    /// List selectable origins, destinations, and trailer types
    Options {
        /// Only list destinations served from this origin
        #[arg(long, short = 'o')]
        origin: Option<String>,
    },

    /// Show per-lane rate summaries
    Summary {
        /// Only include this trailer type
        #[arg(long, short = 't', value_enum)]
        trailer: Option<TrailerType>,
    },

    /// Write a synthetic shipment data set to CSV
    Generate {
        /// Output CSV path
        #[arg(long, short = 'o')]
        output: PathBuf,

        /// Number of records. Uses config value if not specified.
        #[arg(long, short = 'n')]
        count: Option<usize>,

        /// Random seed. Uses config value if not specified.
        #[arg(long, short = 's')]
        seed: Option<u64>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default tier margin
        #[arg(long)]
        set_margin: Option<f64>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default shipment CSV file
        #[arg(long)]
        set_data: Option<PathBuf>,

        /// Use synthetic data by default
        #[arg(long)]
        clear_data: bool,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
