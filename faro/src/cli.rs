// faro/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "faro")]
#[command(about = "The Open Data Network Quality & Federation Monitor", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📊 Computes quality and federation indicators for a set of catalogs
    Indicators {
        /// Catalog document (data.json), repeatable
        #[arg(long = "catalog", required = true)]
        catalogs: Vec<String>,

        /// Central catalog to compute federation indicators against
        #[arg(long)]
        central: Option<String>,

        /// Reference date for the freshness classification (YYYY-MM-DD).
        /// Defaults to today.
        #[arg(long)]
        reference_date: Option<NaiveDate>,

        /// Write the full report as JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Project directory (where faro.yaml lives)
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },

    /// 🌾 Selects the datasets eligible for harvesting
    Harvest {
        /// Catalog document (data.json), repeatable
        #[arg(long = "catalog")]
        catalogs: Vec<String>,

        /// Selection criterion: all | valid | none
        #[arg(long)]
        criterion: Option<String>,

        /// Previously generated harvest report (JSON)
        #[arg(long)]
        report: Option<PathBuf>,

        /// Write the selection as JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Project directory (where faro.yaml lives)
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },

    /// 🔍 Validates the structural metadata of one catalog
    Validate {
        /// Catalog document (data.json)
        #[arg(long)]
        catalog: String,
    },

    /// 🕵️‍♀️ Scans a data directory and generates 'catalogs.yaml'
    Scan {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Data directory relative to project (default: "data")
        #[arg(long, default_value = "data")]
        data_dir: String,
    },
}
