// faro/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug faro indicators ... pour voir les détails
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        // --- USE CASE: INDICATORS ---
        Commands::Indicators {
            catalogs,
            central,
            reference_date,
            output,
            project_dir,
        } => {
            let result =
                commands::indicators::execute(catalogs, central, reference_date, output, project_dir)
                    .await;
            if let Err(e) = result {
                eprintln!("\n💥 CRITICAL MONITOR ERROR: {e:#}");
                std::process::exit(1);
            }
        }

        // --- USE CASE: HARVEST SELECTION ---
        Commands::Harvest {
            catalogs,
            criterion,
            report,
            output,
            project_dir,
        } => {
            if let Err(e) = commands::harvest::execute(catalogs, criterion, report, output, project_dir)
            {
                eprintln!("\n❌ Harvest selection failed: {e:#}");
                std::process::exit(1);
            }
        }

        // --- USE CASE: VALIDATE ---
        Commands::Validate { catalog } => {
            if let Err(e) = commands::validate::execute(catalog) {
                eprintln!("❌ Validation failed: {e:#}");
                std::process::exit(1);
            }
        }

        // --- USE CASE: SCAN (CATALOG DISCOVERY) ---
        Commands::Scan {
            project_dir,
            data_dir,
        } => {
            if let Err(e) = commands::scan::execute(project_dir, data_dir) {
                eprintln!("❌ Scan failed: {e:#}");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
