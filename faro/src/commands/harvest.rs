// faro/src/commands/harvest.rs
//
// USE CASE: produce the (catalog, dataset) selection for the downstream
// harvester, either from catalogs + criterion or from a generated report.

use anyhow::Context;
use comfy_table::Table;
use std::fs;
use std::path::{Path, PathBuf};

use faro_core::application::generate_harvest_selection;
use faro_core::domain::harvest::{HarvestCriterion, HarvestReport, HarvestSelectorConfig};
use faro_core::infrastructure::adapters::SchemaValidator;
use faro_core::infrastructure::adapters::json_reader::read_catalog_file;
use faro_core::infrastructure::config::load_monitor_config;
use faro_core::infrastructure::fs::write_json;

pub fn execute(
    catalogs: Vec<String>,
    criterion: Option<String>,
    report: Option<PathBuf>,
    output: Option<PathBuf>,
    project_dir: PathBuf,
) -> anyhow::Result<()> {
    let config = load_monitor_config(&project_dir)?;

    let criterion = match criterion {
        Some(raw) => parse_criterion(&raw)?,
        None => config.harvest_criterion,
    };

    let loaded_catalogs = if catalogs.is_empty() {
        None
    } else {
        let mut list = Vec::with_capacity(catalogs.len());
        for source in &catalogs {
            list.push(read_catalog_file(Path::new(source))?);
        }
        Some(list)
    };

    let loaded_report = match report {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read harvest report at {:?}", path))?;
            let parsed: HarvestReport = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse harvest report at {:?}", path))?;
            Some(parsed)
        }
        None => None,
    };

    let selector = HarvestSelectorConfig {
        catalogs: loaded_catalogs,
        criterion,
        report: loaded_report,
    };
    let selection = generate_harvest_selection(selector, &SchemaValidator)?;

    println!(
        "🌾 {} dataset(s) selected for harvesting",
        selection.entries.len()
    );

    if !selection.entries.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Catalog", "Dataset"]);
        for entry in &selection.entries {
            table.add_row(vec![entry.catalog.clone(), entry.dataset.clone()]);
        }
        println!("{table}");
    }

    if let Some(path) = output {
        write_json(&path, &selection)?;
        println!("✨ Selection written to {}", path.display());
    }

    Ok(())
}

fn parse_criterion(raw: &str) -> anyhow::Result<HarvestCriterion> {
    match raw {
        "all" => Ok(HarvestCriterion::All),
        "valid" => Ok(HarvestCriterion::Valid),
        "none" => Ok(HarvestCriterion::None),
        other => anyhow::bail!("unknown harvest criterion '{other}' (expected all|valid|none)"),
    }
}
