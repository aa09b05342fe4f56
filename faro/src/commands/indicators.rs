// faro/src/commands/indicators.rs
//
// USE CASE: compute per-catalog and network indicators and render them.

use chrono::{NaiveDate, Utc};
use comfy_table::Table;
use std::path::PathBuf;

use faro_core::application::monitor::NetworkReport;
use faro_core::application::{UpdateOptions, run_network_monitor};
use faro_core::infrastructure::adapters::{JsonCatalogReader, SchemaValidator};
use faro_core::infrastructure::config::load_monitor_config;
use faro_core::infrastructure::fs::write_json;

pub async fn execute(
    catalogs: Vec<String>,
    central: Option<String>,
    reference_date: Option<NaiveDate>,
    output: Option<PathBuf>,
    project_dir: PathBuf,
) -> anyhow::Result<()> {
    // A. Load the Config (Infra)
    println!("⚙️  Loading configuration...");
    let config = load_monitor_config(&project_dir)?;
    tracing::debug!(?config, "Monitor configuration resolved");

    let central = central.or_else(|| config.central_catalog.clone());
    // The wall clock is consulted only here, at the outermost boundary
    let reference_date = reference_date.unwrap_or_else(|| Utc::now().date_naive());
    let options = UpdateOptions {
        update_grace: config.update_grace,
    };

    // B. Instantiate the adapters and run the monitor (Application Layer)
    let reader = JsonCatalogReader;
    let validator = SchemaValidator;

    println!(
        "📊 Computing indicators for {} catalog(s) (reference date {})...",
        catalogs.len(),
        reference_date
    );
    let report = run_network_monitor(
        &reader,
        &catalogs,
        central.as_deref(),
        &validator,
        reference_date,
        &options,
    )
    .await?;

    // C. Render
    render_catalog_table(&report);
    render_network_summary(&report);

    for warning in &report.warnings {
        println!("   ⚠️  [{}] {}", warning.catalog, warning.detail);
    }
    for skipped in &report.skipped {
        eprintln!("   ❌ Skipped {}: {}", skipped.source, skipped.reason);
    }

    if let Some(path) = output {
        write_json(&path, &report)?;
        println!("✨ Report written to {}", path.display());
    }

    Ok(())
}

fn render_catalog_table(report: &NetworkReport) {
    let mut table = Table::new();
    table.set_header(vec![
        "Catalog",
        "Datasets",
        "Distributions",
        "Meta OK %",
        "Updated %",
        "Days since update",
        "Federated %",
    ]);

    for entry in &report.catalogs {
        let indicators = &entry.indicators;
        table.add_row(vec![
            entry.catalog.clone(),
            indicators.datasets_cant.to_string(),
            indicators.distribuciones_cant.to_string(),
            format!("{:.2}", indicators.datasets_meta_ok_pct),
            format!("{:.2}", indicators.datasets_actualizados_pct),
            format!("{:.0}", indicators.catalogo_ultima_actualizacion_dias),
            indicators
                .federacion
                .as_ref()
                .map(|f| format!("{:.2}", f.datasets_federados_pct))
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }

    println!("{table}");
}

fn render_network_summary(report: &NetworkReport) {
    let network = &report.network;
    let indicators = &network.indicators;

    println!(
        "\n🌐 Network: {} catalog(s), {} dataset(s), {} distribution(s)",
        network.catalogos_cant, indicators.datasets_cant, indicators.distribuciones_cant
    );
    println!(
        "   Meta OK {:.2}% | Updated {:.2}% | Recommended fields {:.2}%",
        indicators.datasets_meta_ok_pct,
        indicators.datasets_actualizados_pct,
        indicators.campos_recomendados_pct
    );
    if let Some(federacion) = &indicators.federacion {
        println!(
            "   Federated {}/{} ({:.2}%)",
            federacion.datasets_federados_cant,
            indicators.datasets_cant,
            federacion.datasets_federados_pct
        );
    }
}
