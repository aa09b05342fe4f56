// faro-core/src/application/monitor.rs
//
// Batch orchestration: load the network's catalogs through the reader port,
// compute one record per catalog, fold them into the network record. A
// catalog that fails to load never aborts the batch; it is excluded with a
// caller-visible skipped entry.

use chrono::NaiveDate;
use futures::StreamExt;
use serde::Serialize;
use tracing::warn;

use crate::application::aggregation::aggregate_network_indicators;
use crate::application::calculator::{
    CatalogComputation, UpdateOptions, calculate_catalog_indicators,
};
use crate::domain::catalog::Catalog;
use crate::domain::error::DomainError;
use crate::domain::indicators::{CatalogIndicators, NetworkIndicators};
use crate::error::FaroError;
use crate::ports::reader::CatalogReader;
use crate::ports::validator::DatasetValidator;

const READ_CONCURRENCY: usize = 8;

// --- REPORT DTOs ---
// What the CLI renders and what `--output` persists.

#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    pub catalog: String,

    #[serde(flatten)]
    pub indicators: CatalogIndicators,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportWarning {
    pub catalog: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedCatalog {
    pub source: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NetworkReport {
    pub catalogs: Vec<CatalogReport>,
    pub network: NetworkIndicators,
    pub warnings: Vec<ReportWarning>,
    pub skipped: Vec<SkippedCatalog>,
}

/// Pure batch entry point: already-parsed catalogs in, the pair of
/// per-catalog computations (in input order) and the network record out.
pub fn compute_network_indicators(
    catalogs: &[Catalog],
    central: Option<&Catalog>,
    validator: &dyn DatasetValidator,
    reference_date: NaiveDate,
    options: &UpdateOptions,
) -> Result<(Vec<CatalogComputation>, NetworkIndicators), DomainError> {
    let computations: Vec<CatalogComputation> = catalogs
        .iter()
        .map(|catalog| {
            calculate_catalog_indicators(catalog, central, validator, reference_date, options)
        })
        .collect();

    let records: Vec<CatalogIndicators> = computations
        .iter()
        .map(|computation| computation.indicators.clone())
        .collect();
    let network = aggregate_network_indicators(&records)?;

    Ok((computations, network))
}

pub async fn run_network_monitor(
    reader: &dyn CatalogReader,
    sources: &[String],
    central_source: Option<&str>,
    validator: &dyn DatasetValidator,
    reference_date: NaiveDate,
    options: &UpdateOptions,
) -> Result<NetworkReport, FaroError> {
    // 1. Central catalog first. Federation was explicitly requested, so a
    // central that cannot be loaded is fatal rather than silently dropped.
    let central = match central_source {
        Some(source) => Some(reader.read(source).await?),
        None => None,
    };

    // 2. Bounded concurrent loads; `buffered` keeps caller order
    let loads = futures::stream::iter(
        sources
            .iter()
            .map(|source| async move { (source.clone(), reader.read(source).await) }),
    )
    .buffered(READ_CONCURRENCY)
    .collect::<Vec<_>>()
    .await;

    let mut catalogs = Vec::new();
    let mut skipped = Vec::new();
    for (source, result) in loads {
        match result {
            Ok(catalog) => catalogs.push(catalog),
            Err(e) => {
                warn!(source = %source, error = %e, "Excluding catalog from the batch");
                skipped.push(SkippedCatalog {
                    source,
                    reason: e.to_string(),
                });
            }
        }
    }

    // 3. Pure computation + fold
    let (computations, network) = compute_network_indicators(
        &catalogs,
        central.as_ref(),
        validator,
        reference_date,
        options,
    )?;

    let mut reports = Vec::new();
    let mut warnings = Vec::new();
    for (catalog, computation) in catalogs.iter().zip(computations) {
        for warning in &computation.warnings {
            warnings.push(ReportWarning {
                catalog: catalog.identifier.clone(),
                detail: warning.to_string(),
            });
        }
        reports.push(CatalogReport {
            catalog: catalog.identifier.clone(),
            indicators: computation.indicators,
        });
    }

    Ok(NetworkReport {
        catalogs: reports,
        network,
        warnings,
        skipped,
    })
}
