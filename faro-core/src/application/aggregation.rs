// faro-core/src/application/aggregation.rs
//
// Network aggregator: folds per-catalog records into one network-wide
// record. Counts sum; histograms merge per key; every published percentage
// is recomputed from the aggregated counts so it stays derivable from them.
// The one exception is the completeness pair, weighted by dataset count
// because the underlying per-dataset fractions are not retained here.

use std::collections::BTreeMap;

use crate::domain::error::DomainError;
use crate::domain::indicators::{
    CatalogIndicators, FederationIndicators, NetworkIndicators, percentage, round2,
};

pub fn aggregate_network_indicators(
    records: &[CatalogIndicators],
) -> Result<NetworkIndicators, DomainError> {
    let catalogos_cant = records.len() as u64;
    if records.is_empty() {
        return Ok(NetworkIndicators {
            catalogos_cant: 0,
            indicators: CatalogIndicators::default(),
        });
    }

    // Mixing records computed with and without a central catalog would
    // silently corrupt the federation percentages: refuse upfront.
    let with_federation = records.iter().filter(|r| r.federacion.is_some()).count();
    if with_federation != 0 && with_federation != records.len() {
        return Err(DomainError::AggregationMismatch(format!(
            "{} of {} records carry federation indicators",
            with_federation,
            records.len()
        )));
    }

    let mut totals = CatalogIndicators::default();
    for record in records {
        totals.datasets_cant += record.datasets_cant;
        totals.distribuciones_cant += record.distribuciones_cant;
        totals.datasets_meta_ok_cant += record.datasets_meta_ok_cant;
        totals.datasets_meta_error_cant += record.datasets_meta_error_cant;
        totals.datasets_actualizados_cant += record.datasets_actualizados_cant;
        totals.datasets_desactualizados_cant += record.datasets_desactualizados_cant;

        merge_histogram(&mut totals.datasets_frecuencia_cant, &record.datasets_frecuencia_cant);
        merge_histogram(
            &mut totals.distribuciones_formatos_cant,
            &record.distribuciones_formatos_cant,
        );

        // Freshest signal in the network wins
        totals.catalogo_ultima_actualizacion_dias = totals
            .catalogo_ultima_actualizacion_dias
            .max(record.catalogo_ultima_actualizacion_dias);
    }

    // Percentages are recomputed, never averaged, so the network figures are
    // exactly derivable from the published counts.
    totals.datasets_meta_ok_pct = percentage(totals.datasets_meta_ok_cant, totals.datasets_cant);
    totals.datasets_actualizados_pct =
        percentage(totals.datasets_actualizados_cant, totals.datasets_cant);

    totals.campos_recomendados_pct =
        weighted_mean(records, |r| r.campos_recomendados_pct);
    totals.campos_optativos_pct = weighted_mean(records, |r| r.campos_optativos_pct);

    if with_federation == records.len() {
        let federados: u64 = records
            .iter()
            .filter_map(|r| r.federacion.as_ref())
            .map(|f| f.datasets_federados_cant)
            .sum();
        let no_federados: u64 = records
            .iter()
            .filter_map(|r| r.federacion.as_ref())
            .map(|f| f.datasets_no_federados_cant)
            .sum();
        totals.federacion = Some(FederationIndicators {
            datasets_federados_cant: federados,
            datasets_no_federados_cant: no_federados,
            datasets_federados_pct: percentage(federados, totals.datasets_cant),
        });
    }

    Ok(NetworkIndicators {
        catalogos_cant,
        indicators: totals,
    })
}

fn merge_histogram(accumulator: &mut BTreeMap<String, u64>, other: &BTreeMap<String, u64>) {
    for (key, count) in other {
        *accumulator.entry(key.clone()).or_insert(0) += count;
    }
}

/// Mean of a percentage field weighted by each catalog's dataset count.
fn weighted_mean(records: &[CatalogIndicators], field: impl Fn(&CatalogIndicators) -> f64) -> f64 {
    let total_datasets: u64 = records.iter().map(|r| r.datasets_cant).sum();
    if total_datasets == 0 {
        return 0.0;
    }
    let weighted_sum: f64 = records
        .iter()
        .map(|r| field(r) * r.datasets_cant as f64)
        .sum();
    round2(weighted_sum / total_datasets as f64)
}
