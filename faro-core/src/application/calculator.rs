// faro-core/src/application/calculator.rs
//
// Per-catalog indicator calculator. Pure function: one catalog in, one
// indicator record out. The reference date is an explicit parameter so the
// freshness classification is deterministic and testable; only the CLI
// boundary consults the wall clock.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::domain::catalog::{
    Catalog, Dataset, OPTIONAL_DATASET_FIELDS, RECOMMENDED_DATASET_FIELDS, completeness_fraction,
};
use crate::domain::federation::federation_indicators;
use crate::domain::frequency::Frequency;
use crate::domain::indicators::{CatalogIndicators, IndicatorWarning, percentage, round2};
use crate::ports::validator::DatasetValidator;

/// Knobs of the freshness classification.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateOptions {
    /// Extra slack on the tolerance window, as a fraction of the declared
    /// interval. 0 keeps the window exact.
    pub update_grace: f64,
}

/// One per-catalog record plus the recoverable per-dataset conditions met
/// while computing it.
#[derive(Debug, Clone)]
pub struct CatalogComputation {
    pub indicators: CatalogIndicators,
    pub warnings: Vec<IndicatorWarning>,
}

pub fn calculate_catalog_indicators(
    catalog: &Catalog,
    central: Option<&Catalog>,
    validator: &dyn DatasetValidator,
    reference_date: NaiveDate,
    options: &UpdateOptions,
) -> CatalogComputation {
    let datasets_cant = catalog.datasets.len() as u64;
    let mut warnings = Vec::new();

    // 1. Validity split (external structural verdicts, pass/fail only)
    let datasets_meta_ok_cant = catalog
        .datasets
        .iter()
        .filter(|dataset| validator.validate_dataset(dataset).valid)
        .count() as u64;
    let datasets_meta_error_cant = datasets_cant - datasets_meta_ok_cant;

    // 2. Freshness split against the declared update frequency
    let freshness = classify_freshness(catalog, reference_date, options, &mut warnings);

    // 3. Days since the most recent update anywhere in the catalog
    let catalogo_ultima_actualizacion_dias = catalog
        .latest_update()
        .map(|date| (reference_date - date).num_days().max(0) as f64)
        .unwrap_or(0.0);

    // 4. Completeness of recommended/optional metadata
    let campos_recomendados_pct = mean_completeness(&catalog.datasets, &RECOMMENDED_DATASET_FIELDS);
    let campos_optativos_pct = mean_completeness(&catalog.datasets, &OPTIONAL_DATASET_FIELDS);

    // 5. Histograms: raw frequency codes, uppercased format labels
    let datasets_frecuencia_cant = tally(
        catalog
            .datasets
            .iter()
            .map(|dataset| dataset.accrual_periodicity.clone()),
    );
    let distribuciones_formatos_cant = tally(catalog.datasets.iter().flat_map(|dataset| {
        dataset
            .distributions
            .iter()
            .map(|distribution| distribution.format.to_uppercase())
    }));

    // 6. Federation against the central catalog, when one was supplied
    let federacion = central.map(|central| federation_indicators(catalog, central));

    CatalogComputation {
        indicators: CatalogIndicators {
            datasets_cant,
            distribuciones_cant: catalog.distribution_count(),
            datasets_meta_ok_cant,
            datasets_meta_error_cant,
            datasets_meta_ok_pct: percentage(datasets_meta_ok_cant, datasets_cant),
            catalogo_ultima_actualizacion_dias,
            datasets_actualizados_cant: freshness.updated,
            datasets_desactualizados_cant: freshness.outdated,
            datasets_actualizados_pct: percentage(freshness.updated, datasets_cant),
            campos_recomendados_pct,
            campos_optativos_pct,
            datasets_frecuencia_cant,
            distribuciones_formatos_cant,
            federacion,
        },
        warnings,
    }
}

struct FreshnessSplit {
    updated: u64,
    outdated: u64,
}

/// Every dataset lands on exactly one side of the split: an unparseable
/// frequency or a missing date counts as outdated, with a warning, instead
/// of aborting the whole computation.
fn classify_freshness(
    catalog: &Catalog,
    reference_date: NaiveDate,
    options: &UpdateOptions,
    warnings: &mut Vec<IndicatorWarning>,
) -> FreshnessSplit {
    let mut updated = 0;
    let mut outdated = 0;

    for dataset in &catalog.datasets {
        match Frequency::parse(&dataset.accrual_periodicity) {
            Err(error) => {
                outdated += 1;
                warnings.push(IndicatorWarning::UnparseableFrequency {
                    dataset: dataset_label(dataset),
                    code: error.code,
                });
            }
            Ok(frequency) => match frequency.tolerance_days() {
                // eventual: irregular publication is never stale
                None => updated += 1,
                Some(window) => match dataset.last_update() {
                    None => {
                        outdated += 1;
                        warnings.push(IndicatorWarning::MissingModified {
                            dataset: dataset_label(dataset),
                        });
                    }
                    Some(date) => {
                        let age_days = (reference_date - date).num_days() as f64;
                        // Inclusive boundary: exactly on the window is fresh
                        if age_days <= window * (1.0 + options.update_grace) {
                            updated += 1;
                        } else {
                            outdated += 1;
                        }
                    }
                },
            },
        }
    }

    FreshnessSplit { updated, outdated }
}

fn dataset_label(dataset: &Dataset) -> String {
    if dataset.identifier.is_empty() {
        dataset.title.clone()
    } else {
        dataset.identifier.clone()
    }
}

/// Mean over datasets of the per-dataset completeness fraction, as a
/// percentage. 0.0 for an empty catalog.
fn mean_completeness(datasets: &[Dataset], field_set: &[&str]) -> f64 {
    if datasets.is_empty() {
        return 0.0;
    }
    let total: f64 = datasets
        .iter()
        .map(|dataset| completeness_fraction(&dataset.populated_fields, field_set))
        .sum();
    round2(100.0 * total / datasets.len() as f64)
}

fn tally(items: impl Iterator<Item = String>) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::catalog::Distribution;
    use crate::ports::validator::{ValidationVerdict, FieldError};
    use std::collections::HashSet;

    // --- MOCK VALIDATOR ---
    struct MockValidator {
        rejected_ids: HashSet<String>,
    }

    impl MockValidator {
        fn accept_all() -> Self {
            Self {
                rejected_ids: HashSet::new(),
            }
        }

        fn rejecting(ids: &[&str]) -> Self {
            Self {
                rejected_ids: ids.iter().map(|id| id.to_string()).collect(),
            }
        }
    }

    impl DatasetValidator for MockValidator {
        fn validate_dataset(&self, dataset: &Dataset) -> ValidationVerdict {
            if self.rejected_ids.contains(&dataset.identifier) {
                ValidationVerdict::failed(vec![FieldError {
                    field: "title".into(),
                    message: "rejected by mock".into(),
                }])
            } else {
                ValidationVerdict::ok()
            }
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn dataset(id: &str, periodicity: &str, modified: Option<&str>) -> Dataset {
        Dataset {
            identifier: id.into(),
            title: format!("Dataset {id}"),
            accrual_periodicity: periodicity.into(),
            modified: modified.map(date),
            ..Default::default()
        }
    }

    const REFERENCE: &str = "2026-01-31";

    fn compute(catalog: &Catalog) -> CatalogComputation {
        calculate_catalog_indicators(
            catalog,
            None,
            &MockValidator::accept_all(),
            date(REFERENCE),
            &UpdateOptions::default(),
        )
    }

    #[test]
    fn test_monthly_dataset_on_the_boundary_is_fresh() {
        // 2026-01-01 is exactly 30 days before 2026-01-31
        let catalog = Catalog {
            datasets: vec![dataset("d1", "R/P1M", Some("2026-01-01"))],
            ..Default::default()
        };

        let result = compute(&catalog);
        assert_eq!(result.indicators.datasets_actualizados_cant, 1);
        assert_eq!(result.indicators.datasets_desactualizados_cant, 0);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_monthly_dataset_past_the_boundary_is_stale() {
        let catalog = Catalog {
            datasets: vec![dataset("d1", "R/P1M", Some("2025-12-31"))],
            ..Default::default()
        };

        let result = compute(&catalog);
        assert_eq!(result.indicators.datasets_actualizados_cant, 0);
        assert_eq!(result.indicators.datasets_desactualizados_cant, 1);
    }

    #[test]
    fn test_grace_widens_the_window() {
        // 35 days old: stale with an exact window, fresh with 20% grace
        let catalog = Catalog {
            datasets: vec![dataset("d1", "R/P1M", Some("2025-12-27"))],
            ..Default::default()
        };

        let strict = compute(&catalog);
        assert_eq!(strict.indicators.datasets_actualizados_cant, 0);

        let lenient = calculate_catalog_indicators(
            &catalog,
            None,
            &MockValidator::accept_all(),
            date(REFERENCE),
            &UpdateOptions { update_grace: 0.2 },
        );
        assert_eq!(lenient.indicators.datasets_actualizados_cant, 1);
    }

    #[test]
    fn test_eventual_dataset_is_never_stale() {
        let catalog = Catalog {
            datasets: vec![dataset("d1", "eventual", Some("2002-01-01"))],
            ..Default::default()
        };

        let result = compute(&catalog);
        assert_eq!(result.indicators.datasets_actualizados_cant, 1);
    }

    #[test]
    fn test_unparseable_frequency_counts_as_stale_with_warning() {
        let catalog = Catalog {
            datasets: vec![
                dataset("d1", "mensual", Some("2026-01-30")),
                dataset("d2", "R/P1D", Some("2026-01-31")),
            ],
            ..Default::default()
        };

        let result = compute(&catalog);
        assert_eq!(result.indicators.datasets_actualizados_cant, 1);
        assert_eq!(result.indicators.datasets_desactualizados_cant, 1);
        assert_eq!(result.warnings.len(), 1);
        assert!(matches!(
            &result.warnings[0],
            IndicatorWarning::UnparseableFrequency { dataset, code }
                if dataset == "d1" && code == "mensual"
        ));
    }

    #[test]
    fn test_missing_date_counts_as_stale_with_warning() {
        let catalog = Catalog {
            datasets: vec![dataset("d1", "R/P1Y", None)],
            ..Default::default()
        };

        let result = compute(&catalog);
        assert_eq!(result.indicators.datasets_desactualizados_cant, 1);
        assert!(matches!(
            &result.warnings[0],
            IndicatorWarning::MissingModified { dataset } if dataset == "d1"
        ));
    }

    #[test]
    fn test_splits_always_sum_to_dataset_count() {
        let catalog = Catalog {
            datasets: vec![
                dataset("d1", "R/P1M", Some("2025-06-01")),
                dataset("d2", "eventual", None),
                dataset("d3", "???", Some("2026-01-31")),
                dataset("d4", "R/P6M", None),
            ],
            ..Default::default()
        };

        let result = calculate_catalog_indicators(
            &catalog,
            None,
            &MockValidator::rejecting(&["d2", "d3"]),
            date(REFERENCE),
            &UpdateOptions::default(),
        );

        let record = &result.indicators;
        assert_eq!(record.datasets_cant, 4);
        assert_eq!(
            record.datasets_meta_ok_cant + record.datasets_meta_error_cant,
            record.datasets_cant
        );
        assert_eq!(
            record.datasets_actualizados_cant + record.datasets_desactualizados_cant,
            record.datasets_cant
        );
        assert_eq!(record.datasets_meta_ok_pct, 50.0);
    }

    #[test]
    fn test_empty_catalog_yields_zeroes_not_errors() {
        let result = compute(&Catalog::default());
        let record = &result.indicators;

        assert_eq!(record.datasets_cant, 0);
        assert_eq!(record.datasets_meta_ok_pct, 0.0);
        assert_eq!(record.datasets_actualizados_pct, 0.0);
        assert_eq!(record.campos_recomendados_pct, 0.0);
        assert_eq!(record.catalogo_ultima_actualizacion_dias, 0.0);
        assert!(record.datasets_frecuencia_cant.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_histograms_tally_raw_codes_and_normalized_formats() {
        let mut d1 = dataset("d1", "R/P1M", Some("2026-01-01"));
        d1.distributions = vec![
            Distribution {
                title: "a".into(),
                format: "csv".into(),
            },
            Distribution {
                title: "b".into(),
                format: "CSV".into(),
            },
        ];
        let mut d2 = dataset("d2", "R/P1M", Some("2026-01-01"));
        d2.distributions = vec![Distribution {
            title: "c".into(),
            format: "JSON".into(),
        }];
        let d3 = dataset("d3", "eventual", None);

        let catalog = Catalog {
            datasets: vec![d1, d2, d3],
            ..Default::default()
        };

        let record = compute(&catalog).indicators;

        assert_eq!(record.datasets_frecuencia_cant.get("R/P1M"), Some(&2));
        assert_eq!(record.datasets_frecuencia_cant.get("eventual"), Some(&1));
        let frequency_total: u64 = record.datasets_frecuencia_cant.values().sum();
        assert_eq!(frequency_total, record.datasets_cant);

        // "csv" and "CSV" collapse into one key
        assert_eq!(record.distribuciones_formatos_cant.get("CSV"), Some(&2));
        assert_eq!(record.distribuciones_formatos_cant.get("JSON"), Some(&1));
        let format_total: u64 = record.distribuciones_formatos_cant.values().sum();
        assert_eq!(format_total, record.distribuciones_cant);
    }

    #[test]
    fn test_days_since_last_update_uses_newest_dataset() {
        let catalog = Catalog {
            datasets: vec![
                dataset("d1", "R/P1M", Some("2025-11-01")),
                dataset("d2", "R/P1M", Some("2026-01-21")),
            ],
            ..Default::default()
        };

        let record = compute(&catalog).indicators;
        assert_eq!(record.catalogo_ultima_actualizacion_dias, 10.0);
    }

    #[test]
    fn test_completeness_is_the_mean_of_per_dataset_fractions() {
        let mut d1 = dataset("d1", "R/P1M", Some("2026-01-01"));
        d1.populated_fields = RECOMMENDED_DATASET_FIELDS
            .iter()
            .map(|f| f.to_string())
            .collect();
        let d2 = dataset("d2", "R/P1M", Some("2026-01-01"));

        let catalog = Catalog {
            datasets: vec![d1, d2],
            ..Default::default()
        };

        let record = compute(&catalog).indicators;
        // one fully populated dataset, one empty: mean is 50%
        assert_eq!(record.campos_recomendados_pct, 50.0);
        assert_eq!(record.campos_optativos_pct, 0.0);
    }

    #[test]
    fn test_federation_block_present_only_with_central() {
        let catalog = Catalog {
            datasets: vec![
                dataset("x", "R/P1M", Some("2026-01-01")),
                dataset("y", "R/P1M", Some("2026-01-01")),
                dataset("z", "R/P1M", Some("2026-01-01")),
            ],
            ..Default::default()
        };
        let central = Catalog {
            datasets: vec![
                dataset("x", "R/P1M", None),
                dataset("z", "R/P1M", None),
                dataset("w", "R/P1M", None),
            ],
            ..Default::default()
        };

        let without = compute(&catalog);
        assert!(without.indicators.federacion.is_none());

        let with = calculate_catalog_indicators(
            &catalog,
            Some(&central),
            &MockValidator::accept_all(),
            date(REFERENCE),
            &UpdateOptions::default(),
        );
        let federacion = with.indicators.federacion.expect("federation block");
        assert_eq!(federacion.datasets_federados_cant, 2);
        assert_eq!(federacion.datasets_no_federados_cant, 1);
        assert_eq!(federacion.datasets_federados_pct, 66.67);
    }
}
