// faro-core/src/domain/indicators.rs
//
// Indicator records. Field names are the indicator names published to
// monitoring consumers, so the serialized form is the contract.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Round to 2 decimals, the precision every published percentage uses.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage of `part` over `total`, rounded. Division by zero is defined
/// as 0.0, never an error.
pub fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(100.0 * part as f64 / total as f64)
}

// --- RECORDS ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FederationIndicators {
    pub datasets_federados_cant: u64,
    pub datasets_no_federados_cant: u64,
    pub datasets_federados_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CatalogIndicators {
    pub datasets_cant: u64,
    pub distribuciones_cant: u64,

    // Validity split (structural validator verdicts)
    pub datasets_meta_ok_cant: u64,
    pub datasets_meta_error_cant: u64,
    pub datasets_meta_ok_pct: f64,

    // Freshness
    pub catalogo_ultima_actualizacion_dias: f64,
    pub datasets_actualizados_cant: u64,
    pub datasets_desactualizados_cant: u64,
    pub datasets_actualizados_pct: f64,

    // Completeness of recommended/optional metadata
    pub campos_recomendados_pct: f64,
    pub campos_optativos_pct: f64,

    // Histograms (raw frequency codes; uppercased format labels)
    pub datasets_frecuencia_cant: BTreeMap<String, u64>,
    pub distribuciones_formatos_cant: BTreeMap<String, u64>,

    /// Present only when a central catalog was supplied.
    #[serde(flatten)]
    pub federacion: Option<FederationIndicators>,
}

/// Network-wide record: one `CatalogIndicators` aggregated over the whole
/// batch, plus the catalog count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NetworkIndicators {
    pub catalogos_cant: u64,

    #[serde(flatten)]
    pub indicators: CatalogIndicators,
}

// --- WARNINGS ---
// Recoverable per-dataset conditions, surfaced next to the record instead of
// aborting the computation.

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorWarning {
    #[error("dataset '{dataset}' declares unparseable accrualPeriodicity '{code}'")]
    UnparseableFrequency { dataset: String, code: String },

    #[error("dataset '{dataset}' has a scheduled frequency but no modified/issued date")]
    MissingModified { dataset: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_percentage_rounds_to_two_decimals() {
        assert_eq!(percentage(2, 3), 66.67);
        assert_eq!(percentage(1, 3), 33.33);
        assert_eq!(percentage(3, 3), 100.0);
    }

    #[test]
    fn test_percentage_zero_total_is_defined() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(5, 0), 0.0);
    }

    #[test]
    fn test_federation_block_serializes_flattened() -> Result<()> {
        let record = CatalogIndicators {
            datasets_cant: 3,
            federacion: Some(FederationIndicators {
                datasets_federados_cant: 2,
                datasets_no_federados_cant: 1,
                datasets_federados_pct: 66.67,
            }),
            ..Default::default()
        };

        let json = serde_json::to_value(&record)?;
        assert_eq!(json["datasets_federados_cant"], 2);
        assert!(json.get("federacion").is_none());
        Ok(())
    }

    #[test]
    fn test_federation_block_absent_when_not_computed() -> Result<()> {
        let record = CatalogIndicators::default();
        let json = serde_json::to_value(&record)?;
        assert!(json.get("datasets_federados_cant").is_none());
        Ok(())
    }
}
