// faro-core/src/domain/catalog/model.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// --- CATALOG MODEL (DCAT-like) ---
// These structures are the read-only input of the engine. They come fully
// populated from a CatalogReader adapter; the engine never mutates them.

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Catalog {
    /// Stable identifier of the node (falls back to the title when the
    /// source document carries no 'identifier').
    pub identifier: String,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// Catalog-level 'modified' date. Only consulted as a fallback when no
    /// dataset carries a date of its own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<NaiveDate>,

    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Dataset {
    pub identifier: String,
    pub title: String,

    /// Raw accrualPeriodicity code, e.g. "R/P1M" or "eventual". Kept verbatim
    /// because the frequency histogram tallies the unparsed string.
    pub accrual_periodicity: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued: Option<NaiveDate>,

    #[serde(default)]
    pub distributions: Vec<Distribution>,

    /// Metadata keys present and non-empty in the source document, used for
    /// the recommended/optional completeness scoring.
    #[serde(default)]
    pub populated_fields: BTreeSet<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Distribution {
    pub title: String,

    /// Format label ("CSV", "JSON", ...). Empty when the source document
    /// omits it, so format counts still sum to the distribution count.
    #[serde(default)]
    pub format: String,
}

impl Dataset {
    /// Date of last update: 'modified', falling back to 'issued'.
    pub fn last_update(&self) -> Option<NaiveDate> {
        self.modified.or(self.issued)
    }
}

impl Catalog {
    pub fn distribution_count(&self) -> u64 {
        self.datasets.iter().map(|d| d.distributions.len() as u64).sum()
    }

    /// Most recent dataset update in the catalog. Falls back to the
    /// catalog-level 'modified' when no dataset carries a date.
    pub fn latest_update(&self) -> Option<NaiveDate> {
        self.datasets
            .iter()
            .filter_map(Dataset::last_update)
            .max()
            .or(self.modified)
    }
}
