// faro-core/src/domain/harvest.rs
//
// Harvest selection model. The caller-facing configuration carries two
// optional input modes (direct catalogs, or a previously generated report);
// converting it into the tagged `HarvestPolicy` rejects ambiguous input.

use crate::domain::catalog::Catalog;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid harvest configuration: {reason}")]
pub struct InvalidHarvestModeError {
    pub reason: String,
}

/// Which datasets qualify when selecting directly from catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarvestCriterion {
    #[default]
    All,
    /// Only datasets that pass the structural validator.
    Valid,
    /// Select nothing (harvesting disabled for the node).
    None,
}

/// One row of an externally generated harvest report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub catalog: String,
    pub dataset: String,
    pub harvest: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HarvestReport {
    pub entries: Vec<ReportEntry>,
}

/// A (catalog, dataset) pair eligible for harvesting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HarvestEntry {
    pub catalog: String,
    pub dataset: String,
}

/// Ordered, de-duplicated selection handed to the downstream harvester.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HarvestSelection {
    pub entries: Vec<HarvestEntry>,
}

/// Caller-supplied configuration: exactly one of `catalogs` / `report` must
/// be present. `criterion` only applies to the catalogs mode.
#[derive(Debug, Clone, Default)]
pub struct HarvestSelectorConfig {
    pub catalogs: Option<Vec<Catalog>>,
    pub criterion: HarvestCriterion,
    pub report: Option<HarvestReport>,
}

/// Resolved harvest mode, consumed by the selection use case.
#[derive(Debug, Clone)]
pub enum HarvestPolicy {
    Catalogs {
        catalogs: Vec<Catalog>,
        criterion: HarvestCriterion,
    },
    FromReport(HarvestReport),
}

impl TryFrom<HarvestSelectorConfig> for HarvestPolicy {
    type Error = InvalidHarvestModeError;

    fn try_from(config: HarvestSelectorConfig) -> Result<Self, Self::Error> {
        match (config.catalogs, config.report) {
            (Some(catalogs), None) => Ok(HarvestPolicy::Catalogs {
                catalogs,
                criterion: config.criterion,
            }),
            (None, Some(report)) => Ok(HarvestPolicy::FromReport(report)),
            (None, None) => Err(InvalidHarvestModeError {
                reason: "neither catalogs nor a report were supplied".into(),
            }),
            (Some(_), Some(_)) => Err(InvalidHarvestModeError {
                reason: "both catalogs and a report were supplied".into(),
            }),
        }
    }
}
