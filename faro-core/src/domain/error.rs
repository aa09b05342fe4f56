// faro-core/src/domain/error.rs

use crate::domain::frequency::FrequencyParseError;
use crate::domain::harvest::InvalidHarvestModeError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error(transparent)]
    #[diagnostic(
        code(faro::domain::frequency),
        help("Expected 'R/P<n><D|M|Y>' (e.g. 'R/P1M', 'R/P0.5Y') or 'eventual'.")
    )]
    Frequency(#[from] FrequencyParseError),

    #[error(transparent)]
    #[diagnostic(
        code(faro::domain::harvest_mode),
        help("Supply either catalogs or a previously generated report, never both.")
    )]
    HarvestMode(#[from] InvalidHarvestModeError),

    #[error("Aggregation mismatch: {0}")]
    #[diagnostic(
        code(faro::domain::aggregation),
        help("All per-catalog records in a batch must share the same central-catalog setting.")
    )]
    AggregationMismatch(String),
}
