// faro-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::{CatalogLoadError, InfrastructureError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FaroError {
    // --- ERREURS DU DOMAINE (Frequency, Harvest, Aggregation) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- ERREURS D'INFRASTRUCTURE (IO, Parsing) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- ERREURS GÉNÉRIQUES / APPLICATIVES ---
    #[error("Internal Error: {0}")]
    InternalError(String),
}

// Manual implementations to avoid duplicate enum variants but keep ergonomics
impl From<std::io::Error> for FaroError {
    fn from(err: std::io::Error) -> Self {
        FaroError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<CatalogLoadError> for FaroError {
    fn from(err: CatalogLoadError) -> Self {
        FaroError::Infrastructure(InfrastructureError::CatalogLoad(err))
    }
}
