// faro-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

/// A catalog document that could not be resolved into a Catalog value.
#[derive(Error, Debug, Diagnostic)]
#[error("Failed to load catalog from '{source_ref}': {reason}")]
#[diagnostic(
    code(faro::infra::catalog_load),
    help("Check that the path points to a readable data.json document.")
)]
pub struct CatalogLoadError {
    pub source_ref: String,
    pub reason: String,
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- CATALOG INGESTION ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    CatalogLoad(#[from] CatalogLoadError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(code(faro::infra::io), help("Check file permissions or path validity."))]
    Io(#[from] std::io::Error),

    // --- DOCUMENTS / JSON ---
    #[error("JSON Parsing Error: {0}")]
    #[diagnostic(code(faro::infra::json), help("Check the document syntax."))]
    Json(#[from] serde_json::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(faro::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Configuration not found at '{0}'")]
    #[diagnostic(code(faro::infra::config_missing))]
    ConfigNotFound(String),
}
