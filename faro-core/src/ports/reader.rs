// faro-core/src/ports/reader.rs

// This file defines what the engine needs, without knowing how it's done.
// The engine consumes fully populated Catalog values; where they come from
// (a local data.json, a URL, a spreadsheet) is an adapter concern.

use crate::domain::catalog::Catalog;
use crate::error::FaroError;
use async_trait::async_trait;

#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// Resolves a source reference (path or URL) into a parsed Catalog.
    /// Fails with a CatalogLoadError wrapped in FaroError; the engine never
    /// retries or interprets load failures itself.
    async fn read(&self, source: &str) -> Result<Catalog, FaroError>;
}
