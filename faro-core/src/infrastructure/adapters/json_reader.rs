// faro-core/src/infrastructure/adapters/json_reader.rs
//
// Adapter: resolves a local data.json document into the in-memory Catalog.
// Dates are parsed by their 'YYYY-MM-DD' prefix, so both plain dates and
// full ISO-8601 timestamps are accepted.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::domain::catalog::{Catalog, Dataset, Distribution};
use crate::error::FaroError;
use crate::infrastructure::error::CatalogLoadError;
use crate::ports::reader::CatalogReader;

pub struct JsonCatalogReader;

#[async_trait]
impl CatalogReader for JsonCatalogReader {
    async fn read(&self, source: &str) -> Result<Catalog, FaroError> {
        let catalog = read_catalog_file(Path::new(source))?;
        Ok(catalog)
    }
}

/// Reads and parses one data.json document from disk.
pub fn read_catalog_file(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let source_ref = path.to_string_lossy().to_string();

    let content = fs::read_to_string(path).map_err(|e| CatalogLoadError {
        source_ref: source_ref.clone(),
        reason: e.to_string(),
    })?;

    let document: Value = serde_json::from_str(&content).map_err(|e| CatalogLoadError {
        source_ref: source_ref.clone(),
        reason: format!("not a valid JSON document ({e})"),
    })?;

    let root = document.as_object().ok_or_else(|| CatalogLoadError {
        source_ref: source_ref.clone(),
        reason: "root of a catalog document must be a JSON object".into(),
    })?;

    Ok(parse_catalog(root))
}

fn parse_catalog(root: &Map<String, Value>) -> Catalog {
    let title = str_field(root, "title");
    let identifier = {
        let id = str_field(root, "identifier");
        // Older nodes publish no catalog identifier
        if id.is_empty() { title.clone() } else { id }
    };

    let publisher = root
        .get("publisher")
        .and_then(Value::as_object)
        .map(|p| str_field(p, "name"))
        .filter(|name| !name.is_empty());

    let datasets = root
        .get("dataset")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_object)
                .map(parse_dataset)
                .collect()
        })
        .unwrap_or_default();

    Catalog {
        identifier,
        title,
        publisher,
        modified: date_field(root, "modified"),
        datasets,
    }
}

fn parse_dataset(object: &Map<String, Value>) -> Dataset {
    let distributions = object
        .get("distribution")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_object)
                .map(|dist| Distribution {
                    title: str_field(dist, "title"),
                    format: str_field(dist, "format"),
                })
                .collect()
        })
        .unwrap_or_default();

    let populated_fields = object
        .iter()
        .filter(|(_, value)| is_populated(value))
        .map(|(key, _)| key.clone())
        .collect();

    Dataset {
        identifier: str_field(object, "identifier"),
        title: str_field(object, "title"),
        accrual_periodicity: str_field(object, "accrualPeriodicity"),
        modified: date_field(object, "modified"),
        issued: date_field(object, "issued"),
        distributions,
        populated_fields,
    }
}

fn str_field(object: &Map<String, Value>, key: &str) -> String {
    object
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn date_field(object: &Map<String, Value>, key: &str) -> Option<NaiveDate> {
    object
        .get(key)
        .and_then(Value::as_str)
        .and_then(parse_date_prefix)
}

/// Parses the 'YYYY-MM-DD' prefix of a date or timestamp string.
pub fn parse_date_prefix(raw: &str) -> Option<NaiveDate> {
    let prefix = raw.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// A field counts as populated when it holds an actual value, not an empty
/// shell left behind by an exporter.
fn is_populated(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}
