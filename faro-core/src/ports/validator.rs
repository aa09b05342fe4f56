// faro-core/src/ports/validator.rs

use crate::domain::catalog::Dataset;

// Struct simple pour décrire une erreur de champ (indépendant du validateur)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Pass/fail verdict plus field-level detail. The indicator calculator only
/// consumes `valid`; the field errors feed user-facing reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationVerdict {
    pub valid: bool,
    pub errors: Vec<FieldError>,
}

impl ValidationVerdict {
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    pub fn failed(errors: Vec<FieldError>) -> Self {
        Self {
            valid: false,
            errors,
        }
    }
}

pub trait DatasetValidator: Send + Sync {
    fn validate_dataset(&self, dataset: &Dataset) -> ValidationVerdict;
}
