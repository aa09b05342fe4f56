// faro-core/src/infrastructure/adapters/schema_validator.rs
//
// Default DatasetValidator: checks the required metadata of the profile.
// This is the in-tree stand-in for the external JSON-Schema validator; the
// engine only ever consumes the pass/fail verdict.

use crate::domain::catalog::Dataset;
use crate::domain::frequency::Frequency;
use crate::ports::validator::{DatasetValidator, FieldError, ValidationVerdict};

pub struct SchemaValidator;

impl DatasetValidator for SchemaValidator {
    fn validate_dataset(&self, dataset: &Dataset) -> ValidationVerdict {
        let mut errors = Vec::new();

        if dataset.identifier.is_empty() {
            errors.push(required("identifier"));
        }
        if dataset.title.is_empty() {
            errors.push(required("title"));
        }
        if !dataset.populated_fields.contains("description") {
            errors.push(required("description"));
        }

        if dataset.accrual_periodicity.is_empty() {
            errors.push(required("accrualPeriodicity"));
        } else if Frequency::parse(&dataset.accrual_periodicity).is_err() {
            errors.push(FieldError {
                field: "accrualPeriodicity".into(),
                message: format!(
                    "'{}' is not a repeating interval or 'eventual'",
                    dataset.accrual_periodicity
                ),
            });
        }

        if dataset.distributions.is_empty() {
            errors.push(FieldError {
                field: "distribution".into(),
                message: "a dataset must publish at least one distribution".into(),
            });
        }

        if errors.is_empty() {
            ValidationVerdict::ok()
        } else {
            ValidationVerdict::failed(errors)
        }
    }
}

fn required(field: &str) -> FieldError {
    FieldError {
        field: field.into(),
        message: "missing required field".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Distribution;

    fn valid_dataset() -> Dataset {
        Dataset {
            identifier: "d1".into(),
            title: "Exportaciones".into(),
            accrual_periodicity: "R/P1M".into(),
            distributions: vec![Distribution {
                title: "csv".into(),
                format: "CSV".into(),
            }],
            populated_fields: ["identifier", "title", "description", "accrualPeriodicity"]
                .iter()
                .map(|f| f.to_string())
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_dataset_passes() {
        let verdict = SchemaValidator.validate_dataset(&valid_dataset());
        assert!(verdict.valid);
        assert!(verdict.errors.is_empty());
    }

    #[test]
    fn test_missing_required_fields_are_reported() {
        let verdict = SchemaValidator.validate_dataset(&Dataset::default());

        assert!(!verdict.valid);
        let fields: Vec<&str> = verdict.errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"identifier"));
        assert!(fields.contains(&"title"));
        assert!(fields.contains(&"description"));
        assert!(fields.contains(&"accrualPeriodicity"));
        assert!(fields.contains(&"distribution"));
    }

    #[test]
    fn test_unparseable_frequency_fails_validation() {
        let mut dataset = valid_dataset();
        dataset.accrual_periodicity = "mensual".into();

        let verdict = SchemaValidator.validate_dataset(&dataset);
        assert!(!verdict.valid);
        assert_eq!(verdict.errors.len(), 1);
        assert_eq!(verdict.errors[0].field, "accrualPeriodicity");
    }
}
