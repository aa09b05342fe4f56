// faro-core/src/domain/catalog/fields.rs
//
// Fixed field sets of the metadata profile, used for completeness scoring.
// Required fields are enforced by the structural validator, not scored here.

use std::collections::BTreeSet;

/// Dataset-level fields the profile recommends publishers to fill.
pub const RECOMMENDED_DATASET_FIELDS: [&str; 8] = [
    "theme",
    "keyword",
    "contactPoint",
    "license",
    "modified",
    "language",
    "temporal",
    "landingPage",
];

/// Dataset-level fields the profile treats as optional.
pub const OPTIONAL_DATASET_FIELDS: [&str; 4] = ["spatial", "version", "source", "rights"];

/// Fraction (0.0..=1.0) of `field_set` present in `populated`.
pub fn completeness_fraction(populated: &BTreeSet<String>, field_set: &[&str]) -> f64 {
    if field_set.is_empty() {
        return 0.0;
    }
    let hits = field_set
        .iter()
        .filter(|field| populated.contains(**field))
        .count();
    hits as f64 / field_set.len() as f64
}
