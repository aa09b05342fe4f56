// faro-core/src/domain/federation.rs
//
// Federation matcher: a dataset is "federado" when the central catalog of
// the network contains a dataset with the same identifier. Matching is by
// identifier equality only, not deep content equality.

use crate::domain::catalog::Catalog;
use crate::domain::indicators::{FederationIndicators, percentage};
use std::collections::HashSet;

pub fn federation_indicators(catalog: &Catalog, central: &Catalog) -> FederationIndicators {
    let central_ids: HashSet<&str> = central
        .datasets
        .iter()
        .map(|dataset| dataset.identifier.as_str())
        .collect();

    let federados = catalog
        .datasets
        .iter()
        .filter(|dataset| central_ids.contains(dataset.identifier.as_str()))
        .count() as u64;

    let total = catalog.datasets.len() as u64;

    FederationIndicators {
        datasets_federados_cant: federados,
        datasets_no_federados_cant: total - federados,
        datasets_federados_pct: percentage(federados, total),
    }
}
