// faro-core/src/application/harvest.rs
//
// Harvest selection use case: resolves the caller configuration into a
// tagged policy and produces the ordered (catalog, dataset) selection the
// downstream harvester consumes. Output order follows input order; on a
// duplicate pair the first occurrence wins.

use std::collections::HashSet;

use crate::domain::catalog::Catalog;
use crate::domain::harvest::{
    HarvestCriterion, HarvestEntry, HarvestPolicy, HarvestReport, HarvestSelection,
    HarvestSelectorConfig, InvalidHarvestModeError,
};
use crate::ports::validator::DatasetValidator;

pub fn generate_harvest_selection(
    config: HarvestSelectorConfig,
    validator: &dyn DatasetValidator,
) -> Result<HarvestSelection, InvalidHarvestModeError> {
    let policy = HarvestPolicy::try_from(config)?;

    let selection = match policy {
        HarvestPolicy::Catalogs {
            catalogs,
            criterion,
        } => select_from_catalogs(&catalogs, criterion, validator),
        HarvestPolicy::FromReport(report) => select_from_report(&report),
    };

    Ok(selection)
}

fn select_from_catalogs(
    catalogs: &[Catalog],
    criterion: HarvestCriterion,
    validator: &dyn DatasetValidator,
) -> HarvestSelection {
    let mut selection = SelectionBuilder::default();

    for catalog in catalogs {
        for dataset in &catalog.datasets {
            let eligible = match criterion {
                HarvestCriterion::All => true,
                HarvestCriterion::Valid => validator.validate_dataset(dataset).valid,
                HarvestCriterion::None => false,
            };
            if eligible {
                selection.push(catalog.identifier.clone(), dataset.identifier.clone());
            }
        }
    }

    selection.finish()
}

fn select_from_report(report: &HarvestReport) -> HarvestSelection {
    let mut selection = SelectionBuilder::default();
    for entry in &report.entries {
        if entry.harvest {
            selection.push(entry.catalog.clone(), entry.dataset.clone());
        }
    }
    selection.finish()
}

/// Accumulates entries in order, dropping duplicate pairs.
#[derive(Default)]
struct SelectionBuilder {
    seen: HashSet<HarvestEntry>,
    entries: Vec<HarvestEntry>,
}

impl SelectionBuilder {
    fn push(&mut self, catalog: String, dataset: String) {
        let entry = HarvestEntry { catalog, dataset };
        if self.seen.insert(entry.clone()) {
            self.entries.push(entry);
        }
    }

    fn finish(self) -> HarvestSelection {
        HarvestSelection {
            entries: self.entries,
        }
    }
}
