// faro/src/commands/validate.rs
//
// USE CASE: run the structural validator over one catalog and render the
// field-level errors.

use comfy_table::Table;
use std::path::Path;

use faro_core::infrastructure::adapters::SchemaValidator;
use faro_core::infrastructure::adapters::json_reader::read_catalog_file;
use faro_core::ports::validator::DatasetValidator;

pub fn execute(catalog: String) -> anyhow::Result<()> {
    let catalog = read_catalog_file(Path::new(&catalog))?;

    println!("\n🔍 Validating catalog '{}'", catalog.identifier);

    let validator = SchemaValidator;
    let mut table = Table::new();
    table.set_header(vec!["Dataset", "Field", "Problem"]);

    let mut invalid = 0;
    for dataset in &catalog.datasets {
        let verdict = validator.validate_dataset(dataset);
        if !verdict.valid {
            invalid += 1;
            let label = if dataset.identifier.is_empty() {
                dataset.title.as_str()
            } else {
                dataset.identifier.as_str()
            };
            for error in verdict.errors {
                table.add_row(vec![label.to_string(), error.field, error.message]);
            }
        }
    }

    let total = catalog.datasets.len();
    if invalid == 0 {
        println!("✅ All {} dataset(s) pass structural validation", total);
    } else {
        println!("{table}");
        eprintln!("❌ {} of {} dataset(s) failed validation", invalid, total);
        // Exit with error code for CI/CD
        std::process::exit(1);
    }

    Ok(())
}
