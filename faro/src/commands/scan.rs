// faro/src/commands/scan.rs
//
// USE CASE: discover catalog documents under the data directory and refresh
// the node registry (catalogs.yaml).

use std::path::PathBuf;

use faro_core::infrastructure::discovery::{discover_catalogs, save_catalog_list};

pub fn execute(project_dir: PathBuf, data_dir: String) -> anyhow::Result<()> {
    println!(
        "🕵️‍♀️  Scanning for catalogs in '{}/{}'...",
        project_dir.display(),
        data_dir
    );

    let list = discover_catalogs(&project_dir, &data_dir)?;

    println!("📝 Found {} catalog(s).", list.catalogs.len());

    save_catalog_list(&project_dir, &list)?;

    println!("✨ catalogs.yaml updated successfully!");
    Ok(())
}
