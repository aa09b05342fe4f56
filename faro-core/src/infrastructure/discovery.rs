// faro-core/src/infrastructure/discovery.rs
//
// Scans a data directory for catalog documents and maintains the node
// registry file (catalogs.yaml) that the monitoring commands consume.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use walkdir::WalkDir;

use crate::infrastructure::error::InfrastructureError;

const CATALOG_EXTENSION: &str = "json";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CatalogRef {
    pub name: String,
    pub path: String, // relative path, e.g. "data/justicia/data.json"
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CatalogList {
    pub catalogs: Vec<CatalogRef>,
}

pub fn discover_catalogs(
    project_dir: &Path,
    data_dir_rel: &str,
) -> Result<CatalogList, InfrastructureError> {
    let data_dir = project_dir.join(data_dir_rel);
    if !data_dir.exists() {
        return Err(InfrastructureError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Data directory {:?} does not exist", data_dir),
        )));
    }

    // 1. Scan du disque
    let mut found_files = Vec::new();
    let walker = WalkDir::new(&data_dir).follow_links(true);
    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.is_file()
            && path.extension().and_then(|s| s.to_str()) == Some(CATALOG_EXTENSION)
        {
            found_files.push(path.to_path_buf());
        }
    }

    // 2. Stable naming, with a counter on collisions
    let mut seen_names: HashSet<String> = HashSet::new();
    let mut catalogs = Vec::new();
    for path in found_files {
        let rel_path = path
            .strip_prefix(project_dir)
            .map_err(|_| {
                InfrastructureError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "Path prefix error",
                ))
            })?
            .to_string_lossy()
            .to_string();

        let suggested_name = derive_stable_name(&path, &data_dir);
        let mut final_name = suggested_name.clone();
        let mut i = 1;
        while seen_names.contains(&final_name) {
            final_name = format!("{}_{}", suggested_name, i);
            i += 1;
        }
        seen_names.insert(final_name.clone());

        println!("   ✨ Found catalog: {} -> {}", rel_path, final_name);

        catalogs.push(CatalogRef {
            name: final_name,
            path: rel_path,
        });
    }

    catalogs.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(CatalogList { catalogs })
}

fn derive_stable_name(path: &Path, base_data_dir: &Path) -> String {
    let stem = path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let parent = match path.parent() {
        Some(p) => p,
        None => return stem,
    };

    if parent == base_data_dir {
        return stem;
    }

    // Nested catalogs ("data/justicia/data.json") get the node directory
    // as a prefix so names stay unique and meaningful.
    let node = parent
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    format!("{}_{}", node, stem)
}

pub fn save_catalog_list(
    project_dir: &Path,
    list: &CatalogList,
) -> Result<(), InfrastructureError> {
    let list_path = project_dir.join("catalogs.yaml");
    let content = serde_yaml::to_string(list)?;
    crate::infrastructure::fs::atomic_write(&list_path, content)?;
    Ok(())
}
