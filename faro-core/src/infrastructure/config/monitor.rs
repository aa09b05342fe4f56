// faro-core/src/infrastructure/config/monitor.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::domain::harvest::HarvestCriterion;
use crate::infrastructure::error::InfrastructureError;

/// Tool configuration (`faro.yaml`). Everything has a default so the CLI
/// also works from flags alone.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct MonitorConfig {
    /// Central catalog of the network, used for federation indicators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub central_catalog: Option<String>,

    /// Extra slack on the freshness window, as a fraction of the declared
    /// interval (0.2 widens a 30-day window to 36 days). 0 keeps it exact.
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1.0, message = "update_grace must be within [0, 1]"))]
    pub update_grace: f64,

    /// Default criterion for `faro harvest` when none is passed.
    #[serde(default)]
    pub harvest_criterion: HarvestCriterion,
}

// --- LOADER ---

#[instrument(skip(project_dir))]
pub fn load_monitor_config(project_dir: &Path) -> Result<MonitorConfig, InfrastructureError> {
    let Some(config_path) = find_config_file(project_dir) else {
        debug!("No faro.yaml found, falling back to defaults");
        return Ok(MonitorConfig::default());
    };
    info!(path = ?config_path, "Loading monitor configuration");

    let content = fs::read_to_string(&config_path)?;
    let mut config: MonitorConfig = serde_yaml::from_str(&content)?;

    // Override via environment (pattern 'layering'):
    // FARO_CENTRAL_CATALOG=... faro indicators ...
    apply_env_overrides(&mut config);

    config
        .validate()
        .map_err(|e| InfrastructureError::ConfigError(e.to_string()))?;

    Ok(config)
}

fn find_config_file(root: &Path) -> Option<PathBuf> {
    let candidates = ["faro.yaml", "faro.yml"];
    candidates
        .iter()
        .map(|filename| root.join(filename))
        .find(|p| p.exists())
}

fn apply_env_overrides(config: &mut MonitorConfig) {
    if let Ok(val) = std::env::var("FARO_CENTRAL_CATALOG") {
        info!(old = ?config.central_catalog, new = ?val, "Overriding central catalog via ENV");
        config.central_catalog = Some(val);
    }
    if let Ok(val) = std::env::var("FARO_UPDATE_GRACE") {
        match val.parse::<f64>() {
            Ok(grace) => {
                info!(old = config.update_grace, new = grace, "Overriding update grace via ENV");
                config.update_grace = grace;
            }
            Err(_) => warn!(value = %val, "Ignoring unparseable FARO_UPDATE_GRACE"),
        }
    }
}
