//! Injector configuration loader.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::models::ScriptPlacement;

const DEFAULT_CONFIG_FILE: &str = "requirements.config.json";

/// Configuration applied to a [`crate::RequirementsInjector`] at construction.
///
/// Modelled as an explicit value rather than ambient process state so that each
/// request-scoped injector carries its own immutable copy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InjectorConfig {
    /// Emit literal head tags before generated link and style tags.
    pub custom_tags_first: bool,
    /// Placement policy for generated script tags.
    pub script_placement: ScriptPlacement,
    /// Folder receiving combined bundle artifacts, relative to the asset root.
    /// `None` disables combined-file cleanup.
    pub combined_files_folder: Option<String>,
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self {
            custom_tags_first: false,
            script_placement: ScriptPlacement::Head,
            combined_files_folder: Some("_combinedfiles".into()),
        }
    }
}

impl InjectorConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall back to
    /// default values so hosts without a config file keep working.
    pub fn discover(project_dir: &Path) -> Self {
        let candidate = project_dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }
}
