//! Application settings (`skilltree.toml`).
//!
//! Settings choose which skills document to load and which sections the
//! full report prints. Every field has a default, so the file is optional.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Name of the settings file inside the config directory.
pub const SETTINGS_FILE: &str = "skilltree.toml";

/// Skills document used when neither the CLI nor the settings name one.
pub const DEFAULT_SKILLS_FILE: &str = "skills_tree.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path to the skills document. Relative paths resolve against the
    /// working directory.
    pub skills_file: Option<PathBuf>,
    pub report: ReportSettings,
}

/// Sections printed by `skilltree report`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Skills whose direct children are listed.
    pub children_of: Vec<String>,
    /// Roots of the deep traversals.
    pub tree_roots: Vec<String>,
    /// Cap on the ranking length; unlimited when absent.
    pub rank_limit: Option<usize>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            children_of: vec![
                "Software Engineering".to_string(),
                "Technology Skills".to_string(),
            ],
            tree_roots: vec!["Programming Languages".to_string()],
            rank_limit: None,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Failed to parse settings TOML")
    }

    /// Skills document path: CLI override, then settings, then the default.
    pub fn skills_path(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.skills_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SKILLS_FILE))
    }
}

/// Load settings.
///
/// With an explicit `path` the file must exist. Without one, the default
/// location is tried and a missing file yields `Settings::default()`.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (resolve_config_dir().join(SETTINGS_FILE), false),
    };

    if !required && !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
    let settings = Settings::from_toml(&content)
        .with_context(|| format!("Invalid settings file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Resolve the config directory from environment or platform defaults.
///
/// Priority:
/// 1. `SKILLTREE_HOME` environment variable
/// 2. `~/.skilltree`
/// 3. `./.skilltree`
pub fn resolve_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SKILLTREE_HOME") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".skilltree");
    }

    PathBuf::from(".skilltree")
}
