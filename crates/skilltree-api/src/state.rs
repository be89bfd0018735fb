//! Application state: settings plus the built skill graph.
//!
//! The graph is built exactly once, before any command runs, and shared
//! read-only from then on.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use skilltree_core::graph::{GraphBuilder, SkillGraph};
use skilltree_infra::config::load_catalog;
use skilltree_infra::config::settings::{load_settings, Settings};

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub skills_path: PathBuf,
    pub graph: Arc<SkillGraph>,
}

impl AppState {
    /// Load settings and the skills document, then build the graph.
    ///
    /// Fails without building anything if the document cannot be read or
    /// parsed, and without exposing a graph if the build fails.
    pub fn init(config: Option<&Path>, skills: Option<&Path>) -> anyhow::Result<Self> {
        let settings = load_settings(config)?;
        let skills_path = settings.skills_path(skills);

        let catalog = load_catalog(&skills_path)
            .with_context(|| format!("Cannot load skills from {}", skills_path.display()))?;
        let graph = GraphBuilder::from_catalog(&catalog)
            .with_context(|| format!("Invalid skill graph in {}", skills_path.display()))?;

        Ok(Self {
            settings,
            skills_path,
            graph: Arc::new(graph),
        })
    }
}
