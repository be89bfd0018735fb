//! Populates a `SkillGraph` from a configuration snapshot.
//!
//! Two passes: every catalog entry becomes a node first, then every
//! Children identifier becomes a `has_skill` edge. Doing nodes first makes
//! the order of catalog entries irrelevant, so any edge that still fails
//! must point at a skill the catalog never defines.

use skilltree_types::edge::HAS_SKILL;
use skilltree_types::error::SkillGraphError;
use skilltree_types::path::SkillPath;
use skilltree_types::skill::SkillCatalog;

use super::store::SkillGraph;

/// Builds a `SkillGraph` from a `SkillCatalog`.
///
/// `from_catalog` is the only way in. The builder is consumed by ingestion,
/// so on any error the half-built store is dropped and never reaches the
/// caller.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: SkillGraph,
}

impl GraphBuilder {
    /// Build a graph from `catalog` in one call.
    pub fn from_catalog(catalog: &SkillCatalog) -> Result<SkillGraph, SkillGraphError> {
        Self::default().ingest(catalog)
    }

    /// Add every node and edge described by `catalog` and hand over the store.
    fn ingest(mut self, catalog: &SkillCatalog) -> Result<SkillGraph, SkillGraphError> {
        for (key, skill) in catalog.iter() {
            let path = SkillPath::single(key.as_str());
            if path.is_malformed() {
                return Err(SkillGraphError::MalformedConfiguration(
                    "skill keys must not be empty".to_string(),
                ));
            }
            tracing::debug!(skill = %key, love = skill.affinity, "adding skill node");
            self.graph.set_node(path, skill.clone());
        }

        for (key, skill) in catalog.iter() {
            let parent = SkillPath::single(key.as_str());
            for child in skill.child_paths() {
                self.graph
                    .set_edge(&parent, &child, HAS_SKILL)
                    .map_err(|e| match e {
                        SkillGraphError::NodeNotFound(missing) => {
                            SkillGraphError::DanglingReference {
                                parent: key.clone(),
                                child: missing.leaf_segment().to_string(),
                            }
                        }
                        other => other,
                    })?;
            }
        }

        Ok(self.build())
    }

    fn build(self) -> SkillGraph {
        tracing::info!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "skill graph built"
        );
        self.graph
    }
}
