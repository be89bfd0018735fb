//! Directed, labeled edges between skill nodes.

use serde::Serialize;

use crate::path::SkillPath;

/// Label for parent -> child relationships in the skill taxonomy.
pub const HAS_SKILL: &str = "has_skill";

/// Opaque handle to an edge inside a graph store.
///
/// Handles increase monotonically with creation order. Only a store issues
/// them, so they serialize for output but are never read back from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeHandle(pub usize);

/// A directed, labeled edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub handle: EdgeHandle,
    pub from: SkillPath,
    pub to: SkillPath,
    pub label: String,
}
