//! `skilltree check`: validate a skills document end to end.

use std::collections::HashSet;

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;

use skilltree_core::graph::SkillGraph;
use skilltree_types::edge::HAS_SKILL;

use crate::state::AppState;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CheckSummary {
    pub nodes: usize,
    pub edges: usize,
    pub leaves: usize,
    pub roots: usize,
}

/// Reject any `has_skill` cycle and count the document's shape.
///
/// Roots are nodes that no other node lists as a child; leaves are nodes
/// with no outgoing `has_skill` edges.
pub fn summarize(graph: &SkillGraph) -> Result<CheckSummary> {
    graph
        .check_acyclic(HAS_SKILL)
        .context("Skills document contains a cycle")?;

    let mut paths = Vec::with_capacity(graph.node_count());
    let mut listed_as_child = HashSet::new();
    graph.for_each_node(|path, skill| {
        paths.push(path.clone());
        listed_as_child.extend(skill.children.iter().cloned());
        true
    });

    let mut leaves = 0;
    for path in &paths {
        if graph.get_edges(path, HAS_SKILL)?.is_empty() {
            leaves += 1;
        }
    }

    let roots = paths
        .iter()
        .filter(|p| !listed_as_child.contains(p.leaf_segment()))
        .count();

    Ok(CheckSummary {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        leaves,
        roots,
    })
}

pub fn check(state: &AppState, json: bool) -> Result<()> {
    let summary = summarize(&state.graph)?;
    tracing::info!(?summary, "skills document is valid");

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {} is valid",
        style("✓").green().bold(),
        style(state.skills_path.display()).cyan()
    );
    println!();
    println!("  Skills:  {}", summary.nodes);
    println!("  Edges:   {} ({HAS_SKILL})", summary.edges);
    println!("  Leaves:  {}", summary.leaves);
    println!("  Roots:   {}", summary.roots);
    println!();
    Ok(())
}
