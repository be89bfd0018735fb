//! Path-addressed labeled digraph.
//!
//! Nodes live in a `petgraph::DiGraph` and are addressed through a
//! `SkillPath -> NodeIndex` map. Edge weights are the edge labels. Nothing is
//! ever removed, so node and edge indices stay stable and edge indices double
//! as creation order.

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use skilltree_types::edge::{Edge, EdgeHandle};
use skilltree_types::error::SkillGraphError;
use skilltree_types::path::SkillPath;
use skilltree_types::skill::Skill;

/// The store specialized to skill payloads.
pub type SkillGraph = GraphStore<Skill>;

#[derive(Debug, Clone)]
struct Node<P> {
    path: SkillPath,
    payload: P,
}

/// Labeled directed graph holding exactly one payload type.
///
/// `GraphStore<P>` is `Send + Sync` whenever `P` is, and every query takes
/// `&self`, so a built store can be shared behind an `Arc` with no locking.
#[derive(Debug, Clone)]
pub struct GraphStore<P> {
    graph: DiGraph<Node<P>, String>,
    index: HashMap<SkillPath, NodeIndex>,
}

impl<P> Default for GraphStore<P> {
    fn default() -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
        }
    }
}

impl<P> GraphStore<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, or overwrite the payload of an existing one.
    pub fn set_node(&mut self, path: SkillPath, payload: P) {
        match self.index.get(&path) {
            Some(&idx) => {
                self.graph[idx].payload = payload;
            }
            None => {
                let idx = self.graph.add_node(Node {
                    path: path.clone(),
                    payload,
                });
                self.index.insert(path, idx);
            }
        }
    }

    pub fn get_node(&self, path: &SkillPath) -> Result<&P, SkillGraphError> {
        let idx = self.resolve(path)?;
        Ok(&self.graph[idx].payload)
    }

    /// Create a labeled edge between two existing nodes.
    ///
    /// Idempotent per `(from, to, label)`: repeating the call returns the
    /// handle of the edge created the first time.
    pub fn set_edge(
        &mut self,
        from: &SkillPath,
        to: &SkillPath,
        label: &str,
    ) -> Result<EdgeHandle, SkillGraphError> {
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;

        let existing = self
            .graph
            .edges_connecting(source, target)
            .find(|e| e.weight() == label)
            .map(|e| e.id());
        if let Some(id) = existing {
            return Ok(EdgeHandle(id.index()));
        }

        let id = self.graph.add_edge(source, target, label.to_string());
        Ok(EdgeHandle(id.index()))
    }

    /// Outgoing edges of `path` carrying `label`, in creation order.
    ///
    /// An empty result means the node has no such edges. A missing node is
    /// reported as `NodeNotFound`, never as an empty result.
    pub fn get_edges(&self, path: &SkillPath, label: &str) -> Result<Vec<Edge>, SkillGraphError> {
        let idx = self.resolve(path)?;

        let mut ids: Vec<EdgeIndex> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .filter(|e| e.weight() == label)
            .map(|e| e.id())
            .collect();
        ids.sort();

        Ok(ids.into_iter().filter_map(|id| self.edge(id)).collect())
    }

    /// Apply `visitor` to every node until it returns `false`.
    ///
    /// Enumeration order is not part of the contract; callers that need an
    /// order must sort.
    pub fn for_each_node<F>(&self, mut visitor: F)
    where
        F: FnMut(&SkillPath, &P) -> bool,
    {
        for idx in self.graph.node_indices() {
            let node = &self.graph[idx];
            if !visitor(&node.path, &node.payload) {
                break;
            }
        }
    }

    /// Fail with `CycleDetected` if the `label` edges contain a cycle.
    ///
    /// Runs in time linear in nodes plus edges, however many paths the
    /// graph has. The reported path is one node on the cycle.
    pub fn check_acyclic(&self, label: &str) -> Result<(), SkillGraphError> {
        let labeled = self
            .graph
            .filter_map(|_, node| Some(&node.path), |_, w| (w == label).then_some(()));

        toposort(&labeled, None).map_err(|cycle| {
            let path = labeled[cycle.node_id()].clone();
            tracing::warn!(path = %path, label, "cycle detected in graph");
            SkillGraphError::CycleDetected(path)
        })?;
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn resolve(&self, path: &SkillPath) -> Result<NodeIndex, SkillGraphError> {
        self.index
            .get(path)
            .copied()
            .ok_or_else(|| SkillGraphError::NodeNotFound(path.clone()))
    }

    fn edge(&self, id: EdgeIndex) -> Option<Edge> {
        let (source, target) = self.graph.edge_endpoints(id)?;
        Some(Edge {
            handle: EdgeHandle(id.index()),
            from: self.graph[source].path.clone(),
            to: self.graph[target].path.clone(),
            label: self.graph[id].clone(),
        })
    }
}
