//! Depth-first traversal over the Children display order.
//!
//! Leaf detection uses edge out-degree (`has_skill` edges), while recursion
//! follows the payload's Children list. Paths currently on the recursion
//! stack are tracked so a cyclic configuration ends in `CycleDetected`
//! instead of unbounded recursion. The walk keeps its own frame stack on
//! the heap, so deep configurations never grow the native stack.

use std::collections::HashSet;

use serde::Serialize;

use skilltree_types::edge::HAS_SKILL;
use skilltree_types::error::SkillGraphError;
use skilltree_types::path::SkillPath;
use skilltree_types::skill::Skill;

use crate::graph::SkillGraph;

/// How a visited node was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    Root,
    Intermediate,
    Leaf,
}

/// One visited node of a deep traversal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraversalStep {
    pub depth: usize,
    pub role: NodeRole,
    pub path: SkillPath,
    /// Payload name for root and intermediate nodes, the child identifier
    /// for leaves.
    pub label: String,
    #[serde(flatten)]
    pub skill: Skill,
}

/// A direct child as listed by its parent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChildEntry {
    /// Identifier as written in the parent's Children list.
    pub id: String,
    #[serde(flatten)]
    pub skill: Skill,
}

/// Result of a shallow `children_of` query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChildrenListing {
    pub parent: SkillPath,
    #[serde(rename = "skill")]
    pub parent_skill: Skill,
    pub children: Vec<ChildEntry>,
}

/// Read-only traversals over a built `SkillGraph`.
pub struct TraversalEngine<'g> {
    graph: &'g SkillGraph,
}

impl<'g> TraversalEngine<'g> {
    pub fn new(graph: &'g SkillGraph) -> Self {
        Self { graph }
    }

    /// A node is a leaf when it has no outgoing `has_skill` edges.
    pub fn is_leaf(&self, path: &SkillPath) -> Result<bool, SkillGraphError> {
        Ok(self.graph.get_edges(path, HAS_SKILL)?.is_empty())
    }

    /// Direct children of `path`, in stored Children order. No recursion.
    pub fn children_of(&self, path: &SkillPath) -> Result<ChildrenListing, SkillGraphError> {
        let parent_skill = self.graph.get_node(path)?;

        let children = parent_skill
            .children
            .iter()
            .map(|id| {
                let skill = self.graph.get_node(&SkillPath::single(id.as_str()))?;
                Ok(ChildEntry {
                    id: id.clone(),
                    skill: skill.clone(),
                })
            })
            .collect::<Result<Vec<_>, SkillGraphError>>()?;

        Ok(ChildrenListing {
            parent: path.clone(),
            parent_skill: parent_skill.clone(),
            children,
        })
    }

    /// Walk from `root`, calling `visit` for every node in display order.
    ///
    /// Steps emitted before a `CycleDetected` error have already been passed
    /// to `visit`; use [`TraversalEngine::collect`] to get all-or-nothing
    /// output.
    pub fn walk<F>(&self, root: &SkillPath, depth: usize, mut visit: F) -> Result<(), SkillGraphError>
    where
        F: FnMut(TraversalStep),
    {
        let mut on_stack = HashSet::new();
        let mut stack = vec![self.enter(root, depth, NodeRole::Root, &mut on_stack, &mut visit)?];

        while let Some(frame) = stack.last_mut() {
            let skill: &'g Skill = frame.skill;
            let index = frame.next_child;
            let child_depth = frame.depth + 1;
            frame.next_child += 1;

            let Some(child) = skill.children.get(index) else {
                if let Some(done) = stack.pop() {
                    on_stack.remove(&done.path);
                }
                continue;
            };

            let child_path = SkillPath::single(child.as_str());
            if self.is_leaf(&child_path)? {
                let child_skill = self.graph.get_node(&child_path)?;
                visit(TraversalStep {
                    depth: child_depth,
                    role: NodeRole::Leaf,
                    path: child_path,
                    label: child.clone(),
                    skill: child_skill.clone(),
                });
            } else {
                let next = self.enter(
                    &child_path,
                    child_depth,
                    NodeRole::Intermediate,
                    &mut on_stack,
                    &mut visit,
                )?;
                stack.push(next);
            }
        }

        Ok(())
    }

    /// Walk from `root` and return every step, or the first error.
    pub fn collect(&self, root: &SkillPath, depth: usize) -> Result<Vec<TraversalStep>, SkillGraphError> {
        let mut steps = Vec::new();
        self.walk(root, depth, |step| steps.push(step))?;
        Ok(steps)
    }

    /// Emit a root or intermediate node and open its frame.
    fn enter<F>(
        &self,
        path: &SkillPath,
        depth: usize,
        role: NodeRole,
        on_stack: &mut HashSet<SkillPath>,
        visit: &mut F,
    ) -> Result<Frame<'g>, SkillGraphError>
    where
        F: FnMut(TraversalStep),
    {
        let skill = self.graph.get_node(path)?;

        if !on_stack.insert(path.clone()) {
            tracing::warn!(path = %path, "cycle detected during traversal");
            return Err(SkillGraphError::CycleDetected(path.clone()));
        }

        visit(TraversalStep {
            depth,
            role,
            path: path.clone(),
            label: skill.name.clone(),
            skill: skill.clone(),
        });

        Ok(Frame {
            path: path.clone(),
            depth,
            skill,
            next_child: 0,
        })
    }
}

/// A node whose children are still being visited.
struct Frame<'g> {
    path: SkillPath,
    depth: usize,
    skill: &'g Skill,
    next_child: usize,
}
