//! Global ranking of skills by affinity.

use std::cmp::Ordering;

use serde::Serialize;

use skilltree_types::path::SkillPath;
use skilltree_types::skill::Skill;

use crate::graph::SkillGraph;

/// A skill and its 1-based position in the ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSkill {
    pub rank: usize,
    pub path: SkillPath,
    #[serde(flatten)]
    pub skill: Skill,
}

pub struct RankingEngine<'g> {
    graph: &'g SkillGraph,
}

impl<'g> RankingEngine<'g> {
    pub fn new(graph: &'g SkillGraph) -> Self {
        Self { graph }
    }

    /// Every node, highest affinity first.
    ///
    /// Equal affinities are ordered by ascending path, so the result never
    /// depends on the store's enumeration order.
    pub fn rank(&self) -> Vec<RankedSkill> {
        let mut entries: Vec<(SkillPath, Skill)> = Vec::with_capacity(self.graph.node_count());
        self.graph.for_each_node(|path, skill| {
            entries.push((path.clone(), skill.clone()));
            true
        });

        entries.sort_by(|(path_a, a), (path_b, b)| by_affinity_desc(a, path_a, b, path_b));

        entries
            .into_iter()
            .enumerate()
            .map(|(i, (path, skill))| RankedSkill {
                rank: i + 1,
                path,
                skill,
            })
            .collect()
    }

    /// The `limit` highest ranked skills.
    pub fn top(&self, limit: usize) -> Vec<RankedSkill> {
        let mut ranked = self.rank();
        ranked.truncate(limit);
        ranked
    }
}

fn by_affinity_desc(a: &Skill, path_a: &SkillPath, b: &Skill, path_b: &SkillPath) -> Ordering {
    b.affinity
        .cmp(&a.affinity)
        .then_with(|| path_a.cmp(path_b))
}
