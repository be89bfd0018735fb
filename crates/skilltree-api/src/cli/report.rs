//! `skilltree report`: the configured end-to-end report.
//!
//! Prints, in order, the direct-children sections, the deep traversal
//! sections and the ranking. A failing section (unknown skill, cycle) is
//! dropped and reported on stderr; the others still print and the command
//! exits non-zero afterwards.

use anyhow::{bail, Result};
use console::style;
use serde::Serialize;

use skilltree_core::graph::SkillGraph;
use skilltree_core::ranking::{RankedSkill, RankingEngine};
use skilltree_core::report::{render_children, render_ranking, render_tree, tree_header};
use skilltree_core::traversal::{ChildrenListing, TraversalEngine, TraversalStep};
use skilltree_infra::config::settings::ReportSettings;
use skilltree_types::path::SkillPath;

use crate::cli::query::print_lines;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Children { listing: ChildrenListing },
    Tree { root: String, steps: Vec<TraversalStep> },
    Ranking { skills: Vec<RankedSkill> },
}

#[derive(Debug, Serialize)]
pub struct SectionFailure {
    pub section: &'static str,
    pub target: String,
    pub error: String,
}

#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub sections: Vec<Section>,
    pub failures: Vec<SectionFailure>,
}

impl Report {
    fn fail(&mut self, section: &'static str, target: &str, error: impl ToString) {
        let error = error.to_string();
        tracing::error!(section, skill = target, %error, "report section aborted");
        self.failures.push(SectionFailure {
            section,
            target: target.to_string(),
            error,
        });
    }

    /// Report lines with a blank line between sections.
    pub fn render_text(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            match section {
                Section::Children { listing } => lines.extend(render_children(listing)),
                Section::Tree { root, steps } => {
                    lines.push(tree_header(root));
                    lines.extend(render_tree(steps));
                }
                Section::Ranking { skills } => lines.extend(render_ranking(skills)),
            }
        }
        lines
    }
}

pub fn build_report(graph: &SkillGraph, settings: &ReportSettings) -> Report {
    let traversal = TraversalEngine::new(graph);
    let mut report = Report::default();

    for name in &settings.children_of {
        match traversal.children_of(&SkillPath::single(name.as_str())) {
            Ok(listing) => report.sections.push(Section::Children { listing }),
            Err(e) => report.fail("children", name, e),
        }
    }

    for root in &settings.tree_roots {
        match traversal.collect(&SkillPath::single(root.as_str()), 0) {
            Ok(steps) => report.sections.push(Section::Tree {
                root: root.clone(),
                steps,
            }),
            Err(e) => report.fail("tree", root, e),
        }
    }

    let ranking = RankingEngine::new(graph);
    let skills = match settings.rank_limit {
        Some(n) => ranking.top(n),
        None => ranking.rank(),
    };
    report.sections.push(Section::Ranking { skills });

    report
}

pub fn report(state: &AppState, json: bool) -> Result<()> {
    let report = build_report(&state.graph, &state.settings.report);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_lines(&report.render_text());
    }

    if !report.failures.is_empty() {
        for failure in &report.failures {
            eprintln!(
                "  {} {} '{}': {}",
                style("✗").red(),
                failure.section,
                failure.target,
                failure.error
            );
        }
        bail!("{} report section(s) aborted", report.failures.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skilltree_core::graph::GraphBuilder;
    use skilltree_types::skill::{Skill, SkillCatalog};

    fn skills_graph() -> SkillGraph {
        let mut catalog = SkillCatalog::new();
        catalog.insert(
            "Technology Skills",
            Skill::new("Technology Skills", 8, "🧠")
                .with_children(["Software Engineering", "Programming Languages"]),
        );
        catalog.insert(
            "Software Engineering",
            Skill::new("Software Engineering", 7, "🛠️").with_children(["Testing"]),
        );
        catalog.insert("Testing", Skill::new("Testing", 6, "🧪"));
        catalog.insert(
            "Programming Languages",
            Skill::new("Programming Languages", 9, "💻").with_children(["Systems", "Python"]),
        );
        catalog.insert("Systems", Skill::new("Systems", 7, "⚙️").with_children(["Rust"]));
        catalog.insert("Rust", Skill::new("Rust", 10, "🦀"));
        catalog.insert("Python", Skill::new("Python", 6, "🐍"));
        GraphBuilder::from_catalog(&catalog).unwrap()
    }

    #[test]
    fn test_default_report_layout() {
        let graph = skills_graph();
        let report = build_report(&graph, &ReportSettings::default());
        assert!(report.failures.is_empty());

        let expected = vec![
            "Children of 🛠️ Software Engineering (Love: 7):",
            "- 🧪 Testing (Love: 6)",
            "",
            "Children of 🧠 Technology Skills (Love: 8):",
            "- 🛠️ Software Engineering (Love: 7)",
            "- 💻 Programming Languages (Love: 9)",
            "",
            "Programming Languages Tree (with love levels and icons):",
            "💻 Programming Languages (Love: 9)",
            "  ⚙️ Systems (Love: 7)",
            "    - 🦀 Rust (Love: 10)",
            "  - 🐍 Python (Love: 6)",
            "",
            "Skills sorted by love level (descending):",
            "🦀 Rust (Love: 10)",
            "💻 Programming Languages (Love: 9)",
            "🧠 Technology Skills (Love: 8)",
            "🛠️ Software Engineering (Love: 7)",
            "⚙️ Systems (Love: 7)",
            "🐍 Python (Love: 6)",
            "🧪 Testing (Love: 6)",
        ];
        assert_eq!(report.render_text(), expected);
    }

    #[test]
    fn test_cycle_aborts_only_that_tree() {
        let mut catalog = SkillCatalog::new();
        catalog.insert("A", Skill::new("A", 1, "a").with_children(["B"]));
        catalog.insert("B", Skill::new("B", 2, "b").with_children(["A"]));
        catalog.insert("C", Skill::new("C", 3, "c").with_children(["D"]));
        catalog.insert("D", Skill::new("D", 4, "d"));
        let graph = GraphBuilder::from_catalog(&catalog).unwrap();

        let settings = ReportSettings {
            children_of: vec![],
            tree_roots: vec!["A".to_string(), "C".to_string()],
            rank_limit: Some(2),
        };
        let report = build_report(&graph, &settings);

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].section, "tree");
        assert_eq!(report.failures[0].target, "A");
        assert!(report.failures[0].error.contains("cycle detected"));

        assert_eq!(
            report.render_text(),
            vec![
                "C Tree (with love levels and icons):",
                "c C (Love: 3)",
                "  - d D (Love: 4)",
                "",
                "Skills sorted by love level (descending):",
                "d D (Love: 4)",
                "c C (Love: 3)",
            ]
        );
    }

    #[test]
    fn test_unknown_children_target_is_a_failure() {
        let graph = skills_graph();
        let settings = ReportSettings {
            children_of: vec!["Underwater Basket Weaving".to_string()],
            tree_roots: vec![],
            rank_limit: Some(1),
        };
        let report = build_report(&graph, &settings);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].error.contains("node not found"));
        assert_eq!(report.sections.len(), 1);
    }

    #[test]
    fn test_json_sections_are_tagged() {
        let graph = skills_graph();
        let settings = ReportSettings {
            children_of: vec![],
            tree_roots: vec![],
            rank_limit: Some(1),
        };
        let report = build_report(&graph, &settings);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["sections"][0]["kind"], "ranking");
        assert_eq!(value["sections"][0]["skills"][0]["name"], "Rust");
        assert_eq!(value["sections"][0]["skills"][0]["love"], 10);
    }
}
