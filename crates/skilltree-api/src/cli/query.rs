//! Single-query commands: children, tree, rank, show.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use skilltree_core::ranking::RankingEngine;
use skilltree_core::report::{render_children, render_ranking, render_tree};
use skilltree_core::traversal::TraversalEngine;
use skilltree_types::edge::HAS_SKILL;
use skilltree_types::path::SkillPath;

use crate::state::AppState;

pub fn children(state: &AppState, name: &str, json: bool) -> Result<()> {
    let listing = TraversalEngine::new(&state.graph).children_of(&SkillPath::single(name))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        print_lines(&render_children(&listing));
    }
    Ok(())
}

pub fn tree(state: &AppState, root: &str, json: bool) -> Result<()> {
    let steps = TraversalEngine::new(&state.graph).collect(&SkillPath::single(root), 0)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
    } else {
        print_lines(&render_tree(&steps));
    }
    Ok(())
}

pub fn rank(state: &AppState, limit: Option<usize>, json: bool) -> Result<()> {
    let engine = RankingEngine::new(&state.graph);
    let ranked = match limit {
        Some(n) => engine.top(n),
        None => engine.rank(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        print_lines(&render_ranking(&ranked));
    }
    Ok(())
}

pub fn show(state: &AppState, name: &str, json: bool) -> Result<()> {
    let path = SkillPath::single(name);
    let skill = state.graph.get_node(&path)?;
    let edges = state.graph.get_edges(&path, HAS_SKILL)?;
    let leaf = edges.is_empty();

    if json {
        let out = serde_json::json!({
            "path": path,
            "skill": skill,
            "edges": edges,
            "leaf": leaf,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {} {}",
        skill.symbol,
        style(&skill.name).cyan().bold(),
        style(format!("(key: {name})")).dim()
    );
    println!();

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new("Field").fg(Color::Cyan), Cell::new("Value")]);

    table.add_row(vec![Cell::new("Love"), Cell::new(skill.affinity)]);
    table.add_row(vec![
        Cell::new("Children"),
        Cell::new(if skill.children.is_empty() {
            "-".to_string()
        } else {
            skill.children.join(", ")
        }),
    ]);
    table.add_row(vec![Cell::new(format!("Edges ({HAS_SKILL})")), Cell::new(edges.len())]);
    table.add_row(vec![
        Cell::new("Kind"),
        if leaf {
            Cell::new("leaf").fg(Color::Green)
        } else {
            Cell::new("intermediate").fg(Color::Yellow)
        },
    ]);

    println!("{table}");
    println!();
    Ok(())
}

pub(crate) fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
