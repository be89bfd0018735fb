//! Line formats consumed by the presentation layer.
//!
//! These strings are the bit-exact reporting contract:
//!
//! ```text
//! Children of 🔧 A (Love: 5):
//! - 📘 B (Love: 10)
//!
//! 🔧 A (Love: 5)
//!   - 📘 B (Love: 10)
//!
//! Skills sorted by love level (descending):
//! 📘 B (Love: 10)
//! ```

use crate::ranking::RankedSkill;
use crate::traversal::{ChildrenListing, NodeRole, TraversalStep};

pub const RANKING_HEADER: &str = "Skills sorted by love level (descending):";

const INDENT: &str = "  ";

/// `<symbol> <name> (Love: <affinity>)`
pub fn skill_line(symbol: &str, name: &str, affinity: i64) -> String {
    format!("{symbol} {name} (Love: {affinity})")
}

pub fn children_header(listing: &ChildrenListing) -> String {
    format!(
        "Children of {} {} (Love: {}):",
        listing.parent_skill.symbol,
        listing.parent.leaf_segment(),
        listing.parent_skill.affinity
    )
}

pub fn tree_header(root: &str) -> String {
    format!("{root} Tree (with love levels and icons):")
}

/// Header plus one `- ` line per direct child.
pub fn render_children(listing: &ChildrenListing) -> Vec<String> {
    std::iter::once(children_header(listing))
        .chain(listing.children.iter().map(|child| {
            format!(
                "- {}",
                skill_line(&child.skill.symbol, &child.id, child.skill.affinity)
            )
        }))
        .collect()
}

/// One line per step, two spaces of indent per depth level, leaves prefixed
/// with `- `.
pub fn render_tree(steps: &[TraversalStep]) -> Vec<String> {
    steps
        .iter()
        .map(|step| {
            let indent = INDENT.repeat(step.depth);
            let line = skill_line(&step.skill.symbol, &step.label, step.skill.affinity);
            match step.role {
                NodeRole::Leaf => format!("{indent}- {line}"),
                NodeRole::Root | NodeRole::Intermediate => format!("{indent}{line}"),
            }
        })
        .collect()
}

/// Ranking header plus one line per skill, most affine first.
pub fn render_ranking(ranked: &[RankedSkill]) -> Vec<String> {
    std::iter::once(RANKING_HEADER.to_string())
        .chain(
            ranked
                .iter()
                .map(|r| skill_line(&r.skill.symbol, &r.skill.name, r.skill.affinity)),
        )
        .collect()
}
