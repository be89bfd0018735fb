//! Hierarchical node keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hierarchical key uniquely identifying a node in the graph.
///
/// Skill names map to single-segment paths. Segments are kept verbatim, so a
/// skill named `CI/CD` is one segment, not two.
///
/// Ordering is lexicographic over segments, which ranking relies on as its
/// tie-break key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillPath(Vec<String>);

impl SkillPath {
    /// Build a path from its segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Single-segment path for a skill name.
    pub fn single(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// The final segment, which is the skill identifier for single-segment paths.
    pub fn leaf_segment(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or_default()
    }

    /// True when the path has no segments or any segment is empty.
    pub fn is_malformed(&self) -> bool {
        self.0.is_empty() || self.0.iter().any(String::is_empty)
    }
}

impl fmt::Display for SkillPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" / "))
    }
}

impl From<&str> for SkillPath {
    fn from(name: &str) -> Self {
        Self::single(name)
    }
}

impl From<String> for SkillPath {
    fn from(name: String) -> Self {
        Self::single(name)
    }
}
