//! Skill payload and configuration catalog types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::path::SkillPath;

/// Payload attached to every node in the skill graph.
///
/// Field names on the wire follow the configuration document: `love` is the
/// affinity score and `icon` the display symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Display order of direct children, as written in the configuration.
    #[serde(default)]
    pub children: Vec<String>,
    #[serde(rename = "love")]
    pub affinity: i64,
    #[serde(rename = "icon")]
    pub symbol: String,
}

impl Skill {
    pub fn new(name: impl Into<String>, affinity: i64, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            affinity,
            symbol: symbol.into(),
        }
    }

    /// Builder-style helper to set the children list.
    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    /// Paths of the direct children, in display order.
    pub fn child_paths(&self) -> impl Iterator<Item = SkillPath> + '_ {
        self.children.iter().map(|c| SkillPath::single(c.as_str()))
    }
}

/// The configuration snapshot: skill key -> skill definition.
///
/// Backed by a `BTreeMap` so iteration is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillCatalog(BTreeMap<String, Skill>);

impl SkillCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, skill: Skill) -> Option<Skill> {
        self.0.insert(key.into(), skill)
    }

    pub fn get(&self, key: &str) -> Option<&Skill> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Skill)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Skill)> for SkillCatalog {
    fn from_iter<T: IntoIterator<Item = (String, Skill)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_field_names() {
        let json = r#"{"name":"Rust","children":["Tokio"],"love":9,"icon":"🦀"}"#;
        let skill: Skill = serde_json::from_str(json).unwrap();
        assert_eq!(skill.name, "Rust");
        assert_eq!(skill.children, vec!["Tokio"]);
        assert_eq!(skill.affinity, 9);
        assert_eq!(skill.symbol, "🦀");
    }

    #[test]
    fn test_children_default_to_empty() {
        let json = r#"{"name":"Go","love":7,"icon":"🐹"}"#;
        let skill: Skill = serde_json::from_str(json).unwrap();
        assert!(skill.children.is_empty());
    }

    #[test]
    fn test_missing_love_is_rejected() {
        let json = r#"{"name":"Go","icon":"🐹"}"#;
        assert!(serde_json::from_str::<Skill>(json).is_err());
    }

    #[test]
    fn test_negative_affinity_accepted() {
        let json = r#"{"name":"PHP","love":-3,"icon":"🐘"}"#;
        let skill: Skill = serde_json::from_str(json).unwrap();
        assert_eq!(skill.affinity, -3);
    }

    #[test]
    fn test_catalog_is_a_plain_mapping() {
        let json = r#"{
            "A": {"name":"A","children":["B"],"love":5,"icon":"🔧"},
            "B": {"name":"B","love":10,"icon":"📘"}
        }"#;
        let catalog: SkillCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("A").unwrap().children, vec!["B"]);
    }

    #[test]
    fn test_child_paths_preserve_order() {
        let skill = Skill::new("A", 1, "x").with_children(["C", "B"]);
        let paths: Vec<_> = skill.child_paths().collect();
        assert_eq!(paths, vec![SkillPath::single("C"), SkillPath::single("B")]);
    }
}
