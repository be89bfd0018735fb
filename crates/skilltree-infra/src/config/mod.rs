//! Skills document loading.
//!
//! The document is a mapping of skill key -> `{name, children, love, icon}`.
//! Any read or parse failure is fatal to the caller: a partially parsed
//! catalog is never returned.

pub mod settings;

use std::path::Path;

use skilltree_types::error::SkillGraphError;
use skilltree_types::skill::SkillCatalog;

/// Serialization format of a skills document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// Infer the format from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            Some("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Parse a skills document from a string.
pub fn parse_catalog(content: &str, format: DocumentFormat) -> Result<SkillCatalog, SkillGraphError> {
    let parsed: Result<SkillCatalog, String> = match format {
        DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        DocumentFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
        DocumentFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
    };
    parsed.map_err(SkillGraphError::MalformedConfiguration)
}

/// Read and parse the skills document at `path`.
pub fn load_catalog(path: &Path) -> Result<SkillCatalog, SkillGraphError> {
    let content = std::fs::read_to_string(path).map_err(|source| SkillGraphError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let format = DocumentFormat::from_path(path);
    let catalog = parse_catalog(&content, format)?;
    tracing::debug!(
        path = %path.display(),
        ?format,
        skills = catalog.len(),
        "loaded skills document"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const EXAMPLE_JSON: &str = r#"{
        "A": {"name": "A", "children": ["B", "C"], "love": 5, "icon": "🔧"},
        "B": {"name": "B", "children": [], "love": 10, "icon": "📘"},
        "C": {"name": "C", "children": [], "love": 3, "icon": "📗"}
    }"#;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("s.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("s.YML")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("s.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("s.toml")), DocumentFormat::Toml);
        assert_eq!(DocumentFormat::from_path(Path::new("skills")), DocumentFormat::Json);
    }

    #[test]
    fn test_parse_json_catalog() {
        let catalog = parse_catalog(EXAMPLE_JSON, DocumentFormat::Json).unwrap();
        assert_eq!(catalog.len(), 3);
        let a = catalog.get("A").unwrap();
        assert_eq!(a.children, vec!["B", "C"]);
        assert_eq!(a.symbol, "🔧");
    }

    #[test]
    fn test_parse_yaml_catalog() {
        let yaml = "\
Rust:
  name: Rust
  children: [Tokio]
  love: 10
  icon: \"🦀\"
Tokio:
  name: Tokio
  love: 8
  icon: \"⚡\"
";
        let catalog = parse_catalog(yaml, DocumentFormat::Yaml).unwrap();
        assert_eq!(catalog.get("Rust").unwrap().children, vec!["Tokio"]);
        assert!(catalog.get("Tokio").unwrap().children.is_empty());
    }

    #[test]
    fn test_parse_toml_catalog() {
        let toml_doc = r#"
["Programming Languages"]
name = "Programming Languages"
children = ["Rust"]
love = 9
icon = "💻"

[Rust]
name = "Rust"
love = 10
icon = "🦀"
"#;
        let catalog = parse_catalog(toml_doc, DocumentFormat::Toml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("Programming Languages").unwrap().affinity, 9);
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = parse_catalog("{ not json", DocumentFormat::Json).unwrap_err();
        assert!(matches!(err, SkillGraphError::MalformedConfiguration(_)));
    }

    #[test]
    fn test_schema_mismatch_is_malformed() {
        let doc = r#"{"A": {"name": "A", "children": [], "love": "lots", "icon": "x"}}"#;
        let err = parse_catalog(doc, DocumentFormat::Json).unwrap_err();
        assert!(matches!(err, SkillGraphError::MalformedConfiguration(_)));
    }

    #[test]
    fn test_load_catalog_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("skills_tree.json");
        std::fs::write(&path, EXAMPLE_JSON).unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.get("B").unwrap().affinity, 10);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, SkillGraphError::ConfigRead { .. }));
        assert!(err.to_string().contains("absent.json"));
    }
}
