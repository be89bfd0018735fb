use std::path::PathBuf;

use thiserror::Error;

use crate::path::SkillPath;

/// Errors raised while loading, building, or walking the skill graph.
///
/// All variants are structural: they indicate corrupt or inconsistent input
/// and carry no retry semantics.
#[derive(Debug, Error)]
pub enum SkillGraphError {
    #[error("node not found: '{0}'")]
    NodeNotFound(SkillPath),

    #[error("skill '{parent}' lists unknown child '{child}'")]
    DanglingReference { parent: String, child: String },

    #[error("malformed configuration: {0}")]
    MalformedConfiguration(String),

    #[error("cycle detected at '{0}'")]
    CycleDetected(SkillPath),

    #[error("failed to read configuration '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_not_found_display() {
        let err = SkillGraphError::NodeNotFound(SkillPath::single("Haskell"));
        assert_eq!(err.to_string(), "node not found: 'Haskell'");
    }

    #[test]
    fn test_dangling_reference_display() {
        let err = SkillGraphError::DanglingReference {
            parent: "Programming Languages".to_string(),
            child: "Cobol".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "skill 'Programming Languages' lists unknown child 'Cobol'"
        );
    }

    #[test]
    fn test_cycle_display_names_entry_path() {
        let err = SkillGraphError::CycleDetected(SkillPath::single("A"));
        assert!(err.to_string().contains("'A'"));
    }
}
