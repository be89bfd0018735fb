//! Shared domain types for the skill tree engine.
//!
//! Contains the node key (`SkillPath`), the node payload (`Skill`), the
//! configuration mapping (`SkillCatalog`), edge types and the error enum.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod edge;
pub mod error;
pub mod path;
pub mod skill;
