//! Skill graph engine.
//!
//! Builds a labeled directed graph from a `SkillCatalog` and answers the
//! read-only queries the reports are made of: direct children, deep
//! traversal with leaf detection, and ranking by affinity. Depends only on
//! `skilltree-types` -- no filesystem or config I/O happens here.

pub mod graph;
pub mod ranking;
pub mod report;
pub mod traversal;
