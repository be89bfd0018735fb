//! Infrastructure layer for the skill tree engine.
//!
//! Reads the skills document from disk (JSON, YAML or TOML) and loads the
//! application settings file. Everything that touches the filesystem lives
//! here so `skilltree-core` stays pure.

pub mod config;
