//! Template catalog and materialization
//!
//! This module provides:
//! - The embedded catalog of generated files and their rendering rules
//! - Target directory resolution and writing rendered files to disk

pub mod catalog;
pub mod materialize;

pub use catalog::{catalog, entries, manifest_entries, Placeholder, Render, Scope, TemplateEntry};
pub use materialize::{
    materialize, resolve_target, write_entries, write_entry, Materialized, Resolution,
    TargetDirectory,
};
