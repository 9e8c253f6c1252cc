//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface a binary implements to configure the
//! scaffolding front end: identity, where the home directory can be
//! overridden, which guides to show when prerequisites are missing, and what
//! to tell the user once the project exists.

use crate::workflow::Workflow;
use std::path::Path;

/// An external setup guide shown as remediation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupGuide {
    pub title: &'static str,
    pub url: &'static str,
}

/// Configuration trait for scaffolding CLI products
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Environment variable name for overriding the home directory
    fn home_env(&self) -> &'static str;

    /// Guides listed when the host is missing prerequisites
    fn setup_guides(&self) -> &'static [SetupGuide];

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, workflow: Workflow) -> Vec<String>;
}
