//! Error types for scaffold generation
//!
//! Every fallible engine operation returns [`ScaffoldError`]. Binaries wrap it
//! in `anyhow` at the edge; the library keeps the variants distinct so callers
//! can present remediation for prerequisite failures and directory conflicts.

use crate::runtime::check::MissingPrerequisites;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for scaffold operations
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The host lacks tools the chosen workflow needs
    #[error("{0}")]
    PrerequisiteMissing(MissingPrerequisites),

    /// Target directory exists, is not empty, and the user chose to abort
    #[error("Directory {} already exists and is not empty", path.display())]
    DirectoryConflict { path: PathBuf },

    #[error("Failed to create directory: {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file: {}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A template references a parameter the current run did not collect
    #[error("Template '{path}' needs '{key}', which was not collected for this workflow")]
    UnboundPlaceholder {
        path: &'static str,
        key: &'static str,
    },

    #[error("Could not determine the home directory")]
    HomeNotFound,

    /// Reading an interactive answer failed (including end of input)
    #[error("Failed to read input")]
    Prompt(#[source] io::Error),
}

impl From<MissingPrerequisites> for ScaffoldError {
    fn from(missing: MissingPrerequisites) -> Self {
        ScaffoldError::PrerequisiteMissing(missing)
    }
}

/// Convenience alias used across the engine
pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
