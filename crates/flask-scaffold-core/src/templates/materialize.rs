//! Writing the catalog to disk

use super::catalog::TemplateEntry;
use crate::error::{Result, ScaffoldError};
use crate::params::ProjectParameters;
use crate::prompt::Prompter;
use std::fs;
use std::path::{Path, PathBuf};

/// Question asked when the target directory already has content
pub const CONFLICT_PROMPT: &str =
    "Do you want to abort and choose a different project name? [Y/n]:";

/// How the target directory was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Created,
    ReusedEmpty,
    /// Non-empty directory the user explicitly chose to write into
    ReusedNonEmpty,
}

/// The resolved project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDirectory {
    pub path: PathBuf,
    pub resolution: Resolution,
}

/// Result of a completed materialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    pub target: TargetDirectory,
    /// Written files, in catalog order
    pub files: Vec<PathBuf>,
}

/// Resolve `home/root_name`, creating it or asking before reusing a non-empty one
///
/// Only an explicit "n"/"no" continues into a non-empty directory; any other
/// answer, including an empty one, aborts with [`ScaffoldError::DirectoryConflict`].
pub fn resolve_target(
    home: &Path,
    root_name: &str,
    prompter: &mut dyn Prompter,
) -> Result<TargetDirectory> {
    let path = home.join(root_name);

    if !path.exists() {
        fs::create_dir_all(&path).map_err(|source| ScaffoldError::CreateDir {
            path: path.clone(),
            source,
        })?;
        tracing::info!("Created project directory: {}", path.display());
        return Ok(TargetDirectory {
            path,
            resolution: Resolution::Created,
        });
    }

    let mut contents = fs::read_dir(&path).map_err(|source| ScaffoldError::CreateDir {
        path: path.clone(),
        source,
    })?;
    if contents.next().is_none() {
        tracing::info!("Using existing empty directory: {}", path.display());
        return Ok(TargetDirectory {
            path,
            resolution: Resolution::ReusedEmpty,
        });
    }

    tracing::warn!("Directory {} already exists and is not empty", path.display());
    let answer = prompter
        .ask(CONFLICT_PROMPT)
        .map_err(ScaffoldError::Prompt)?;
    if !confirms_continue(&answer) {
        return Err(ScaffoldError::DirectoryConflict { path });
    }

    tracing::info!("Writing into non-empty directory: {}", path.display());
    Ok(TargetDirectory {
        path,
        resolution: Resolution::ReusedNonEmpty,
    })
}

fn confirms_continue(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "n" | "no")
}

/// Render one entry under `root`, replacing any existing file at its path
pub fn write_entry(
    root: &Path,
    entry: &TemplateEntry,
    params: &ProjectParameters,
) -> Result<PathBuf> {
    let target_path = root.join(entry.relative_path());

    // Ensure parent directories exist
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|source| ScaffoldError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let content = normalize_trailing_newline(&entry.render(params)?);
    fs::write(&target_path, content).map_err(|source| ScaffoldError::WriteFile {
        path: target_path.clone(),
        source,
    })?;

    tracing::debug!("Created {}", target_path.display());
    Ok(target_path)
}

/// Write entries in order; the first failure stops the run with no rollback
pub fn write_entries<'a, I>(
    root: &Path,
    entries: I,
    params: &ProjectParameters,
) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = &'a TemplateEntry>,
{
    entries
        .into_iter()
        .map(|entry| write_entry(root, entry, params))
        .collect()
}

/// Resolve the project root under `home`, then write every entry into it
pub fn materialize<'a, I>(
    home: &Path,
    root_name: &str,
    entries: I,
    params: &ProjectParameters,
    prompter: &mut dyn Prompter,
) -> Result<Materialized>
where
    I: IntoIterator<Item = &'a TemplateEntry>,
{
    let target = resolve_target(home, root_name, prompter)?;
    let files = write_entries(&target.path, entries, params)?;
    Ok(Materialized { target, files })
}

/// Trim trailing newlines and end the text with exactly one
pub fn normalize_trailing_newline(text: &str) -> String {
    let mut normalized = text.trim_end_matches('\n').to_string();
    normalized.push('\n');
    normalized
}
