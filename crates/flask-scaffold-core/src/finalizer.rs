//! Workflow-specific post-steps: dependency manifest and shell alias

use crate::config::HostContext;
use crate::error::Result;
use crate::params::ProjectParameters;
use crate::runtime::host::OsFamily;
use crate::templates::{catalog, materialize};
use crate::workflow::Workflow;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Prefix that identifies an existing `pf` alias, whatever its quoting
pub const ALIAS_KEY: &str = "alias pf=";

/// Line appended to the shell startup file
pub const ALIAS_LINE: &str = "alias pf='poetry run flask'";

/// What happened to the shell alias
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasOutcome {
    Added(PathBuf),
    AlreadyPresent(PathBuf),
    /// Appending failed; the scaffold itself is still complete
    Failed { path: PathBuf, reason: String },
    /// The workflow has no alias, or alias installation was turned off
    Skipped,
}

/// Outcome of the finalizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizeReport {
    /// Written dependency manifests
    pub manifests: Vec<PathBuf>,
    pub alias: AliasOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalizeOptions {
    pub install_alias: bool,
}

impl Default for FinalizeOptions {
    fn default() -> Self {
        Self {
            install_alias: true,
        }
    }
}

/// Run the post-steps for `workflow` against a materialized project
///
/// Manifest write failures are fatal. Alias failures are logged and reported
/// in [`FinalizeReport::alias`].
pub fn finalize(
    ctx: &HostContext,
    os_family: OsFamily,
    workflow: Workflow,
    root: &Path,
    params: &ProjectParameters,
    options: FinalizeOptions,
) -> Result<FinalizeReport> {
    let manifests =
        materialize::write_entries(root, catalog::manifest_entries(workflow), params)?;

    let alias = if workflow.installs_alias() && options.install_alias {
        let rc_path = shell_startup_file(ctx.home(), ctx.shell(), os_family);
        match ensure_alias(&rc_path, ALIAS_KEY, ALIAS_LINE) {
            Ok(outcome) => {
                tracing::info!("Shell alias: {:?}", outcome);
                outcome
            }
            Err(e) => {
                tracing::warn!("Could not update {}: {}", rc_path.display(), e);
                AliasOutcome::Failed {
                    path: rc_path,
                    reason: e.to_string(),
                }
            }
        }
    } else {
        AliasOutcome::Skipped
    };

    Ok(FinalizeReport { manifests, alias })
}

/// Startup file of the user's interactive shell
pub fn shell_startup_file(home: &Path, shell: Option<&str>, os_family: OsFamily) -> PathBuf {
    let zsh = os_family.is_unix_like() && shell.is_some_and(|s| s.ends_with("zsh"));
    if zsh {
        home.join(".zshrc")
    } else {
        home.join(".bashrc")
    }
}

/// Append `line` to `rc_path` unless a line starting with `key` is already there
///
/// Existing content is never rewritten; a missing final newline is added
/// before the new line.
pub fn ensure_alias(rc_path: &Path, key: &str, line: &str) -> io::Result<AliasOutcome> {
    let content = match fs::read_to_string(rc_path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e),
    };

    if content.lines().any(|l| l.trim().starts_with(key)) {
        return Ok(AliasOutcome::AlreadyPresent(rc_path.to_path_buf()));
    }

    let mut file = OpenOptions::new().create(true).append(true).open(rc_path)?;
    if !content.is_empty() && !content.ends_with('\n') {
        file.write_all(b"\n")?;
    }
    writeln!(file, "{}", line)?;

    Ok(AliasOutcome::Added(rc_path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(home: &Path, shell: &str) -> HostContext {
        HostContext::new(home.to_path_buf(), Some(shell.to_string()), Vec::new())
    }

    #[test]
    fn test_startup_file_selection() {
        let home = Path::new("/home/u");
        assert_eq!(
            shell_startup_file(home, Some("/bin/zsh"), OsFamily::MacOs),
            home.join(".zshrc")
        );
        assert_eq!(
            shell_startup_file(home, Some("/usr/bin/zsh"), OsFamily::Wsl),
            home.join(".zshrc")
        );
        assert_eq!(
            shell_startup_file(home, Some("/bin/bash"), OsFamily::Ubuntu),
            home.join(".bashrc")
        );
        assert_eq!(shell_startup_file(home, None, OsFamily::Linux), home.join(".bashrc"));
        assert_eq!(
            shell_startup_file(home, Some("zsh"), OsFamily::Windows),
            home.join(".bashrc")
        );
    }

    #[test]
    fn test_alias_added_once() {
        let home = tempfile::tempdir().unwrap();
        let rc = home.path().join(".bashrc");
        fs::write(&rc, "export EDITOR=vim").unwrap();

        assert_eq!(
            ensure_alias(&rc, ALIAS_KEY, ALIAS_LINE).unwrap(),
            AliasOutcome::Added(rc.clone())
        );
        assert_eq!(
            ensure_alias(&rc, ALIAS_KEY, ALIAS_LINE).unwrap(),
            AliasOutcome::AlreadyPresent(rc.clone())
        );

        let content = fs::read_to_string(&rc).unwrap();
        assert_eq!(content, "export EDITOR=vim\nalias pf='poetry run flask'\n");
        assert_eq!(content.lines().filter(|l| l.starts_with(ALIAS_KEY)).count(), 1);
    }

    #[test]
    fn test_alias_detection_ignores_quoting() {
        let home = tempfile::tempdir().unwrap();
        let rc = home.path().join(".zshrc");
        fs::write(&rc, "  alias pf=\"poetry run flask\"\n").unwrap();

        let outcome = ensure_alias(&rc, ALIAS_KEY, ALIAS_LINE).unwrap();
        assert_eq!(outcome, AliasOutcome::AlreadyPresent(rc.clone()));
        assert_eq!(fs::read_to_string(&rc).unwrap(), "  alias pf=\"poetry run flask\"\n");
    }

    #[test]
    fn test_alias_creates_missing_file() {
        let home = tempfile::tempdir().unwrap();
        let rc = home.path().join(".bashrc");
        ensure_alias(&rc, ALIAS_KEY, ALIAS_LINE).unwrap();
        assert_eq!(fs::read_to_string(&rc).unwrap(), "alias pf='poetry run flask'\n");
    }

    #[test]
    fn test_requirements_finalize_writes_manifest_only() {
        let home = tempfile::tempdir().unwrap();
        let root = home.path().join("blog");
        fs::create_dir(&root).unwrap();

        let report = finalize(
            &ctx(home.path(), "/bin/bash"),
            OsFamily::Linux,
            Workflow::RequirementsFileManaged,
            &root,
            &ProjectParameters::default(),
            FinalizeOptions::default(),
        )
        .unwrap();

        assert_eq!(report.manifests, vec![root.join("requirements.txt")]);
        assert_eq!(report.alias, AliasOutcome::Skipped);
        let requirements = fs::read_to_string(root.join("requirements.txt")).unwrap();
        assert!(requirements.lines().any(|l| l == "flask"));
        assert!(!requirements.contains("=="));
        assert!(!home.path().join(".bashrc").exists());
    }

    #[test]
    fn test_alias_failure_is_not_fatal() {
        let home = tempfile::tempdir().unwrap();
        let root = home.path().join("shop");
        fs::create_dir(&root).unwrap();
        // A directory where the startup file should be
        fs::create_dir(home.path().join(".bashrc")).unwrap();

        let params = ProjectParameters::new("shop", "d", "Ada")
            .with_poetry(crate::params::PoetryMetadata::defaults_for("shop"));
        let report = finalize(
            &ctx(home.path(), "/bin/bash"),
            OsFamily::Linux,
            Workflow::PoetryManaged,
            &root,
            &params,
            FinalizeOptions::default(),
        )
        .unwrap();

        assert!(root.join("pyproject.toml").is_file());
        assert!(matches!(report.alias, AliasOutcome::Failed { .. }));
    }

    #[test]
    fn test_alias_can_be_disabled() {
        let home = tempfile::tempdir().unwrap();
        let root = home.path().join("shop");
        fs::create_dir(&root).unwrap();

        let params = ProjectParameters::new("shop", "d", "Ada")
            .with_poetry(crate::params::PoetryMetadata::defaults_for("shop"));
        let report = finalize(
            &ctx(home.path(), "/bin/zsh"),
            OsFamily::MacOs,
            Workflow::PoetryManaged,
            &root,
            &params,
            FinalizeOptions {
                install_alias: false,
            },
        )
        .unwrap();

        assert_eq!(report.alias, AliasOutcome::Skipped);
        assert!(!home.path().join(".zshrc").exists());
    }
}
