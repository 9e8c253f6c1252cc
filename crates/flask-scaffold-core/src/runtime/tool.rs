//! External tool lookup
//!
//! Tools are only ever looked up, never installed. A lookup that errors is
//! reported the same way as a tool that is not there.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// External tools the workflows depend on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tool {
    /// Interpreter-version manager, required by every workflow
    Pyenv,
    /// Dependency manager for the Poetry workflow
    Poetry,
    /// pyenv plugin providing virtual environments
    PyenvVirtualenv,
}

impl Tool {
    /// Human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Tool::Pyenv => "pyenv",
            Tool::Poetry => "Poetry",
            Tool::PyenvVirtualenv => "pyenv-virtualenv",
        }
    }

    /// Executable resolved on PATH to detect the tool
    pub fn binary(&self) -> &'static str {
        match self {
            Tool::Pyenv | Tool::PyenvVirtualenv => "pyenv",
            Tool::Poetry => "poetry",
        }
    }

    /// Tool that must be present before this one can be checked at all
    pub fn requires(&self) -> Option<Tool> {
        match self {
            Tool::PyenvVirtualenv => Some(Tool::Pyenv),
            Tool::Pyenv | Tool::Poetry => None,
        }
    }

    /// Short explanation shown when the tool is missing
    pub fn missing_hint(&self) -> &'static str {
        match self {
            Tool::Pyenv => "pyenv not found on PATH.",
            Tool::Poetry => "Poetry not found on PATH.",
            Tool::PyenvVirtualenv => "pyenv-virtualenv plugin does not appear to be installed.",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

#[cfg(windows)]
const EXECUTABLE_SUFFIXES: &[&str] = &[".exe", ".bat", ".cmd", ""];

#[cfg(not(windows))]
const EXECUTABLE_SUFFIXES: &[&str] = &[""];

/// Resolve an executable by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(binary: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        for suffix in EXECUTABLE_SUFFIXES {
            let candidate = dir.join(format!("{}{}", binary, suffix));
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Check whether a tool is usable from the given PATH entries
///
/// `pyenv-virtualenv` has no executable of its own: it is detected by running
/// `pyenv virtualenvs` and checking the exit status.
pub fn is_available(tool: Tool, path_entries: &[PathBuf]) -> bool {
    let Some(binary) = resolve_tool_path(tool.binary(), path_entries) else {
        return false;
    };

    match tool {
        Tool::Pyenv | Tool::Poetry => true,
        Tool::PyenvVirtualenv => Command::new(&binary)
            .arg("virtualenvs")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false),
    }
}
