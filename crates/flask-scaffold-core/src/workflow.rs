//! Dependency-management workflows

use crate::runtime::tool::Tool;
use std::fmt;

/// The two supported ways of managing a generated project's dependencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Workflow {
    /// pyenv + Poetry, dependencies declared in `pyproject.toml`
    PoetryManaged,
    /// pyenv + pyenv-virtualenv, dependencies listed in `requirements.txt`
    RequirementsFileManaged,
}

impl Workflow {
    pub const ALL: [Workflow; 2] = [Workflow::PoetryManaged, Workflow::RequirementsFileManaged];

    /// Key the user types at the workflow menu
    pub const fn menu_key(&self) -> &'static str {
        match self {
            Workflow::PoetryManaged => "1",
            Workflow::RequirementsFileManaged => "2",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Workflow::PoetryManaged => "pyenv + Poetry (pyproject.toml)",
            Workflow::RequirementsFileManaged => "pyenv + pyenv-virtualenv + requirements.txt",
        }
    }

    /// Tools that must be present, base requirement first
    pub fn required_tools(&self) -> &'static [Tool] {
        match self {
            Workflow::PoetryManaged => &[Tool::Pyenv, Tool::Poetry],
            Workflow::RequirementsFileManaged => &[Tool::Pyenv, Tool::PyenvVirtualenv],
        }
    }

    /// Relative path of the dependency manifest this workflow writes
    pub fn manifest_path(&self) -> &'static str {
        match self {
            Workflow::PoetryManaged => "pyproject.toml",
            Workflow::RequirementsFileManaged => "requirements.txt",
        }
    }

    /// Whether the finalizer installs the `pf` shell alias
    pub fn installs_alias(&self) -> bool {
        matches!(self, Workflow::PoetryManaged)
    }
}

impl fmt::Display for Workflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
