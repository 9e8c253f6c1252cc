//! Project parameters and their interactive collection

use crate::error::Result;
use crate::prompt::{prompt_with_default, Prompter};
use crate::workflow::Workflow;

pub const DEFAULT_PROJECT_NAME: &str = "flask_project";
pub const DEFAULT_DESCRIPTION: &str = "A starter Flask application.";
pub const DEFAULT_AUTHOR: &str = "Your Name";
pub const DEFAULT_VERSION: &str = "0.1.0";
pub const DEFAULT_AUTHOR_EMAIL: &str = "you@example.com";
pub const DEFAULT_LICENSE_ID: &str = "MIT";
pub const DEFAULT_PYTHON_CONSTRAINT: &str = ">=3.10,<4.0";

/// Values rendered into the scaffold, fixed once collection completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectParameters {
    /// Folder name under the home directory
    pub name: String,
    pub description: String,
    pub author: String,
    /// Only collected for [`Workflow::PoetryManaged`]
    pub poetry: Option<PoetryMetadata>,
}

/// Extra `pyproject.toml` metadata for the Poetry workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoetryMetadata {
    pub package_name: String,
    pub version: String,
    pub author_email: String,
    pub license_id: String,
    pub python_constraint: String,
}

impl ProjectParameters {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            author: author.into(),
            poetry: None,
        }
    }

    pub fn with_poetry(mut self, poetry: PoetryMetadata) -> Self {
        self.poetry = Some(poetry);
        self
    }
}

impl Default for ProjectParameters {
    fn default() -> Self {
        Self::new(DEFAULT_PROJECT_NAME, DEFAULT_DESCRIPTION, DEFAULT_AUTHOR)
    }
}

impl PoetryMetadata {
    /// Defaults used when every Poetry prompt is left blank
    pub fn defaults_for(project_name: &str) -> Self {
        Self {
            package_name: project_name.to_string(),
            version: DEFAULT_VERSION.to_string(),
            author_email: DEFAULT_AUTHOR_EMAIL.to_string(),
            license_id: DEFAULT_LICENSE_ID.to_string(),
            python_constraint: DEFAULT_PYTHON_CONSTRAINT.to_string(),
        }
    }
}

/// Collect parameters for `workflow`, one prompt per field
pub fn collect(workflow: Workflow, prompter: &mut dyn Prompter) -> Result<ProjectParameters> {
    let name = prompt_with_default(
        prompter,
        "Project folder name (will be created in your home directory)",
        DEFAULT_PROJECT_NAME,
    )?;
    let description =
        prompt_with_default(prompter, "Short project description", DEFAULT_DESCRIPTION)?;
    let author = prompt_with_default(prompter, "Author / owner name", DEFAULT_AUTHOR)?;

    let params = ProjectParameters::new(name, description, author);
    if workflow != Workflow::PoetryManaged {
        return Ok(params);
    }

    let defaults = PoetryMetadata::defaults_for(&params.name);
    let poetry = PoetryMetadata {
        package_name: prompt_with_default(prompter, "Project name", &defaults.package_name)?,
        version: prompt_with_default(prompter, "Version", &defaults.version)?,
        author_email: prompt_with_default(prompter, "Author email", &defaults.author_email)?,
        license_id: prompt_with_default(
            prompter,
            "License identifier (used alongside LICENSE file)",
            &defaults.license_id,
        )?,
        python_constraint: prompt_with_default(
            prompter,
            "Required Python version (PEP 440 range)",
            &defaults.python_constraint,
        )?,
    };

    Ok(params.with_poetry(poetry))
}
