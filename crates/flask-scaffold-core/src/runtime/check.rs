//! Workflow prerequisite validation

use super::host::HostProfile;
use super::tool::Tool;
use crate::workflow::Workflow;
use std::fmt;

/// Tools a workflow needed but the host lacked, in requirement order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingPrerequisites {
    pub workflow: Workflow,
    pub missing: Vec<Tool>,
}

impl fmt::Display for MissingPrerequisites {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Prerequisite check failed for {}:", self.workflow)?;
        let lines: Vec<String> = self
            .missing
            .iter()
            .map(|tool| format!("  - {}", tool.missing_hint()))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

impl std::error::Error for MissingPrerequisites {}

/// Decide whether the probed host satisfies a workflow
///
/// A tool that depends on another (the virtualenv plugin on pyenv) is only
/// checked when its base is present; a missing base is reported on its own.
pub fn validate(workflow: Workflow, profile: &HostProfile) -> Result<(), MissingPrerequisites> {
    let mut missing = Vec::new();

    for &tool in workflow.required_tools() {
        if let Some(base) = tool.requires() {
            if !profile.has(base) {
                continue;
            }
        }
        if !profile.has(tool) {
            missing.push(tool);
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingPrerequisites { workflow, missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::host::OsFamily;

    fn profile(tools: &[Tool]) -> HostProfile {
        HostProfile::new(OsFamily::Linux, tools.iter().copied())
    }

    #[test]
    fn test_all_tools_present() {
        let all = profile(&[Tool::Pyenv, Tool::Poetry, Tool::PyenvVirtualenv]);
        for workflow in Workflow::ALL {
            assert!(validate(workflow, &all).is_ok());
        }
    }

    #[test]
    fn test_poetry_missing() {
        let err = validate(Workflow::PoetryManaged, &profile(&[Tool::Pyenv])).unwrap_err();
        assert_eq!(err.missing, vec![Tool::Poetry]);
    }

    #[test]
    fn test_poetry_workflow_ignores_plugin() {
        let host = profile(&[Tool::Pyenv, Tool::Poetry]);
        assert!(validate(Workflow::PoetryManaged, &host).is_ok());
    }

    #[test]
    fn test_missing_base_reported_for_both_workflows() {
        let err = validate(Workflow::PoetryManaged, &profile(&[])).unwrap_err();
        assert_eq!(err.missing, vec![Tool::Pyenv, Tool::Poetry]);

        let err = validate(Workflow::RequirementsFileManaged, &profile(&[])).unwrap_err();
        assert_eq!(err.missing, vec![Tool::Pyenv]);
    }

    #[test]
    fn test_plugin_not_checked_without_base() {
        // A plugin reported without its base is still not enough
        let host = profile(&[Tool::PyenvVirtualenv]);
        let err = validate(Workflow::RequirementsFileManaged, &host).unwrap_err();
        assert_eq!(err.missing, vec![Tool::Pyenv]);
    }

    #[test]
    fn test_plugin_missing_with_base_present() {
        let err =
            validate(Workflow::RequirementsFileManaged, &profile(&[Tool::Pyenv])).unwrap_err();
        assert_eq!(err.missing, vec![Tool::PyenvVirtualenv]);
        assert!(err.to_string().contains("pyenv-virtualenv plugin"));
    }

    #[test]
    fn test_every_subset_of_tools() {
        let tools = [Tool::Pyenv, Tool::Poetry, Tool::PyenvVirtualenv];
        for mask in 0..8u8 {
            let present: Vec<Tool> = tools
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, t)| *t)
                .collect();
            let host = profile(&present);

            for workflow in Workflow::ALL {
                let expected: Vec<Tool> = workflow
                    .required_tools()
                    .iter()
                    .copied()
                    .filter(|t| t.requires().map_or(true, |base| host.has(base)))
                    .filter(|t| !host.has(*t))
                    .collect();
                match validate(workflow, &host) {
                    Ok(()) => assert!(expected.is_empty()),
                    Err(err) => assert_eq!(err.missing, expected),
                }
            }
        }
    }
}
