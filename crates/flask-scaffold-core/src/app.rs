//! One scaffold run, from workflow menu to finalizer
//!
//! The session is front-end agnostic: every question goes through a
//! [`Prompter`] and progress is reported with `tracing`. The cliclack front
//! end in [`crate::tui`] wraps it with user-facing narration.

use crate::config::HostContext;
use crate::error::Result;
use crate::finalizer::{self, FinalizeOptions, FinalizeReport};
use crate::params::{self, ProjectParameters};
use crate::prompt::{prompt_choice, Choice, Prompter};
use crate::runtime::check;
use crate::runtime::host::HostProfile;
use crate::templates::{catalog, materialize, TargetDirectory};
use crate::workflow::Workflow;
use std::path::PathBuf;

/// Answer at the workflow menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Workflow(Workflow),
    Quit,
}

const fn workflow_choice(workflow: Workflow) -> Choice<MenuChoice> {
    Choice {
        key: workflow.menu_key(),
        label: workflow.display_name(),
        value: MenuChoice::Workflow(workflow),
    }
}

const WORKFLOW_MENU: &[Choice<MenuChoice>] = &[
    workflow_choice(Workflow::ALL[0]),
    workflow_choice(Workflow::ALL[1]),
    Choice {
        key: "q",
        label: "Quit",
        value: MenuChoice::Quit,
    },
];

/// Show the workflow menu until a recognized key is entered
pub fn choose_workflow(prompter: &mut dyn Prompter) -> Result<MenuChoice> {
    prompt_choice(prompter, "Choose your environment workflow:", WORKFLOW_MENU)
}

/// Everything a completed run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub workflow: Workflow,
    pub parameters: ProjectParameters,
    pub target: TargetDirectory,
    /// Base files written by the materializer
    pub files: Vec<PathBuf>,
    pub finalize: FinalizeReport,
}

impl Summary {
    /// Number of files written, manifests included
    pub fn file_count(&self) -> usize {
        self.files.len() + self.finalize.manifests.len()
    }
}

/// How a run ended without error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed(Summary),
    /// The user picked quit at the menu
    Quit,
}

/// Drives a single scaffold run against a probed host
pub struct Scaffolder<'a> {
    ctx: &'a HostContext,
    profile: HostProfile,
    finalize_options: FinalizeOptions,
}

impl<'a> Scaffolder<'a> {
    pub fn new(ctx: &'a HostContext, profile: HostProfile) -> Self {
        Self {
            ctx,
            profile,
            finalize_options: FinalizeOptions::default(),
        }
    }

    pub fn with_finalize_options(mut self, options: FinalizeOptions) -> Self {
        self.finalize_options = options;
        self
    }

    pub fn profile(&self) -> &HostProfile {
        &self.profile
    }

    /// Run the menu, checks, prompts, materializer and finalizer in order
    ///
    /// Nothing is written before the prerequisites pass and the parameters
    /// are collected.
    pub fn run(&self, prompter: &mut dyn Prompter) -> Result<Outcome> {
        let workflow = match choose_workflow(prompter)? {
            MenuChoice::Quit => {
                tracing::info!("Quit at workflow menu");
                return Ok(Outcome::Quit);
            }
            MenuChoice::Workflow(workflow) => workflow,
        };

        check::validate(workflow, &self.profile)?;
        tracing::info!("Environment checks passed for {}", workflow);

        let parameters = params::collect(workflow, prompter)?;

        tracing::info!("Scaffolding Flask project structure");
        let materialized = materialize::materialize(
            self.ctx.home(),
            &parameters.name,
            catalog::entries(),
            &parameters,
            prompter,
        )?;

        let finalize = finalizer::finalize(
            self.ctx,
            self.profile.os_family(),
            workflow,
            &materialized.target.path,
            &parameters,
            self.finalize_options,
        )?;

        Ok(Outcome::Completed(Summary {
            workflow,
            parameters,
            target: materialized.target,
            files: materialized.files,
            finalize,
        }))
    }
}
