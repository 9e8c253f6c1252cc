//! Charm-style CLI front end using cliclack

use crate::app::{Outcome, Scaffolder, Summary};
use crate::config::HostContext;
use crate::error::ScaffoldError;
use crate::finalizer::{AliasOutcome, FinalizeOptions};
use crate::product::ProductConfig;
use crate::prompt::{LinePrompter, Prompter};
use crate::runtime::{self, MissingPrerequisites};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

/// CLI arguments for a scaffold run
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// Directory to treat as home instead of the user's home directory
    pub home: Option<PathBuf>,

    /// Append the `pf` alias to the shell startup file (Poetry workflow)
    pub install_alias: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            home: None,
            install_alias: true,
        }
    }
}

/// Prompter backed by cliclack's inline text input
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        cliclack::input(prompt).required(false).interact()
    }
}

/// Run the CLI with interactive prompts
pub fn run<C: ProductConfig>(config: &C, args: RunArgs) -> Result<Outcome> {
    cliclack::intro(config.display_name())?;
    tracing::debug!(product = config.name(), "starting scaffold run");

    // Step 1: Read host state once
    let ctx = HostContext::from_config(config, args.home.clone())
        .context("Failed to read the host environment")?;
    let profile = runtime::probe(&ctx);
    let tools: Vec<&str> = profile
        .available_tools()
        .iter()
        .map(|t| t.display_name())
        .collect();
    cliclack::log::info(format!(
        "Host: {} | tools found: {}",
        profile.os_family(),
        if tools.is_empty() {
            "none".to_string()
        } else {
            tools.join(", ")
        }
    ))?;
    cliclack::log::info(format!("Projects are created under {}", ctx.home().display()))?;

    // Step 2: Menu, checks, prompts and scaffold
    let scaffolder = Scaffolder::new(&ctx, profile).with_finalize_options(FinalizeOptions {
        install_alias: args.install_alias,
    });
    let result = if io::stdin().is_terminal() {
        scaffolder.run(&mut TerminalPrompter)
    } else {
        scaffolder.run(&mut LinePrompter::stdio())
    };

    // Step 3: Report
    match result {
        Ok(Outcome::Quit) => {
            cliclack::outro("Aborting.")?;
            Ok(Outcome::Quit)
        }
        Ok(Outcome::Completed(summary)) => {
            report_summary(&summary)?;
            print_next_steps(config, &summary)?;
            Ok(Outcome::Completed(summary))
        }
        Err(ScaffoldError::PrerequisiteMissing(missing)) => {
            show_prereq_instructions(config, &missing)?;
            anyhow::bail!("Please install the missing prerequisites and try again.");
        }
        Err(ScaffoldError::DirectoryConflict { path }) => {
            cliclack::log::warning(format!(
                "{} already has content. Run again with a different project name.",
                path.display()
            ))?;
            anyhow::bail!("Setup cancelled.");
        }
        Err(e) => Err(e.into()),
    }
}

fn show_prereq_instructions<C: ProductConfig>(
    config: &C,
    missing: &MissingPrerequisites,
) -> Result<()> {
    cliclack::log::error(missing.to_string())?;

    let guides: Vec<String> = config
        .setup_guides()
        .iter()
        .map(|g| format!("{}\n  {}", g.title, g.url.cyan()))
        .collect();
    cliclack::note("Setup guides", guides.join("\n"))?;
    Ok(())
}

fn report_summary(summary: &Summary) -> Result<()> {
    cliclack::log::success(format!(
        "Created {} files in {}",
        summary.file_count(),
        summary.target.path.display()
    ))?;

    match &summary.finalize.alias {
        AliasOutcome::Added(path) => cliclack::log::info(format!(
            "Added alias 'pf' to {}. You may need to reload your shell.",
            path.display()
        ))?,
        AliasOutcome::AlreadyPresent(path) => {
            cliclack::log::info(format!("Alias 'pf' already present in {}.", path.display()))?
        }
        AliasOutcome::Failed { path, reason } => cliclack::log::warning(format!(
            "Could not add alias 'pf' to {}: {}",
            path.display(),
            reason
        ))?,
        AliasOutcome::Skipped => {}
    }
    Ok(())
}

fn print_next_steps<C: ProductConfig>(config: &C, summary: &Summary) -> Result<()> {
    let steps = config.next_steps(&summary.target.path, summary.workflow);

    println!();
    println!("  {}", "Next steps".bold());
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
