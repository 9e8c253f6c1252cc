//! Flask Scaffold Core - engine behind the `flask-scaffold` CLI
//!
//! This library validates the host against a dependency-management workflow,
//! collects a handful of project parameters and writes an embedded Flask
//! starter tree into `<home>/<project name>/`.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - host probing, workflow validation, the
//!   template catalog, materialization and the finalizer
//! - **Layer 2: Session Orchestration** - [`Scaffolder`] runs one scaffold
//!   against any [`Prompter`], and [`ProductConfig`] customizes the front end
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```no_run
//! use flask_scaffold_core::{runtime, HostContext, Outcome, Scaffolder, ScriptedPrompter};
//!
//! let ctx = HostContext::from_env(None, "FLASK_SCAFFOLD_HOME")?;
//! let profile = runtime::probe(&ctx);
//! let mut answers = ScriptedPrompter::new(["2", "blog", "", ""]);
//! if let Outcome::Completed(summary) = Scaffolder::new(&ctx, profile).run(&mut answers)? {
//!     println!("{} files in {}", summary.file_count(), summary.target.path.display());
//! }
//! # Ok::<(), flask_scaffold_core::ScaffoldError>(())
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod finalizer;
pub mod params;
pub mod product;
pub mod prompt;
pub mod runtime;
pub mod templates;
pub mod workflow;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use app::{MenuChoice, Outcome, Scaffolder, Summary};
pub use config::HostContext;
pub use error::ScaffoldError;
pub use finalizer::{AliasOutcome, FinalizeOptions, FinalizeReport};
pub use params::{PoetryMetadata, ProjectParameters};
pub use product::{ProductConfig, SetupGuide};
pub use prompt::{LinePrompter, Prompter, ScriptedPrompter};
pub use runtime::{HostProfile, OsFamily, Tool};
pub use workflow::Workflow;

#[cfg(feature = "tui")]
pub use tui::run;
