//! flask-scaffold CLI - Project scaffolding for Flask applications

use clap::Parser;
use flask_scaffold_core::tui::RunArgs;
use flask_scaffold_core::{ProductConfig, SetupGuide, Workflow};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const SETUP_GUIDES: &[SetupGuide] = &[
    SetupGuide {
        title: "Git & GitHub configuration (scripts + guide)",
        url: "https://github.com/GitauHarrison/git_github_configurations",
    },
    SetupGuide {
        title: "Automating Git & GitHub setup",
        url: "https://github.com/GitauHarrison/notes_on_general_topics/blob/main/02_automate_git_and_github_setup.md",
    },
    SetupGuide {
        title: "Python version & pyenv / pyenv-virtualenv setup helper",
        url: "https://github.com/GitauHarrison/install_new_python_version_in_your_os?tab=readme-ov-file#python-version--pyenv-virtualenv-setup-helper",
    },
    SetupGuide {
        title: "Manual guide for newer Python + virtualenv on macOS",
        url: "https://github.com/GitauHarrison/notes_on_general_topics/blob/main/01_new_python_version_macOS_virtualenv.md",
    },
    SetupGuide {
        title: "Working with virtual environments in Flask",
        url: "https://github.com/GitauHarrison/notes_on_general_topics/blob/main/03_working_with_virtual_envs_in_flask.md",
    },
];

/// Flask scaffold product configuration
#[derive(Clone)]
pub struct FlaskConfig;

impl ProductConfig for FlaskConfig {
    fn name(&self) -> &'static str {
        "flask-scaffold"
    }

    fn display_name(&self) -> &'static str {
        "Automated Flask Project Scaffold"
    }

    fn home_env(&self) -> &'static str {
        "FLASK_SCAFFOLD_HOME"
    }

    fn setup_guides(&self) -> &'static [SetupGuide] {
        SETUP_GUIDES
    }

    fn next_steps(&self, dir: &Path, workflow: Workflow) -> Vec<String> {
        let mut steps = vec!["Create/activate a virtual environment for this project.".to_string()];

        match workflow {
            Workflow::PoetryManaged => {
                steps.push(format!(
                    "cd {} && poetry add flask flask-sqlalchemy flask-migrate flask-login \
                     flask-wtf flask-mail flask-moment python-dotenv email-validator pyjwt",
                    dir.display()
                ));
                steps.push(
                    "Run `poetry lock` whenever you edit pyproject.toml by hand.".to_string(),
                );
                steps.push(
                    "Start the dev server with `pf run` (alias for `poetry run flask`)."
                        .to_string(),
                );
            }
            Workflow::RequirementsFileManaged => {
                steps.push(format!("cd {} && pip install -r requirements.txt", dir.display()));
                steps.push(
                    "Whenever you change dependencies, run `pip3 freeze > requirements.txt`."
                        .to_string(),
                );
                steps.push(
                    "Start the dev server with `flask run` inside the virtualenv.".to_string(),
                );
            }
        }

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "flask-scaffold")]
#[command(about = "CLI for scaffolding Flask projects")]
#[command(version)]
pub struct Args {
    /// Directory to create the project in instead of your home directory
    #[arg(long, env = "FLASK_SCAFFOLD_HOME")]
    pub home: Option<PathBuf>,

    /// Do not add the `pf` alias to your shell startup file
    #[arg(long = "no-alias")]
    pub no_alias: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl From<&Args> for RunArgs {
    fn from(args: &Args) -> Self {
        RunArgs {
            home: args.home.clone(),
            install_alias: !args.no_alias,
        }
    }
}

/// Initialize the tracing subscriber for logging.
///
/// `--debug` forces debug output for the scaffold crates; otherwise
/// `RUST_LOG` applies, defaulting to warnings only.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("flask_scaffold=debug,flask_scaffold_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_tracing(args.debug);
    tracing::debug!("flask-scaffold starting with args: {:?}", args);

    let config = FlaskConfig;
    let result = flask_scaffold_core::run(&config, RunArgs::from(&args));

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_steps_mention_workflow_tooling() {
        let dir = Path::new("/home/u/blog");
        let poetry = FlaskConfig.next_steps(dir, Workflow::PoetryManaged);
        assert!(poetry.iter().any(|s| s.contains("poetry add")));
        assert!(poetry.iter().any(|s| s.contains("pf run")));

        let pip = FlaskConfig.next_steps(dir, Workflow::RequirementsFileManaged);
        assert!(pip.iter().any(|s| s.contains("pip install -r requirements.txt")));
        assert!(pip.iter().all(|s| !s.contains("poetry")));
    }

    #[test]
    fn test_args_map_to_run_args() {
        let args = Args::parse_from(["flask-scaffold", "--home", "/tmp/h", "--no-alias"]);
        let run = RunArgs::from(&args);
        assert_eq!(run.home, Some(PathBuf::from("/tmp/h")));
        assert!(!run.install_alias);
    }
}
