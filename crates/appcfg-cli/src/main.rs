//! appcfg CLI
//!
//! Applies app.json to the native Android project and resolves the manifest
//! a publish step would upload.

mod cli;
mod commands;
mod error;

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber, fmt, prelude::*};

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(cmd) => {
            let root = project_root(cli.project)?;
            execute_command(cmd, root)
        }
        None => {
            println!("{} App config toolchain", "appcfg".green().bold());
            println!();
            println!("Run {} for available commands.", "appcfg --help".cyan());
            Ok(())
        }
    }
}

/// `--verbose` logs everything at debug; otherwise `RUST_LOG` decides,
/// defaulting to warnings only.
fn init_tracing(verbose: bool) {
    if verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Verbose mode enabled");
        }
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}

fn project_root(project: Option<PathBuf>) -> Result<PathBuf> {
    let root = match project {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    if !root.is_dir() {
        return Err(CliError::user(format!(
            "project root {} is not a directory",
            root.display()
        )));
    }
    Ok(root)
}

fn execute_command(cmd: Commands, root: PathBuf) -> Result<()> {
    match cmd {
        Commands::StatusBar { rule, dry_run } => commands::run_status_bar(&root, rule, dry_run),
        Commands::PublishConfig {
            release_channel,
            json,
        } => commands::run_publish_config(&root, release_channel, json),
        Commands::Completions { shell } => cmd_completions(shell),
    }
}

fn cmd_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_user() {
        let error = crate::error::CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }

    #[test]
    fn test_project_root_prefers_flag() {
        let temp = tempfile::TempDir::new().unwrap();
        let root = project_root(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(root, temp.path());
    }

    #[test]
    fn test_project_root_must_exist() {
        let err = project_root(Some(PathBuf::from("/nonexistent/appcfg/project"))).unwrap_err();
        assert!(err.to_string().contains("is not a directory"));
    }

    #[test]
    fn test_project_root_defaults_to_cwd() {
        let root = project_root(None).unwrap();
        assert_eq!(root, std::env::current_dir().unwrap());
    }

    #[test]
    fn test_completions_generate() {
        assert!(cmd_completions(Shell::Bash).is_ok());
    }
}
