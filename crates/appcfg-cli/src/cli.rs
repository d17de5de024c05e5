//! CLI argument parsing using clap derive

use std::path::PathBuf;

use appcfg_android::LightStatusBarRule;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// appcfg - Apply app config to native projects and resolve publish manifests
#[derive(Parser, Debug)]
#[command(name = "appcfg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (defaults to the current directory)
    #[arg(short, long, global = true, env = "APPCFG_PROJECT_ROOT")]
    pub project: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write the status bar color and style into the Android resources
    ///
    /// Updates android/app/src/main/res/values/styles.xml and colors.xml
    /// from `androidStatusBar` in app.json.
    ///
    /// Examples:
    ///   appcfg status-bar                 # Apply to the current project
    ///   appcfg status-bar --dry-run       # Show what would change
    StatusBar {
        /// Bar style that turns on android:windowLightStatusBar
        #[arg(long, default_value = "dark-content")]
        rule: LightStatusBarRule,

        /// Preview changes without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Resolve the manifest that would be published
    PublishConfig {
        /// Release channel to publish to
        #[arg(long)]
        release_channel: Option<String>,

        /// Print the full manifest bundle as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
