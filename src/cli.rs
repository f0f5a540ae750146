use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use deckhand::config::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// Deckhand - deployment lifecycle dispatcher for Docker Compose stacks
#[derive(Parser, Debug)]
#[command(name = "deckhand")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'deckhand' without arguments for the lifecycle menu.")]
pub struct Cli {
    /// Emit line-oriented JSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// When to use colored output
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Project directory holding the compose deployment
    #[arg(short = 'C', long, global = true)]
    pub project_dir: Option<PathBuf>,

    /// Compose definition file, relative to the project directory
    #[arg(short = 'f', long = "file", global = true)]
    pub compose_file: Option<PathBuf>,

    /// Environment file, relative to the project directory
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Image build menu (with or without the layer cache)
    Build,

    /// Run the preflight checks and report, without dispatching anything
    Check,

    /// Show service status for the stack
    Status,
}
