//! deckhand CLI - deployment lifecycle dispatcher
//!
//! Usage: deckhand [COMMAND]
//!
//! Commands:
//!   (none)  Interactive lifecycle menu (build-and-start, start, stop, ...)
//!   build   Image build menu (with or without the layer cache)
//!   check   Run the preflight checks and report
//!   status  Show service status for the stack

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use deckhand::error::DispatchError;

use crate::cli::{Cli, Commands};
use crate::ui::primitives::{ColoredText, Icon};
use crate::ui::terminal::detect_capabilities;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        let code = err
            .downcast_ref::<DispatchError>()
            .map(DispatchError::exit_code)
            .unwrap_or(1);

        if json {
            println!(
                "{}",
                serde_json::json!({
                    "event": "error",
                    "message": err.to_string(),
                    "code": code,
                })
            );
        } else {
            let caps = detect_capabilities();
            eprintln!(
                "{} {}",
                Icon::Error.colored(caps.supports_color, caps.supports_unicode),
                ColoredText::error(err.to_string()).render(caps.supports_color)
            );
        }

        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None => commands::lifecycle::cmd_lifecycle(&cli),
        Some(Commands::Build) => commands::build::cmd_build(&cli),
        Some(Commands::Check) => commands::check::cmd_check(&cli),
        Some(Commands::Status) => commands::status::cmd_status(&cli),
    }
}
