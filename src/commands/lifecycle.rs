//! Lifecycle menu command
//!
//! The default surface: preflight, the six-item action menu, one dispatch,
//! exit code propagated verbatim.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use deckhand::application::dispatch::{DispatchUseCase, OutcomeStatus};
use deckhand::application::preflight::Preflight;
use deckhand::domain::action::Action;
use deckhand::domain::ports::Prompter;
use deckhand::envfile::EnvFile;
use deckhand::infrastructure::{SystemProcessRunner, TermPrompter};

use crate::cli::Cli;
use crate::commands::CommandContext;
use crate::ui::views::menu::{render_env_warnings, render_lifecycle_header};
use crate::ui::views::outcome::render_outcome;

pub fn cmd_lifecycle(cli: &Cli) -> Result<()> {
    let ctx = CommandContext::from_cli(cli)?;
    let ui = ctx.ui;
    ctx.print_config_warnings();

    let runner = SystemProcessRunner::new();
    let runtime = Preflight::new(&runner, &ctx.target).resolve()?;

    // Presence is already checked; load the file for critical-key warnings.
    let env = EnvFile::load(&ctx.target.env_file)?;
    let missing = env.missing_keys(&ctx.config.env.required);

    if ui.json {
        println!(
            "{}",
            serde_json::json!({
                "event": "preflight",
                "runtime": runtime.describe(),
            })
        );
        for key in &missing {
            println!(
                "{}",
                serde_json::json!({ "event": "env_warning", "key": key })
            );
        }
    } else {
        print!(
            "{}",
            render_lifecycle_header(
                &ctx.target.project_dir,
                &ctx.target.compose_file,
                &runtime,
                ui.verbose,
                ui.color,
                ui.unicode,
            )
        );
        print!("{}", render_env_warnings(&missing, ui.color, ui.unicode));
    }

    // The handler only records the interrupt; the foreground child receives
    // the signal and terminates, which is how the logs stream ends.
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_flag = interrupted.clone();
    ctrlc::set_handler(move || {
        interrupted_flag.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl+C handler");

    let prompter = if ui.json {
        TermPrompter::quiet()
    } else {
        TermPrompter::new()
    };

    let labels: Vec<String> = Action::ALL.iter().map(|a| a.label().to_string()).collect();
    let index = prompter.select("Select an action", &labels)?;
    let action = Action::ALL[index];

    if ui.json {
        println!(
            "{}",
            serde_json::json!({ "event": "action_start", "action": action.name() })
        );
    }

    let dispatch = DispatchUseCase::new(
        &runner,
        &prompter,
        runtime,
        &ctx.target,
        Duration::from_secs(ctx.config.stack.grace_secs),
        interrupted,
    );
    let outcome = dispatch.execute(action)?;

    if ui.json {
        let status = match outcome.status {
            OutcomeStatus::Completed => "completed",
            OutcomeStatus::Cancelled => "cancelled",
            OutcomeStatus::Interrupted => "interrupted",
        };
        println!(
            "{}",
            serde_json::json!({
                "event": "action_complete",
                "action": action.name(),
                "status": status,
            })
        );
    } else {
        print!("{}", render_outcome(&outcome, ui.color, ui.unicode));
    }

    Ok(())
}
