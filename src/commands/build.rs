//! Cache build menu command
//!
//! Image builds are split out from the lifecycle menu so an operator can
//! rebuild without touching running services: with the layer cache, from
//! scratch, or quit.

use anyhow::Result;

use deckhand::application::preflight::Preflight;
use deckhand::domain::action::BuildAction;
use deckhand::domain::ports::{ProcessRunner, Prompter};
use deckhand::error::DispatchError;
use deckhand::infrastructure::{SystemProcessRunner, TermPrompter};

use crate::cli::Cli;
use crate::commands::CommandContext;
use crate::ui::primitives::{ColoredText, Icon};
use crate::ui::views::menu::render_build_header;

pub fn cmd_build(cli: &Cli) -> Result<()> {
    let ctx = CommandContext::from_cli(cli)?;
    let ui = ctx.ui;
    ctx.print_config_warnings();

    let runner = SystemProcessRunner::new();
    let runtime = Preflight::new(&runner, &ctx.target).resolve()?;

    if ui.json {
        println!(
            "{}",
            serde_json::json!({ "event": "preflight", "runtime": runtime.describe() })
        );
    } else {
        print!(
            "{}",
            render_build_header(&ctx.target.compose_file, ui.color, ui.unicode)
        );
    }

    let prompter = if ui.json {
        TermPrompter::quiet()
    } else {
        TermPrompter::new()
    };

    let labels: Vec<String> = BuildAction::ALL.iter().map(|a| a.label().to_string()).collect();
    let index = prompter.select("Select a build", &labels)?;
    let action = BuildAction::ALL[index];

    let Some(args) = action.compose_args() else {
        return Ok(());
    };

    if ui.json {
        println!(
            "{}",
            serde_json::json!({ "event": "action_start", "action": action.name() })
        );
    }

    let invocation = runtime.invocation(&ctx.target, args);
    let code = runner.run(&invocation)?;
    if code != 0 {
        return Err(DispatchError::SubprocessFailed {
            command: invocation.display(),
            code,
        }
        .into());
    }

    if ui.json {
        println!(
            "{}",
            serde_json::json!({
                "event": "action_complete",
                "action": action.name(),
                "status": "completed",
            })
        );
    } else {
        println!(
            "{} {}",
            Icon::Success.colored(ui.color, ui.unicode),
            ColoredText::success(format!("{} complete", action.name())).render(ui.color)
        );
    }

    Ok(())
}
