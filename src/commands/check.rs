//! Preflight report command
//!
//! Runs every precondition check without dispatching anything, renders a
//! doctor-style report, and exits non-zero if any check failed.

use anyhow::Result;

use deckhand::application::preflight::Preflight;
use deckhand::envfile::EnvFile;
use deckhand::infrastructure::SystemProcessRunner;

use crate::cli::Cli;
use crate::commands::CommandContext;
use crate::ui::views::menu::render_env_warnings;
use crate::ui::views::preflight::render_preflight_report;

pub fn cmd_check(cli: &Cli) -> Result<()> {
    let ctx = CommandContext::from_cli(cli)?;
    let ui = ctx.ui;
    ctx.print_config_warnings();

    let runner = SystemProcessRunner::new();
    let (report, runtime) = Preflight::new(&runner, &ctx.target).report();

    // Critical-key warnings only make sense once the file exists.
    let missing = EnvFile::load(&ctx.target.env_file)
        .map(|env| env.missing_keys(&ctx.config.env.required))
        .unwrap_or_default();

    if ui.json {
        for check in &report.checks {
            println!(
                "{}",
                serde_json::json!({
                    "event": "preflight_check",
                    "name": check.name,
                    "ok": check.ok,
                    "detail": check.detail,
                })
            );
        }
        for key in &missing {
            println!(
                "{}",
                serde_json::json!({ "event": "env_warning", "key": key })
            );
        }
        println!(
            "{}",
            serde_json::json!({
                "event": "check_summary",
                "ok": report.ok(),
                "runtime": runtime.map(|r| r.describe()),
            })
        );
    } else {
        print!("{}", render_preflight_report(&report, ui.color, ui.unicode));
        print!("{}", render_env_warnings(&missing, ui.color, ui.unicode));
    }

    if !report.ok() {
        std::process::exit(1);
    }

    Ok(())
}
