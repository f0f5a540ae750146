//! One-shot service status command

use anyhow::Result;

use deckhand::application::preflight::Preflight;
use deckhand::domain::ports::ProcessRunner;
use deckhand::error::DispatchError;
use deckhand::infrastructure::SystemProcessRunner;

use crate::cli::Cli;
use crate::commands::CommandContext;

pub fn cmd_status(cli: &Cli) -> Result<()> {
    let ctx = CommandContext::from_cli(cli)?;
    ctx.print_config_warnings();

    let runner = SystemProcessRunner::new();
    let runtime = Preflight::new(&runner, &ctx.target).resolve()?;

    let invocation = runtime.invocation(&ctx.target, &["ps"]);
    let code = runner.run(&invocation)?;
    if code != 0 {
        return Err(DispatchError::SubprocessFailed {
            command: invocation.display(),
            code,
        }
        .into());
    }

    Ok(())
}
