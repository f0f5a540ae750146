//! Command handlers
//!
//! Thin wiring from parsed CLI arguments to the use cases: load config,
//! fix the orchestration target, build the UI context, run.

pub mod build;
pub mod check;
pub mod lifecycle;
pub mod status;

use std::path::PathBuf;

use anyhow::Result;

use deckhand::config::{Config, ConfigWarning, CONFIG_FILE};
use deckhand::domain::runtime::OrchestrationTarget;

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::primitives::{ColoredText, Icon};

/// Everything a command needs before dispatching.
pub(crate) struct CommandContext {
    pub config: Config,
    pub config_warnings: Vec<ConfigWarning>,
    pub target: OrchestrationTarget,
    pub ui: UiContext,
}

impl CommandContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_dir = match &cli.project_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        let config_path = project_dir.join(CONFIG_FILE);
        let (config, config_warnings) = if config_path.exists() {
            Config::load_with_warnings(&config_path)?
        } else {
            (Config::default(), Vec::new())
        };
        let config = config.with_env_overrides();

        let compose_file = cli
            .compose_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.stack.compose_file));
        let env_file = cli
            .env_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.stack.env_file));

        let target = OrchestrationTarget::new(
            &project_dir,
            &compose_file.to_string_lossy(),
            &env_file.to_string_lossy(),
        );

        let ui = UiContext::new(cli.json, cli.verbose, cli.color.map(Into::into), &config);

        Ok(Self {
            config,
            config_warnings,
            target,
            ui,
        })
    }

    /// Print unknown-key config warnings; never fatal.
    pub fn print_config_warnings(&self) {
        if self.ui.json {
            for warning in &self.config_warnings {
                println!(
                    "{}",
                    serde_json::json!({
                        "event": "config_warning",
                        "key": warning.key,
                        "file": warning.file.display().to_string(),
                    })
                );
            }
            return;
        }

        for warning in &self.config_warnings {
            eprintln!(
                "{} {}",
                Icon::Warning.colored(self.ui.color, self.ui.unicode),
                ColoredText::warning(format!(
                    "unknown configuration key '{}' in {}",
                    warning.key,
                    warning.file.display()
                ))
                .render(self.ui.color)
            );
        }
    }
}
