//! Precondition checks
//!
//! Before any menu is shown: the engine binary must exist, the daemon must
//! answer a probe (unelevated first, then `sudo -n`), a compose CLI must be
//! installed, and the environment file must be on disk. Each failure has a
//! distinct error; the dispatcher exits before any orchestration command.
//!
//! The probe that succeeds determines the invocation form (elevation +
//! flavor) for the remainder of the run.

use crate::domain::ports::ProcessRunner;
use crate::domain::runtime::{ComposeFlavor, ComposeRuntime, Elevation, OrchestrationTarget};
use crate::error::{DispatchError, DispatchResult};

/// Result of one named precondition check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightCheck {
    pub name: &'static str,
    pub ok: bool,
    pub detail: String,
}

/// All checks, in the order they ran.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreflightReport {
    pub checks: Vec<PreflightCheck>,
}

impl PreflightReport {
    pub fn ok(&self) -> bool {
        self.checks.iter().all(|c| c.ok)
    }

    fn push(&mut self, name: &'static str, ok: bool, detail: impl Into<String>) {
        self.checks.push(PreflightCheck {
            name,
            ok,
            detail: detail.into(),
        });
    }
}

/// Preflight resolution over a process runner.
pub struct Preflight<'a, R: ProcessRunner> {
    runner: &'a R,
    target: &'a OrchestrationTarget,
}

impl<'a, R: ProcessRunner> Preflight<'a, R> {
    pub fn new(runner: &'a R, target: &'a OrchestrationTarget) -> Self {
        Self { runner, target }
    }

    /// Fail-fast resolution used by the dispatching commands.
    pub fn resolve(&self) -> DispatchResult<ComposeRuntime> {
        self.check_engine()?;
        let elevation = self.check_daemon()?;
        let flavor = self.check_compose(elevation)?;
        self.check_env_file()?;
        Ok(ComposeRuntime { elevation, flavor })
    }

    /// Run every check and report all outcomes, for `deckhand check`.
    pub fn report(&self) -> (PreflightReport, Option<ComposeRuntime>) {
        let mut report = PreflightReport::default();

        let engine_ok = self.check_engine().is_ok();
        report.push(
            "engine",
            engine_ok,
            if engine_ok {
                "docker is installed".to_string()
            } else {
                "docker not found on PATH".to_string()
            },
        );

        let elevation = if engine_ok { self.check_daemon().ok() } else { None };
        report.push(
            "daemon",
            elevation.is_some(),
            match elevation {
                Some(Elevation::Direct) => "daemon reachable".to_string(),
                Some(Elevation::Sudo) => "daemon reachable (elevated)".to_string(),
                None => "daemon did not answer `docker info`, with or without sudo".to_string(),
            },
        );

        let flavor = elevation.and_then(|e| self.check_compose(e).ok());
        report.push(
            "compose",
            flavor.is_some(),
            match flavor {
                Some(ComposeFlavor::Plugin) => "docker compose plugin available".to_string(),
                Some(ComposeFlavor::Standalone) => "standalone docker-compose available".to_string(),
                None => "neither `docker compose` nor `docker-compose` answered".to_string(),
            },
        );

        let env_ok = self.check_env_file().is_ok();
        report.push(
            "env-file",
            env_ok,
            if env_ok {
                format!("{} present", self.target.env_file.display())
            } else {
                format!("{} not found", self.target.env_file.display())
            },
        );

        let runtime = match (elevation, flavor, env_ok) {
            (Some(elevation), Some(flavor), true) => Some(ComposeRuntime { elevation, flavor }),
            _ => None,
        };

        (report, runtime)
    }

    fn check_engine(&self) -> DispatchResult<()> {
        let argv = ComposeRuntime::probe_argv(Elevation::Direct, &["docker", "--version"]);
        if self.runner.probe(&argv) {
            Ok(())
        } else {
            Err(DispatchError::ToolMissing {
                tool: "docker".to_string(),
            })
        }
    }

    fn check_daemon(&self) -> DispatchResult<Elevation> {
        let direct = ComposeRuntime::probe_argv(Elevation::Direct, &["docker", "info"]);
        if self.runner.probe(&direct) {
            return Ok(Elevation::Direct);
        }

        let elevated = ComposeRuntime::probe_argv(Elevation::Sudo, &["docker", "info"]);
        if self.runner.probe(&elevated) {
            return Ok(Elevation::Sudo);
        }

        Err(DispatchError::DaemonUnreachable)
    }

    fn check_compose(&self, elevation: Elevation) -> DispatchResult<ComposeFlavor> {
        let plugin = ComposeRuntime::probe_argv(elevation, &["docker", "compose", "version"]);
        if self.runner.probe(&plugin) {
            return Ok(ComposeFlavor::Plugin);
        }

        let standalone = ComposeRuntime::probe_argv(elevation, &["docker-compose", "--version"]);
        if self.runner.probe(&standalone) {
            return Ok(ComposeFlavor::Standalone);
        }

        Err(DispatchError::ToolMissing {
            tool: "docker compose plugin (or docker-compose)".to_string(),
        })
    }

    fn check_env_file(&self) -> DispatchResult<()> {
        if self.target.env_file.is_file() {
            Ok(())
        } else {
            Err(DispatchError::ConfigMissing {
                path: self.target.env_file.clone(),
            })
        }
    }
}
