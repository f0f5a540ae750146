//! Resolved compose runtime
//!
//! The daemon-invocation form is probed once during preflight and carried
//! in a `ComposeRuntime` value that every later invocation receives
//! explicitly. There is no mutable global "command prefix".

use std::path::{Path, PathBuf};

use crate::domain::ports::Invocation;

/// Whether compose invocations must be elevated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elevation {
    Direct,
    /// The unelevated daemon probe failed but `sudo -n` succeeded.
    Sudo,
}

/// Which compose CLI answered the version probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeFlavor {
    /// `docker compose` (v2 plugin)
    Plugin,
    /// Standalone `docker-compose`
    Standalone,
}

/// The compose deployment an invocation applies to. Fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestrationTarget {
    pub project_dir: PathBuf,
    pub compose_file: PathBuf,
    pub env_file: PathBuf,
}

impl OrchestrationTarget {
    pub fn new(project_dir: &Path, compose_file: &str, env_file: &str) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            compose_file: project_dir.join(compose_file),
            env_file: project_dir.join(env_file),
        }
    }
}

/// Invocation form resolved by preflight, used for the remainder of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeRuntime {
    pub elevation: Elevation,
    pub flavor: ComposeFlavor,
}

impl ComposeRuntime {
    /// Human-readable form of the invocation preamble, for diagnostics.
    pub fn describe(&self) -> String {
        self.preamble().join(" ")
    }

    fn preamble(&self) -> Vec<&'static str> {
        let mut argv = Vec::with_capacity(3);
        if self.elevation == Elevation::Sudo {
            argv.push("sudo");
        }
        match self.flavor {
            ComposeFlavor::Plugin => {
                argv.push("docker");
                argv.push("compose");
            }
            ComposeFlavor::Standalone => argv.push("docker-compose"),
        }
        argv
    }

    /// Assemble the full argv for a compose action against a target.
    ///
    /// The compose file and env file are always passed explicitly, and the
    /// invocation runs from the project directory, so compose re-reads the
    /// env file on every rebuild.
    pub fn invocation(&self, target: &OrchestrationTarget, action_args: &[&str]) -> Invocation {
        let mut argv: Vec<String> = self.preamble().iter().map(|s| s.to_string()).collect();
        argv.push("-f".to_string());
        argv.push(target.compose_file.display().to_string());
        argv.push("--env-file".to_string());
        argv.push(target.env_file.display().to_string());
        argv.extend(action_args.iter().map(|s| s.to_string()));

        Invocation {
            argv,
            cwd: target.project_dir.clone(),
        }
    }

    /// Argv for a probe command (daemon or version checks), elevation applied.
    pub fn probe_argv(elevation: Elevation, args: &[&str]) -> Vec<String> {
        let mut argv = Vec::new();
        if elevation == Elevation::Sudo {
            argv.push("sudo".to_string());
            argv.push("-n".to_string());
        }
        argv.extend(args.iter().map(|s| s.to_string()));
        argv
    }
}
