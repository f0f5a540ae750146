//! Common test utilities for deckhand CLI tests.
//!
//! Provides `TestEnv`: an isolated project directory with stub `docker`,
//! `docker-compose` and `sudo` binaries placed first on `PATH`. Every stub
//! appends its full command line to an invocation log, so tests can assert
//! exactly which orchestration commands ran - including that none did.
//!
//! Stub behavior is steered through environment variables:
//! - `STUB_DAEMON`: `down` (daemon never answers) or `sudo-only`
//!   (unelevated `docker info` fails, elevated succeeds)
//! - `STUB_NO_PLUGIN` / `STUB_NO_STANDALONE`: compose CLI probes fail
//! - `STUB_COMPOSE_EXIT`: exit code for compose action commands

use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

const DOCKER_STUB: &str = r#"#!/bin/sh
echo "docker $*" >> "$STUB_LOG"
case "$1" in
  --version)
    exit 0
    ;;
  info)
    [ "$STUB_DAEMON" = "down" ] && exit 1
    [ "$STUB_DAEMON" = "sudo-only" ] && [ -z "$STUB_ELEVATED" ] && exit 1
    exit 0
    ;;
  compose)
    [ "$STUB_NO_PLUGIN" = "1" ] && exit 1
    shift
    while [ $# -gt 0 ]; do
      case "$1" in
        -f|--env-file) shift 2 ;;
        *) break ;;
      esac
    done
    [ "$1" = "version" ] && exit 0
    exit "${STUB_COMPOSE_EXIT:-0}"
    ;;
esac
exit 0
"#;

const DOCKER_COMPOSE_STUB: &str = r#"#!/bin/sh
echo "docker-compose $*" >> "$STUB_LOG"
[ "$STUB_NO_STANDALONE" = "1" ] && exit 1
while [ $# -gt 0 ]; do
  case "$1" in
    -f|--env-file) shift 2 ;;
    *) break ;;
  esac
done
[ "$1" = "--version" ] && exit 0
exit "${STUB_COMPOSE_EXIT:-0}"
"#;

const SUDO_STUB: &str = r#"#!/bin/sh
echo "sudo $*" >> "$STUB_LOG"
[ "$1" = "-n" ] && shift
STUB_ELEVATED=1
export STUB_ELEVATED
exec "$@"
"#;

/// A complete env file: every default critical key is set.
pub const FULL_ENV: &str = "\
MAIN_URL=https://app.example.com
FRONTEND_URL=https://app.example.com
NEXT_PUBLIC_BACKEND_URL=https://app.example.com/api
JWT_SECRET=test-secret
DATABASE_URL=postgres://user:pass@db:5432/app
REDIS_URL=redis://redis:6379
STORAGE_PROVIDER=local
";

/// Result of running the deckhand binary.
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Isolated test environment: project dir, stub PATH, invocation log.
pub struct TestEnv {
    pub project: TempDir,
    stub_bin: TempDir,
    log_path: PathBuf,
    env_vars: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        let project = TempDir::new().expect("create project dir");
        let stub_bin = TempDir::new().expect("create stub bin dir");
        let log_path = stub_bin.path().join("invocations.log");

        write_stub(stub_bin.path(), "docker", DOCKER_STUB);
        write_stub(stub_bin.path(), "docker-compose", DOCKER_COMPOSE_STUB);
        write_stub(stub_bin.path(), "sudo", SUDO_STUB);

        fs::write(project.path().join(".env"), FULL_ENV).expect("write .env");
        fs::write(
            project.path().join("docker-compose.yml"),
            "services:\n  app:\n    build: .\n    ports:\n      - \"5000:5000\"\n",
        )
        .expect("write compose file");
        // No grace sleep in tests.
        fs::write(project.path().join("deckhand.toml"), "[stack]\ngrace_secs = 0\n")
            .expect("write deckhand.toml");

        Self {
            project,
            stub_bin,
            log_path,
            env_vars: Vec::new(),
        }
    }

    pub fn set_env(&mut self, key: &str, value: &str) {
        self.env_vars.push((key.to_string(), value.to_string()));
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project.path().join(relative)
    }

    pub fn remove_env_file(&self) {
        fs::remove_file(self.project_path(".env")).expect("remove .env");
    }

    /// Run deckhand with no stdin input.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_stdin(args, "")
    }

    /// Run deckhand with the given bytes piped to stdin.
    pub fn run_with_stdin(&self, args: &[&str], stdin_data: &str) -> TestResult {
        let path = format!(
            "{}:{}",
            self.stub_bin.path().display(),
            std::env::var("PATH").unwrap_or_default()
        );

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_deckhand"));
        cmd.current_dir(self.project.path())
            .args(args)
            .env("PATH", path)
            .env("STUB_LOG", &self.log_path)
            .env("TERM", "dumb")
            .env("NO_COLOR", "1")
            .env("DECKHAND_NO_COLOR", "1")
            .env_remove("STUB_DAEMON")
            .env_remove("STUB_NO_PLUGIN")
            .env_remove("STUB_NO_STANDALONE")
            .env_remove("STUB_COMPOSE_EXIT")
            .env_remove("STUB_ELEVATED")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("failed to spawn deckhand");
        child
            .stdin
            .take()
            .expect("stdin piped")
            .write_all(stdin_data.as_bytes())
            .expect("write stdin");

        let output = child.wait_with_output().expect("wait for deckhand");

        TestResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Every stub invocation, one command line per entry.
    pub fn invocations(&self) -> Vec<String> {
        match fs::read_to_string(&self.log_path) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Orchestration invocations only - probe commands filtered out.
    pub fn compose_invocations(&self) -> Vec<String> {
        self.invocations()
            .into_iter()
            .filter(|line| !is_probe(line))
            .collect()
    }
}

fn is_probe(line: &str) -> bool {
    line.ends_with("info") || line.ends_with("version")
}

fn write_stub(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    fs::write(&path, content).expect("write stub");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod stub");
}
