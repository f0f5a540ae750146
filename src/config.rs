//! Tool configuration
//!
//! Loaded from `deckhand.toml` in the project directory. Everything has a
//! default, so a bare project with nothing but a compose file and an env
//! file works out of the box. The orchestration target (compose file, env
//! file) is fixed at startup - CLI flags override the file, nothing is
//! re-read at runtime.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, DispatchResult};

pub const CONFIG_FILE: &str = "deckhand.toml";

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// The `[stack]` section - which compose deployment this tool drives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackConfig {
    /// Compose definition file, relative to the project directory
    #[serde(default = "default_compose_file")]
    pub compose_file: String,

    /// Environment file consumed by compose, relative to the project directory
    #[serde(default = "default_env_file")]
    pub env_file: String,

    /// Seconds to wait after build-and-start before the status check
    #[serde(default = "default_grace_secs")]
    pub grace_secs: u64,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            compose_file: default_compose_file(),
            env_file: default_env_file(),
            grace_secs: default_grace_secs(),
        }
    }
}

fn default_compose_file() -> String {
    "docker-compose.yml".to_string()
}

fn default_env_file() -> String {
    ".env".to_string()
}

fn default_grace_secs() -> u64 {
    5
}

/// The `[env]` section - validation of the deployment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Keys that must be present and non-empty; absences are warnings.
    #[serde(default = "default_required_keys")]
    pub required: Vec<String>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            required: default_required_keys(),
        }
    }
}

fn default_required_keys() -> Vec<String> {
    [
        "MAIN_URL",
        "FRONTEND_URL",
        "NEXT_PUBLIC_BACKEND_URL",
        "JWT_SECRET",
        "DATABASE_URL",
        "REDIS_URL",
        "STORAGE_PROVIDER",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// The `[output]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub stack: StackConfig,

    #[serde(default)]
    pub env: EnvConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DispatchResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (unknown keys).
    pub fn load_with_warnings(path: &Path) -> DispatchResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| DispatchError::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|key| ConfigWarning {
                key,
                file: path.to_path_buf(),
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load from the project config file, or fall back to defaults.
    pub fn load_or_default(project_dir: &Path) -> Self {
        let path = project_dir.join(CONFIG_FILE);
        if path.exists() {
            if let Ok(config) = Self::load(&path) {
                return config.with_env_overrides();
            }
        }
        Self::default().with_env_overrides()
    }

    /// Apply environment variable overrides (DECKHAND_* prefix)
    pub fn with_env_overrides(mut self) -> Self {
        if std::env::var("DECKHAND_NO_COLOR").is_ok() {
            self.output.color = ColorMode::Never;
        }

        if let Ok(val) = std::env::var("DECKHAND_GRACE_SECS") {
            if let Ok(secs) = val.parse() {
                self.stack.grace_secs = secs;
            }
        }

        self
    }
}
