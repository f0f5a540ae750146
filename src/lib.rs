//! deckhand - deployment lifecycle dispatcher for Docker Compose stacks
//!
//! deckhand wraps a compose deployment with environment validation and an
//! operator-guided action menu: preflight checks (daemon reachable, compose
//! installed, env file present), a fixed set of lifecycle actions, and
//! synchronous dispatch of the mapped compose command with its exit status
//! surfaced verbatim.

pub mod application;
pub mod config;
pub mod domain;
pub mod envfile;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{DispatchOutcome, DispatchUseCase, OutcomeStatus, Preflight, PreflightReport};
pub use config::{ColorMode, Config, ConfigWarning};
pub use domain::{
    Action, BuildAction, ComposeFlavor, ComposeRuntime, Elevation, Invocation,
    OrchestrationTarget, ProcessRunner, Prompter,
};
pub use envfile::EnvFile;
pub use error::{DispatchError, DispatchResult};
pub use infrastructure::{SystemProcessRunner, TermPrompter};
