//! Lifecycle actions and their invocation descriptors
//!
//! The menu is a closed enum with an explicit mapping to an invocation
//! descriptor (compose arguments + confirmation policy + post-check), so
//! exhaustiveness is checked at compile time instead of string-matched
//! branches.

use crate::error::{DispatchError, DispatchResult};

/// Confirmation required before an action may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmPolicy {
    None,
    /// The operator must type exactly `yes`; anything else is cancellation.
    TypedYes,
}

/// Status reporting performed after a successful action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostCheck {
    None,
    /// Run `ps` immediately.
    Status,
    /// Sleep the configured grace period, then run `ps`.
    StatusAfterGrace,
}

/// How a compose invocation is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvocationSpec {
    /// Arguments appended after the compose preamble.
    pub compose_args: &'static [&'static str],
    pub confirm: ConfirmPolicy,
    pub post: PostCheck,
    /// Operator interrupt of this action is normal termination.
    pub interruptible: bool,
}

/// The lifecycle menu. Order is the menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    BuildAndStart,
    Start,
    Stop,
    Logs,
    Restart,
    CleanUp,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::BuildAndStart,
        Action::Start,
        Action::Stop,
        Action::Logs,
        Action::Restart,
        Action::CleanUp,
    ];

    /// Menu label shown to the operator.
    pub fn label(&self) -> &'static str {
        match self {
            Action::BuildAndStart => "Build images and start the stack",
            Action::Start => "Start the stack",
            Action::Stop => "Stop the stack",
            Action::Logs => "Follow service logs",
            Action::Restart => "Restart services",
            Action::CleanUp => "Remove containers and volumes",
        }
    }

    /// Short identifier used in JSON events and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Action::BuildAndStart => "build-and-start",
            Action::Start => "start",
            Action::Stop => "stop",
            Action::Logs => "logs",
            Action::Restart => "restart",
            Action::CleanUp => "clean-up",
        }
    }

    /// The invocation descriptor for this action.
    pub fn spec(&self) -> InvocationSpec {
        match self {
            Action::BuildAndStart => InvocationSpec {
                compose_args: &["up", "-d", "--build"],
                confirm: ConfirmPolicy::None,
                post: PostCheck::StatusAfterGrace,
                interruptible: false,
            },
            Action::Start => InvocationSpec {
                compose_args: &["up", "-d"],
                confirm: ConfirmPolicy::None,
                post: PostCheck::Status,
                interruptible: false,
            },
            Action::Stop => InvocationSpec {
                compose_args: &["stop"],
                confirm: ConfirmPolicy::None,
                post: PostCheck::None,
                interruptible: false,
            },
            Action::Logs => InvocationSpec {
                compose_args: &["logs", "-f"],
                confirm: ConfirmPolicy::None,
                post: PostCheck::None,
                interruptible: true,
            },
            Action::Restart => InvocationSpec {
                compose_args: &["restart"],
                confirm: ConfirmPolicy::None,
                post: PostCheck::None,
                interruptible: false,
            },
            Action::CleanUp => InvocationSpec {
                compose_args: &["down", "-v"],
                confirm: ConfirmPolicy::TypedYes,
                post: PostCheck::None,
                interruptible: false,
            },
        }
    }
}

/// The cache-aware build menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildAction {
    /// Build images, reusing the layer cache.
    Cached,
    /// Rebuild from scratch: `--no-cache --pull`.
    NoCache,
    Quit,
}

impl BuildAction {
    pub const ALL: [BuildAction; 3] = [BuildAction::Cached, BuildAction::NoCache, BuildAction::Quit];

    pub fn label(&self) -> &'static str {
        match self {
            BuildAction::Cached => "Build images (layer cache)",
            BuildAction::NoCache => "Rebuild from scratch (no cache)",
            BuildAction::Quit => "Quit",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BuildAction::Cached => "build",
            BuildAction::NoCache => "build-no-cache",
            BuildAction::Quit => "quit",
        }
    }

    /// Compose arguments, or `None` for quit.
    pub fn compose_args(&self) -> Option<&'static [&'static str]> {
        match self {
            BuildAction::Cached => Some(&["build"]),
            BuildAction::NoCache => Some(&["build", "--no-cache", "--pull"]),
            BuildAction::Quit => None,
        }
    }
}

/// Parse a raw operator line into a zero-based menu index.
///
/// The menu is numbered from 1. Anything outside `1..=len` - including
/// empty input and non-numbers - is `InvalidSelection`.
pub fn parse_selection(input: &str, len: usize) -> DispatchResult<usize> {
    let trimmed = input.trim();
    let invalid = || DispatchError::InvalidSelection {
        input: trimmed.to_string(),
        max: len,
    };

    let n: usize = trimmed.parse().map_err(|_| invalid())?;
    if (1..=len).contains(&n) {
        Ok(n - 1)
    } else {
        Err(invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_action_has_a_descriptor() {
        for action in Action::ALL {
            let spec = action.spec();
            assert!(!spec.compose_args.is_empty());
        }
    }

    #[test]
    fn descriptor_args_match_contract_table() {
        assert_eq!(Action::BuildAndStart.spec().compose_args, ["up", "-d", "--build"]);
        assert_eq!(Action::Start.spec().compose_args, ["up", "-d"]);
        assert_eq!(Action::Stop.spec().compose_args, ["stop"]);
        assert_eq!(Action::Logs.spec().compose_args, ["logs", "-f"]);
        assert_eq!(Action::Restart.spec().compose_args, ["restart"]);
        assert_eq!(Action::CleanUp.spec().compose_args, ["down", "-v"]);
    }

    #[test]
    fn only_clean_up_requires_confirmation() {
        for action in Action::ALL {
            let expected = matches!(action, Action::CleanUp);
            assert_eq!(action.spec().confirm == ConfirmPolicy::TypedYes, expected);
        }
    }

    #[test]
    fn only_logs_is_interruptible() {
        for action in Action::ALL {
            assert_eq!(action.spec().interruptible, matches!(action, Action::Logs));
        }
    }

    #[test]
    fn start_variants_report_status() {
        assert_eq!(Action::BuildAndStart.spec().post, PostCheck::StatusAfterGrace);
        assert_eq!(Action::Start.spec().post, PostCheck::Status);
        assert_eq!(Action::Stop.spec().post, PostCheck::None);
    }

    #[test]
    fn parse_selection_accepts_menu_range() {
        assert_eq!(parse_selection("1", 6).unwrap(), 0);
        assert_eq!(parse_selection("6", 6).unwrap(), 5);
        assert_eq!(parse_selection(" 3 \n", 6).unwrap(), 2);
    }

    #[test]
    fn parse_selection_rejects_out_of_range() {
        assert!(parse_selection("0", 6).is_err());
        assert!(parse_selection("7", 6).is_err());
        assert!(parse_selection("4", 3).is_err());
    }

    #[test]
    fn parse_selection_rejects_non_numbers() {
        assert!(parse_selection("", 6).is_err());
        assert!(parse_selection("start", 6).is_err());
        assert!(parse_selection("1.5", 6).is_err());
        assert!(parse_selection("-1", 6).is_err());
    }

    #[test]
    fn build_quit_has_no_invocation() {
        assert!(BuildAction::Quit.compose_args().is_none());
        assert_eq!(
            BuildAction::NoCache.compose_args().unwrap(),
            ["build", "--no-cache", "--pull"]
        );
    }
}
