//! Action dispatch
//!
//! One action per invocation: confirm if the policy demands it, run the
//! mapped compose command in the foreground, then run the post-check.
//! Failures are never retried; a non-zero exit becomes `SubprocessFailed`
//! carrying the verbatim code.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::action::{Action, ConfirmPolicy, PostCheck};
use crate::domain::ports::{ProcessRunner, Prompter};
use crate::domain::runtime::{ComposeRuntime, OrchestrationTarget};
use crate::error::{DispatchError, DispatchResult};

/// Exact string required to run the destructive clean-up.
pub const CONFIRM_AFFIRMATIVE: &str = "yes";

/// SIGINT termination of a foreground child.
const SIGINT_EXIT: i32 = 130;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    Completed,
    /// Confirmation declined; nothing ran.
    Cancelled,
    /// Operator interrupted a streaming action; normal termination.
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub action: Action,
    pub status: OutcomeStatus,
}

/// Dispatches one selected action against a resolved runtime.
pub struct DispatchUseCase<'a, R: ProcessRunner, P: Prompter> {
    runner: &'a R,
    prompter: &'a P,
    runtime: ComposeRuntime,
    target: &'a OrchestrationTarget,
    grace: Duration,
    interrupted: Arc<AtomicBool>,
}

impl<'a, R: ProcessRunner, P: Prompter> DispatchUseCase<'a, R, P> {
    pub fn new(
        runner: &'a R,
        prompter: &'a P,
        runtime: ComposeRuntime,
        target: &'a OrchestrationTarget,
        grace: Duration,
        interrupted: Arc<AtomicBool>,
    ) -> Self {
        Self {
            runner,
            prompter,
            runtime,
            target,
            grace,
            interrupted,
        }
    }

    pub fn execute(&self, action: Action) -> DispatchResult<DispatchOutcome> {
        let spec = action.spec();

        if spec.confirm == ConfirmPolicy::TypedYes {
            let answer = self.prompter.confirm_typed(
                "This permanently removes containers AND named volumes. Type 'yes' to confirm",
            )?;
            if answer.trim() != CONFIRM_AFFIRMATIVE {
                return Ok(DispatchOutcome {
                    action,
                    status: OutcomeStatus::Cancelled,
                });
            }
        }

        let invocation = self.runtime.invocation(self.target, spec.compose_args);
        let code = self.runner.run(&invocation)?;

        if code != 0 {
            if spec.interruptible && (code == SIGINT_EXIT || self.interrupted.load(Ordering::SeqCst))
            {
                return Ok(DispatchOutcome {
                    action,
                    status: OutcomeStatus::Interrupted,
                });
            }
            return Err(DispatchError::SubprocessFailed {
                command: invocation.display(),
                code,
            });
        }

        match spec.post {
            PostCheck::None => {}
            PostCheck::Status => self.report_status()?,
            PostCheck::StatusAfterGrace => {
                if !self.grace.is_zero() {
                    std::thread::sleep(self.grace);
                }
                self.report_status()?;
            }
        }

        Ok(DispatchOutcome {
            action,
            status: OutcomeStatus::Completed,
        })
    }

    /// `ps` against the same resolved runtime. A failure here is surfaced
    /// like any other subprocess failure.
    fn report_status(&self) -> DispatchResult<()> {
        let invocation = self.runtime.invocation(self.target, &["ps"]);
        let code = self.runner.run(&invocation)?;
        if code != 0 {
            return Err(DispatchError::SubprocessFailed {
                command: invocation.display(),
                code,
            });
        }
        Ok(())
    }
}
