//! Subprocess execution
//!
//! Probes run silently; dispatched actions stream to the operator's
//! terminal with inherited stdio and block until the child exits.

use std::io;
use std::process::{Command, Stdio};

use crate::domain::ports::{Invocation, ProcessRunner};
use crate::error::{DispatchError, DispatchResult};

/// Exit code reported when the child was killed by a signal.
const SIGNAL_EXIT: i32 = 130;

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn probe(&self, argv: &[String]) -> bool {
        let Some((program, args)) = argv.split_first() else {
            return false;
        };

        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn run(&self, invocation: &Invocation) -> DispatchResult<i32> {
        let Some((program, args)) = invocation.argv.split_first() else {
            return Err(DispatchError::Io(io::Error::other("empty invocation")));
        };

        let status = Command::new(program)
            .args(args)
            .current_dir(&invocation.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        Ok(status.code().unwrap_or(SIGNAL_EXIT))
    }
}
