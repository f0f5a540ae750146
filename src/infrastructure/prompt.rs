//! Operator prompts
//!
//! On a terminal the menu is an arrow-key selection (dialoguer), which
//! cannot produce an invalid choice. When stdin is piped - scripts, tests -
//! the numbered menu is printed and one line is read and validated, so the
//! selection semantics stay identical either way.

use std::io::{self, BufRead, Write};

use dialoguer::{Input, Select};
use is_terminal::IsTerminal;

use crate::domain::action::parse_selection;
use crate::domain::ports::Prompter;
use crate::error::{DispatchError, DispatchResult};

pub struct TermPrompter {
    interactive: bool,
    echo_menu: bool,
}

impl TermPrompter {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal() && io::stderr().is_terminal(),
            echo_menu: true,
        }
    }

    /// Read and validate input without printing the plain menu, for
    /// `--json` mode where stdout carries only event lines.
    pub fn quiet() -> Self {
        Self {
            echo_menu: false,
            ..Self::new()
        }
    }

    #[cfg(test)]
    fn piped() -> Self {
        Self {
            interactive: false,
            echo_menu: true,
        }
    }

    fn read_line(&self) -> DispatchResult<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TermPrompter {
    fn select(&self, prompt: &str, items: &[String]) -> DispatchResult<usize> {
        if self.interactive {
            let selection = Select::new()
                .with_prompt(prompt)
                .items(items)
                .default(0)
                .interact()
                .map_err(|e| DispatchError::Io(io::Error::other(e)))?;
            return Ok(selection);
        }

        if self.echo_menu {
            let mut stdout = io::stdout().lock();
            writeln!(stdout)?;
            for (i, item) in items.iter().enumerate() {
                writeln!(stdout, "[{}] {}", i + 1, item)?;
            }
            write!(stdout, "{} [1-{}]: ", prompt, items.len())?;
            stdout.flush()?;
        }

        let line = self.read_line()?;
        if self.echo_menu {
            // No terminal echo on a pipe; end the prompt line ourselves.
            writeln!(io::stdout())?;
        }
        parse_selection(&line, items.len())
    }

    fn confirm_typed(&self, prompt: &str) -> DispatchResult<String> {
        if self.interactive {
            let input: String = Input::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .map_err(|e| DispatchError::Io(io::Error::other(e)))?;
            return Ok(input);
        }

        if self.echo_menu {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{}: ", prompt)?;
            stdout.flush()?;
        }

        let line = self.read_line()?;
        if self.echo_menu {
            writeln!(io::stdout())?;
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piped_prompter_is_constructible() {
        // Reading stdin in unit tests would block; the piped selection and
        // confirmation paths are covered by the CLI integration tests.
        let prompter = TermPrompter::piped();
        assert!(!prompter.interactive);
    }
}
