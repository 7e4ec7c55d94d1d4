use std::io;

use super::Shell;
use crate::core::commands::{CommandContext, Flow};
use crate::error::ShellError;
use crate::input::LineSource;
use crate::parse::{scan_redirection, tokenize, CommandStatus};

pub(crate) trait LineHandler {
    fn execute_line(&mut self, line: &str) -> Result<Flow, ShellError>;
}

impl<I: LineSource> LineHandler for Shell<I> {
    fn execute_line(&mut self, line: &str) -> Result<Flow, ShellError> {
        let args = tokenize(line, self.config.max_args);
        if args.is_empty() {
            return Ok(Flow::Continue);
        }

        let mut status = CommandStatus::new(self.state.shell_path());
        scan_redirection(&args, &mut status);
        log::debug!(
            "{} ({}, redirected: {}, foreground: {})",
            args[0],
            if self.executor.is_builtin(&args[0]) {
                "built-in"
            } else {
                "external"
            },
            status.is_redirected(),
            status.foreground
        );

        match self.terminal.as_mut() {
            Some(terminal) => {
                let mut ctx = CommandContext::new(
                    &mut self.state,
                    &status,
                    &self.config,
                    &mut *self.stdout,
                    &mut **terminal,
                );
                self.executor.execute(&args, &mut ctx)
            }
            None => {
                // Locked per line so the line editor can read stdin in between.
                let mut stdin = io::stdin().lock();
                let mut ctx = CommandContext::new(
                    &mut self.state,
                    &status,
                    &self.config,
                    &mut *self.stdout,
                    &mut stdin,
                );
                self.executor.execute(&args, &mut ctx)
            }
        }
    }
}
