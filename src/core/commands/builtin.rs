use std::io::Write;

use super::{Command, CommandContext, CommandError, Dispatch};

/// Cursor home followed by erase-display.
pub const CLEAR_SCREEN: &str = "\x1b[1;1H\x1b[2J";

#[derive(Clone)]
pub struct ClrCommand;

impl Command for ClrCommand {
    fn execute(
        &self,
        _args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<Dispatch, CommandError> {
        let mut out = ctx.output()?;
        out.write_all(CLEAR_SCREEN.as_bytes())?;
        out.flush()?;
        Ok(Dispatch::Done)
    }
}

/// Blocks until one line arrives from the controlling terminal.
#[derive(Clone)]
pub struct PauseCommand;

impl Command for PauseCommand {
    fn execute(
        &self,
        _args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<Dispatch, CommandError> {
        let mut discarded = String::new();
        ctx.terminal().read_line(&mut discarded)?;
        Ok(Dispatch::Done)
    }
}

#[derive(Clone)]
pub struct QuitCommand;

impl Command for QuitCommand {
    fn execute(
        &self,
        _args: &[String],
        _ctx: &mut CommandContext<'_>,
    ) -> Result<Dispatch, CommandError> {
        Ok(Dispatch::Quit)
    }
}
