use std::env;
use std::io::Write;

use super::{Command, CommandContext, CommandError, Dispatch};
use crate::parse::strip_control;

/// Writes its arguments back to back, with no separator, then a newline.
#[derive(Clone)]
pub struct EchoCommand;

impl Command for EchoCommand {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<Dispatch, CommandError> {
        let text: String = strip_control(args).iter().skip(1).map(String::as_str).collect();
        let mut out = ctx.output()?;
        writeln!(out, "{}", text)?;
        out.flush()?;
        Ok(Dispatch::Done)
    }
}

#[derive(Clone)]
pub struct EnvironCommand;

impl Command for EnvironCommand {
    fn execute(
        &self,
        _args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<Dispatch, CommandError> {
        let mut out = ctx.output()?;
        for (key, value) in env::vars_os() {
            writeln!(out, "{}={}", key.to_string_lossy(), value.to_string_lossy())?;
        }
        out.flush()?;
        Ok(Dispatch::Done)
    }
}
