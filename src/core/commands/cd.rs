use std::io::Write;

use super::{Command, CommandContext, CommandError, Dispatch};
use crate::parse::strip_control;

/// Tracks the working directory without calling `chdir`: only the shell's
/// recorded directory and `PWD` change.
#[derive(Clone)]
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<Dispatch, CommandError> {
        let args = strip_control(args);
        let cwd = ctx.state.cwd().to_string();

        match args.get(1) {
            None => {
                let mut out = ctx.output()?;
                writeln!(out, "{}", cwd)?;
                out.flush()?;
            }
            Some(target) => {
                let next = resolve(&cwd, target);
                log::debug!("cd {} -> {}", cwd, next);
                ctx.state.set_cwd(next);
            }
        }
        Ok(Dispatch::Done)
    }
}

fn resolve(cwd: &str, target: &str) -> String {
    match target {
        "." | "./" => cwd.to_string(),
        t if t.starts_with("..") => parent_of(cwd),
        t => t.to_string(),
    }
}

fn parent_of(cwd: &str) -> String {
    let trimmed = cwd.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(i) => trimmed[..i].to_string(),
    }
}
