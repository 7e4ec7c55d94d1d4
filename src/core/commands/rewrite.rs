use super::{Command, CommandContext, CommandError, Dispatch};
use crate::parse::strip_control;

/// `dir [path]` becomes `ls -al <path>`; the tracked working directory is
/// the default path. Arguments after the path are dropped.
#[derive(Clone)]
pub struct DirCommand;

impl Command for DirCommand {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<Dispatch, CommandError> {
        let target = strip_control(args)
            .get(1)
            .cloned()
            .unwrap_or_else(|| ctx.state.cwd().to_string());

        Ok(Dispatch::External(vec![
            "ls".to_string(),
            "-al".to_string(),
            target,
        ]))
    }
}

/// Pages the help document found in the startup directory.
#[derive(Clone)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(
        &self,
        _args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<Dispatch, CommandError> {
        Ok(Dispatch::External(vec![
            ctx.config.pager.clone(),
            ctx.state.help_path().to_string_lossy().into_owned(),
        ]))
    }
}
