use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use thiserror::Error;

mod builtin;
mod cd;
mod output;
mod rewrite;

pub use builtin::{ClrCommand, PauseCommand, QuitCommand, CLEAR_SCREEN};
pub use cd::CdCommand;
pub use output::{EchoCommand, EnvironCommand};
pub use rewrite::{DirCommand, HelpCommand};

use crate::config::ShellConfig;
use crate::core::ShellState;
use crate::error::ShellError;
use crate::parse::{CommandStatus, OutputMode};
use crate::process::{LaunchOutcome, Launcher};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("cannot open {} for writing: {source}", .path.display())]
    Redirection { path: PathBuf, source: io::Error },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// What the dispatcher decided for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Done,
    Quit,
    /// Run this argument vector as an external program.
    External(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything a built-in may touch while it runs.
pub struct CommandContext<'a> {
    pub state: &'a mut ShellState,
    pub status: &'a CommandStatus,
    pub config: &'a ShellConfig,
    stdout: &'a mut dyn Write,
    terminal: &'a mut dyn BufRead,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        state: &'a mut ShellState,
        status: &'a CommandStatus,
        config: &'a ShellConfig,
        stdout: &'a mut dyn Write,
        terminal: &'a mut dyn BufRead,
    ) -> Self {
        Self {
            state,
            status,
            config,
            stdout,
            terminal,
        }
    }

    /// Opens the stream this command's output goes to. A redirected target
    /// lives only as long as the returned value, so the shell's own stdout
    /// is untouched once it is dropped.
    pub fn output(&mut self) -> Result<Output<'_>, CommandError> {
        let Some(redirect) = &self.status.output else {
            return Ok(Output::Inherited(&mut *self.stdout));
        };

        let mut options = OpenOptions::new();
        match redirect.mode {
            OutputMode::Truncate => {
                options.write(true).create(true).truncate(true);
            }
            OutputMode::Append => {
                options.append(true).create(true);
            }
        }
        let file = options
            .open(&redirect.path)
            .map_err(|source| CommandError::Redirection {
                path: redirect.path.clone(),
                source,
            })?;
        Ok(Output::Redirected(BufWriter::new(file)))
    }

    pub fn terminal(&mut self) -> &mut dyn BufRead {
        &mut *self.terminal
    }

    pub fn flush_stdout(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

pub enum Output<'o> {
    Inherited(&'o mut dyn Write),
    Redirected(BufWriter<File>),
}

impl Write for Output<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Inherited(out) => out.write(buf),
            Output::Redirected(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Inherited(out) => out.flush(),
            Output::Redirected(file) => file.flush(),
        }
    }
}

pub trait Command {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>)
        -> Result<Dispatch, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Clr(ClrCommand),
    Dir(DirCommand),
    Echo(EchoCommand),
    Environ(EnvironCommand),
    Help(HelpCommand),
    Pause(PauseCommand),
    Quit(QuitCommand),
}

impl Command for CommandType {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<Dispatch, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, ctx),
            CommandType::Clr(cmd) => cmd.execute(args, ctx),
            CommandType::Dir(cmd) => cmd.execute(args, ctx),
            CommandType::Echo(cmd) => cmd.execute(args, ctx),
            CommandType::Environ(cmd) => cmd.execute(args, ctx),
            CommandType::Help(cmd) => cmd.execute(args, ctx),
            CommandType::Pause(cmd) => cmd.execute(args, ctx),
            CommandType::Quit(cmd) => cmd.execute(args, ctx),
        }
    }
}

#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
    launcher: Launcher,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd", CommandType::Cd(CdCommand));
        commands.insert("clr", CommandType::Clr(ClrCommand));
        commands.insert("dir", CommandType::Dir(DirCommand));
        commands.insert("echo", CommandType::Echo(EchoCommand));
        commands.insert("environ", CommandType::Environ(EnvironCommand));
        commands.insert("help", CommandType::Help(HelpCommand));
        commands.insert("pause", CommandType::Pause(PauseCommand));
        commands.insert("quit", CommandType::Quit(QuitCommand));

        Self {
            commands,
            launcher: Launcher::new(),
        }
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Resolves the first token against the built-in table. Unknown names
    /// come back as an external invocation of the original tokens.
    pub fn dispatch(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<Dispatch, CommandError> {
        let Some(name) = args.first() else {
            return Ok(Dispatch::Done);
        };
        match self.commands.get(name.as_str()) {
            Some(cmd) => cmd.execute(args, ctx),
            None => Ok(Dispatch::External(args.to_vec())),
        }
    }

    pub fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<Flow, ShellError> {
        match self.dispatch(args, ctx)? {
            Dispatch::Done => Ok(Flow::Continue),
            Dispatch::Quit => Ok(Flow::Quit),
            Dispatch::External(argv) => {
                ctx.flush_stdout()?;
                match self.launcher.launch(&argv, ctx.status)? {
                    LaunchOutcome::Exited(code) if code != 0 => {
                        log::debug!("{} exited with status {}", argv[0], code);
                    }
                    LaunchOutcome::Signaled(signum) => {
                        log::debug!("{} killed by signal {}", argv[0], signum);
                    }
                    _ => {}
                }
                Ok(Flow::Continue)
            }
        }
    }
}
