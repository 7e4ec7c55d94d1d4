use std::io::{self, BufRead, Write};

mod executor;

use crate::{
    config::ShellConfig,
    core::{
        commands::{CommandExecutor, Flow},
        ShellState,
    },
    error::ShellError,
    highlight::Highlighter,
    input::LineSource,
    parse::truncate_line,
};

use executor::LineHandler;

pub struct Shell<I: LineSource> {
    pub(crate) input: I,
    pub(crate) state: ShellState,
    pub(crate) config: ShellConfig,
    pub(crate) executor: CommandExecutor,
    pub(crate) highlighter: Highlighter,
    pub(crate) stdout: Box<dyn Write>,
    /// Source for `pause`; stdin when unset.
    pub(crate) terminal: Option<Box<dyn BufRead>>,
}

impl<I: LineSource> Shell<I> {
    pub fn new(input: I, state: ShellState, config: ShellConfig) -> Self {
        Shell {
            input,
            state,
            config,
            executor: CommandExecutor::new(),
            highlighter: Highlighter::new(),
            stdout: Box::new(io::stdout()),
            terminal: None,
        }
    }

    pub fn with_output(mut self, stdout: Box<dyn Write>) -> Self {
        self.stdout = stdout;
        self
    }

    pub fn with_terminal(mut self, terminal: Box<dyn BufRead>) -> Self {
        self.terminal = Some(terminal);
        self
    }

    pub fn with_highlighter(mut self, highlighter: Highlighter) -> Self {
        self.highlighter = highlighter;
        self
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Runs until `quit` or end of input and returns the process exit
    /// status. Failures of a single line are reported and the loop goes on.
    pub fn run(&mut self) -> Result<u8, ShellError> {
        loop {
            let prompt = self.input.is_interactive().then(|| {
                self.highlighter
                    .prompt(self.state.cwd(), &self.config.prompt_suffix)
            });

            let Some(mut line) = self.input.next_line(prompt.as_deref())? else {
                log::debug!("end of input");
                break;
            };
            truncate_line(&mut line, self.config.max_line);

            match self.execute_line(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => {
                    log::debug!("quit");
                    break;
                }
                Err(e) => eprintln!("{}", self.highlighter.error(&e.to_string())),
            }
        }

        self.stdout.flush()?;
        Ok(0)
    }
}
