mod batch;
mod interactive;

pub use batch::BatchInput;
pub use interactive::InteractiveInput;

use crate::error::ShellError;

/// Where the shell loop pulls its lines from.
pub trait LineSource {
    /// Returns the next line, or `None` once input is exhausted. `prompt` is
    /// only passed for interactive sources.
    fn next_line(&mut self, prompt: Option<&str>) -> Result<Option<String>, ShellError>;

    fn is_interactive(&self) -> bool;
}
