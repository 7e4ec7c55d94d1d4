use std::path::PathBuf;

use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::LineSource;
use crate::config::ShellConfig;
use crate::error::ShellError;

/// Line editor on the controlling terminal, with persistent history.
pub struct InteractiveInput {
    editor: DefaultEditor,
    history_file: Option<PathBuf>,
    quiet: bool,
}

impl InteractiveInput {
    pub fn new(config: &ShellConfig) -> Result<Self, ShellError> {
        let mut editor = DefaultEditor::new()?;
        editor.set_max_history_size(config.history_size)?;
        editor.set_auto_add_history(true);

        if let Some(path) = &config.history_file {
            if let Err(e) = editor.load_history(path) {
                log::debug!("no history loaded from {}: {}", path.display(), e);
            }
        }

        Ok(Self {
            editor,
            history_file: config.history_file.clone(),
            quiet: config.quiet,
        })
    }
}

impl LineSource for InteractiveInput {
    fn next_line(&mut self, prompt: Option<&str>) -> Result<Option<String>, ShellError> {
        match self.editor.readline(prompt.unwrap_or_default()) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) => {
                if !self.quiet {
                    println!("Use 'quit' to leave the shell");
                }
                Ok(Some(String::new()))
            }
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

impl Drop for InteractiveInput {
    fn drop(&mut self) {
        if let Some(path) = &self.history_file {
            if let Err(e) = self.editor.save_history(path) {
                log::warn!("could not save history to {}: {}", path.display(), e);
            }
        }
    }
}
