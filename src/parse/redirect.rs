use std::path::{Path, PathBuf};

use super::is_control_token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Truncate,
    Append,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRedirect {
    pub path: PathBuf,
    pub mode: OutputMode,
}

/// Per-line execution settings gathered from control tokens. A fresh value
/// is built for every input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandStatus {
    pub foreground: bool,
    pub input: Option<PathBuf>,
    pub output: Option<OutputRedirect>,
    pub shell_path: PathBuf,
}

impl CommandStatus {
    pub fn new(shell_path: &Path) -> Self {
        Self {
            foreground: true,
            input: None,
            output: None,
            shell_path: shell_path.to_path_buf(),
        }
    }

    pub fn is_redirected(&self) -> bool {
        self.input.is_some() || self.output.is_some()
    }
}

/// Scans `args` once, left to right, and records every redirection and
/// background marker into `status`. The token slice is left untouched.
///
/// A later marker of the same kind replaces an earlier one. A marker whose
/// operand is missing, or is itself a control token, is ignored.
pub fn scan_redirection(args: &[String], status: &mut CommandStatus) {
    let mut i = 0;
    while i < args.len() {
        let operand = args
            .get(i + 1)
            .filter(|next| !is_control_token(next))
            .map(PathBuf::from);

        match args[i].as_str() {
            "<" => {
                if let Some(path) = operand {
                    status.input = Some(path);
                    i += 1;
                }
            }
            marker @ (">" | ">>") => {
                if let Some(path) = operand {
                    let mode = if marker == ">" {
                        OutputMode::Truncate
                    } else {
                        OutputMode::Append
                    };
                    status.output = Some(OutputRedirect { path, mode });
                    i += 1;
                }
            }
            "&" => status.foreground = false,
            _ => {}
        }
        i += 1;
    }
}
