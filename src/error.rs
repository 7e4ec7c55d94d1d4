use std::path::PathBuf;

use thiserror::Error;

use crate::core::commands::CommandError;
use crate::process::ProcessError;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("{0}")]
    Usage(String),
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot open script {}: {source}", .path.display())]
    Script {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Process(#[from] ProcessError),
    #[error(transparent)]
    Command(#[from] CommandError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let errors = vec![
            ShellError::Usage("usage: myshell [<scriptfile>]".to_string()),
            ShellError::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom")),
            ShellError::Script {
                path: PathBuf::from("/no/such/script"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            },
            ShellError::Process(ProcessError::EmptyCommand),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }

    #[test]
    fn test_script_error_names_path() {
        let err = ShellError::Script {
            path: PathBuf::from("/tmp/batch.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/tmp/batch.txt"));
    }
}
