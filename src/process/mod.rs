use thiserror::Error;

pub mod executor;
pub mod signal;

pub use executor::{LaunchOutcome, Launcher, EXEC_FAILURE_STATUS};

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("no command to run")]
    EmptyCommand,
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("fork failed: {0}")]
    Fork(std::io::Error),
    #[error("wait failed: {0}")]
    Wait(std::io::Error),
    #[error("signal setup failed: {0}")]
    Signal(std::io::Error),
}
