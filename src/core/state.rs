use std::env;
use std::path::{Path, PathBuf};

use crate::config::ShellConfig;
use crate::error::ShellError;

const SHELL_NAME: &str = "myshell";

/// Process-wide shell context: the tracked working directory and the paths
/// fixed at startup. The `cd` built-in is the only writer of the working
/// directory.
#[derive(Debug, Clone)]
pub struct ShellState {
    cwd: String,
    shell_path: PathBuf,
    help_path: PathBuf,
    /// Mirror `cd` into the process environment.
    export_pwd: bool,
}

impl ShellState {
    pub fn new(cwd: impl Into<String>, shell_path: PathBuf, help_path: PathBuf) -> Self {
        Self {
            cwd: cwd.into(),
            shell_path,
            help_path,
            export_pwd: false,
        }
    }

    /// Builds the state from the invoking environment, publishes `SHELL`
    /// and keeps `PWD` in step with `cd` from then on.
    pub fn from_env(config: &ShellConfig) -> Result<Self, ShellError> {
        let mut state = Self::discover(config)?;
        env::set_var("SHELL", &state.shell_path);
        state.export_pwd = true;
        Ok(state)
    }

    /// Reads the startup directory and resolves the shell and help paths
    /// without touching the environment.
    pub fn discover(config: &ShellConfig) -> Result<Self, ShellError> {
        let cwd = match env::var("PWD") {
            Ok(pwd) if !pwd.is_empty() => pwd,
            _ => env::current_dir()?.to_string_lossy().into_owned(),
        };
        let startup_dir = PathBuf::from(&cwd);

        let shell_path = env::current_exe()
            .and_then(|exe| exe.canonicalize())
            .unwrap_or_else(|e| {
                log::debug!("cannot resolve own executable: {}", e);
                startup_dir.join(SHELL_NAME)
            });

        let help_path = startup_dir.join(&config.help_file);
        log::debug!(
            "startup cwd {}, SHELL={}, help at {}",
            cwd,
            shell_path.display(),
            help_path.display()
        );

        Ok(Self::new(cwd, shell_path, help_path))
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn shell_path(&self) -> &Path {
        &self.shell_path
    }

    pub fn help_path(&self) -> &Path {
        &self.help_path
    }

    /// Records a new working directory, mirrored into `PWD` for states built
    /// by `from_env`.
    pub(crate) fn set_cwd(&mut self, dir: String) {
        if self.export_pwd {
            env::set_var("PWD", &dir);
        }
        self.cwd = dir;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_paths() {
        let state = ShellState::new(
            "/home/user",
            PathBuf::from("/opt/myshell/myshell"),
            PathBuf::from("/opt/myshell/readme"),
        );
        assert_eq!(state.cwd(), "/home/user");
        assert_eq!(state.shell_path(), Path::new("/opt/myshell/myshell"));
        assert_eq!(state.help_path(), Path::new("/opt/myshell/readme"));
    }

    #[test]
    fn test_discover_resolves_paths() {
        let state = ShellState::discover(&ShellConfig::default()).unwrap();
        assert!(state.help_path().ends_with("readme"));
        assert!(state.help_path().starts_with(state.cwd()));
        assert!(!state.cwd().is_empty());
        assert!(!state.shell_path().as_os_str().is_empty());
    }

    #[test]
    fn test_detached_state_leaves_pwd_alone() {
        let mut state = ShellState::new(
            "/home/user",
            PathBuf::from("/opt/myshell/myshell"),
            PathBuf::from("/opt/myshell/readme"),
        );
        state.set_cwd("/myshell/detached/state".to_string());
        assert_eq!(state.cwd(), "/myshell/detached/state");
        assert_ne!(
            env::var("PWD").ok().as_deref(),
            Some("/myshell/detached/state")
        );
    }
}
