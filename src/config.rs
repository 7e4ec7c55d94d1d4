use std::path::PathBuf;

use crate::flags::Flags;

pub const DEFAULT_MAX_ARGS: usize = 64;
pub const DEFAULT_MAX_LINE: usize = 1024;
const HISTORY_FILE: &str = ".myshell_history";

#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Upper bound on tokens kept from one input line.
    pub max_args: usize,
    /// Input lines are truncated to this many bytes before tokenizing.
    pub max_line: usize,
    pub prompt_suffix: String,
    pub help_file: String,
    pub pager: String,
    pub history_file: Option<PathBuf>,
    pub history_size: usize,
    pub quiet: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            max_args: DEFAULT_MAX_ARGS,
            max_line: DEFAULT_MAX_LINE,
            prompt_suffix: "==>".to_string(),
            help_file: "readme".to_string(),
            pager: "more".to_string(),
            history_file: None,
            history_size: 1000,
            quiet: false,
        }
    }
}

impl ShellConfig {
    pub fn from_flags(flags: &Flags) -> Self {
        Self {
            history_file: dirs::home_dir().map(|home| home.join(HISTORY_FILE)),
            quiet: flags.is_set("quiet"),
            ..Self::default()
        }
    }
}
