use crate::error::ShellError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
    positional: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag {
                short: "-h".to_string(),
                long: "--help".to_string(),
                description: "Print this help message".to_string(),
                value: None,
            },
        );

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-v".to_string(),
                long: "--version".to_string(),
                description: "Show version information".to_string(),
                value: None,
            },
        );

        flags.insert(
            "quiet".to_string(),
            Flag {
                short: "-q".to_string(),
                long: "--quiet".to_string(),
                description: "Suppress informational notices".to_string(),
                value: None,
            },
        );

        flags.insert(
            "debug".to_string(),
            Flag {
                short: "-d".to_string(),
                long: "--debug".to_string(),
                description: "Enable debug logging".to_string(),
                value: None,
            },
        );

        Flags {
            flags,
            positional: Vec::new(),
        }
    }

    /// Parses everything after the program name. At most one positional
    /// argument (the batch script) is accepted.
    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        for arg in args {
            let matched = self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long);

            match matched {
                Some(flag) => flag.value = Some("true".to_string()),
                None if arg.starts_with('-') && arg.len() > 1 => {
                    return Err(ShellError::Usage(format!("unknown option {}", arg)));
                }
                None => self.positional.push(arg.clone()),
            }
        }

        if self.positional.len() > 1 {
            return Err(ShellError::Usage("max args exceeded".to_string()));
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn script(&self) -> Option<&str> {
        self.positional.first().map(String::as_str)
    }

    pub fn print_help(&self, program: &str) {
        println!("Usage: {} [OPTIONS] [<scriptfile>]", program);
        println!("\nOptions:");
        let mut flags: Vec<&Flag> = self.flags.values().collect();
        flags.sort_by(|a, b| a.long.cmp(&b.long));
        for flag in flags {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}

/// Strips any leading directories from `pathname`, leaving the file name.
pub fn program_name(pathname: &str) -> &str {
    match pathname.rsplit_once('/') {
        Some((_, name)) if !name.is_empty() => name,
        _ => pathname,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Flags, ShellError> {
        let mut flags = Flags::new();
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        flags.parse(&args)?;
        Ok(flags)
    }

    #[test]
    fn test_no_arguments_is_interactive() {
        let flags = parse(&[]).unwrap();
        assert!(flags.script().is_none());
        assert!(!flags.is_set("quiet"));
    }

    #[test]
    fn test_single_script_argument() {
        let flags = parse(&["batch.txt"]).unwrap();
        assert_eq!(flags.script(), Some("batch.txt"));
    }

    #[test]
    fn test_flags_mix_with_script() {
        let flags = parse(&["-q", "batch.txt", "--debug"]).unwrap();
        assert!(flags.is_set("quiet"));
        assert!(flags.is_set("debug"));
        assert_eq!(flags.script(), Some("batch.txt"));
    }

    #[test]
    fn test_two_scripts_is_usage_error() {
        assert!(matches!(
            parse(&["one.txt", "two.txt"]),
            Err(ShellError::Usage(_))
        ));
    }

    #[test]
    fn test_unknown_flag_is_usage_error() {
        assert!(matches!(parse(&["--frobnicate"]), Err(ShellError::Usage(_))));
    }

    #[test]
    fn test_program_name() {
        assert_eq!(program_name("/usr/local/bin/myshell"), "myshell");
        assert_eq!(program_name("myshell"), "myshell");
        assert_eq!(program_name("/usr/bin/"), "/usr/bin/");
    }
}
