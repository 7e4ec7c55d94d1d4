mod redirect;
mod tokenizer;

pub use redirect::{scan_redirection, CommandStatus, OutputMode, OutputRedirect};
pub use tokenizer::{tokenize, truncate_line, SEPARATORS};

/// Tokens that steer redirection and backgrounding rather than naming
/// program arguments.
pub const CONTROL_TOKENS: [&str; 4] = ["<", ">", ">>", "&"];

pub fn is_control_token(token: &str) -> bool {
    CONTROL_TOKENS.contains(&token)
}

/// Returns the prefix of `args` that precedes the first control token.
/// Everything from that token onward (operators and their operands) is
/// dropped.
pub fn strip_control(args: &[String]) -> &[String] {
    let end = args
        .iter()
        .position(|arg| is_control_token(arg))
        .unwrap_or(args.len());
    &args[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_strip_control_stops_at_first_marker() {
        let args = words("sort -r < in.txt > out.txt &");
        assert_eq!(strip_control(&args), &words("sort -r")[..]);
    }

    #[test]
    fn test_strip_control_without_markers() {
        let args = words("ls -al /tmp");
        assert_eq!(strip_control(&args), &args[..]);
    }

    #[test]
    fn test_strip_control_leading_marker() {
        let args = words("> out.txt");
        assert!(strip_control(&args).is_empty());
    }

    #[test]
    fn test_control_token_detection() {
        for token in CONTROL_TOKENS {
            assert!(is_control_token(token));
        }
        assert!(!is_control_token(">>>"));
        assert!(!is_control_token("&&"));
        assert!(!is_control_token("file>"));
    }
}
