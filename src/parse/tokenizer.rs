/// Characters that separate tokens on an input line.
pub const SEPARATORS: [char; 3] = [' ', '\t', '\n'];

/// Splits `line` into at most `max_args` tokens. Tokens past the bound are
/// dropped; a blank line yields an empty vector.
pub fn tokenize(line: &str, max_args: usize) -> Vec<String> {
    line.split(SEPARATORS)
        .filter(|token| !token.is_empty())
        .take(max_args)
        .map(String::from)
        .collect()
}

/// Cuts `line` down to at most `max_len` bytes without splitting a
/// character.
pub fn truncate_line(line: &mut String, max_len: usize) {
    if line.len() <= max_len {
        return;
    }
    let mut end = max_len;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    line.truncate(end);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_in_order() {
        let tokens = tokenize("ls  -al\t/tmp\n", 64);
        assert_eq!(tokens, vec!["ls", "-al", "/tmp"]);
    }

    #[test]
    fn test_blank_line_has_no_tokens() {
        assert!(tokenize("\n", 64).is_empty());
        assert!(tokenize(" \t \n", 64).is_empty());
        assert!(tokenize("", 64).is_empty());
    }

    #[test]
    fn test_word_count_preserved_up_to_bound() {
        for n in [1usize, 2, 17, 64] {
            let line: Vec<String> = (0..n).map(|i| format!("w{}", i)).collect();
            let tokens = tokenize(&line.join(" "), 64);
            assert_eq!(tokens, line);
        }
    }

    #[test]
    fn test_overflow_stops_filling() {
        let line = (0..100).map(|i| i.to_string()).collect::<Vec<_>>().join(" ");
        let tokens = tokenize(&line, 64);
        assert_eq!(tokens.len(), 64);
        assert_eq!(tokens.last().map(String::as_str), Some("63"));
    }

    #[test]
    fn test_carriage_return_is_not_a_separator() {
        assert_eq!(tokenize("echo a\r\n", 64), vec!["echo", "a\r"]);
    }

    #[test]
    fn test_truncate_line_respects_char_boundary() {
        let mut line = "echo héllo".to_string();
        truncate_line(&mut line, 7);
        assert_eq!(line, "echo h");

        let mut short = "pwd".to_string();
        truncate_line(&mut short, 1024);
        assert_eq!(short, "pwd");
    }
}
