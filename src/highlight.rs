use inksac::prelude::*;

/// Colours prompt and diagnostics when the terminal supports it.
#[derive(Debug, Clone, Copy)]
pub struct Highlighter {
    color_support: ColorSupport,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn prompt(&self, cwd: &str, suffix: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return format!("{}{} ", cwd, suffix);
        }

        let dir_style = Style::builder().foreground(Color::Cyan).bold().build();
        format!("{}{} ", cwd.style(dir_style), suffix)
    }

    pub fn error(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return format!("myshell: {}", message);
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        format!("{} {}", "myshell:".style(error_style), message)
    }
}
