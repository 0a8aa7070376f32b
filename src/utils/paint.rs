//! Minimal ANSI SGR styling for terminal output.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Green,
    Red,
    Yellow,
    OnYellow,
}

impl Paint {
    const fn code(self) -> &'static str {
        match self {
            Paint::Green => "32",
            Paint::Red => "31",
            Paint::Yellow => "33",
            Paint::OnYellow => "43",
        }
    }

    /// Wraps `text` in the style's escape sequence. Empty text stays empty.
    pub fn apply(self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        format!("\x1b[{}m{}\x1b[0m", self.code(), text)
    }
}

/// `NO_COLOR` (any non-empty value) disables styling.
pub fn color_disabled_by_env() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}
