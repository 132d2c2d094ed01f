use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();
static STDERR_THEME: OnceLock<Theme> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub success: Style,
    pub error: Style,
    pub warn: Style,
    pub dim: Style,
}

impl Theme {
    /// Colour only when `term` is a terminal
    pub fn detect(term: &console::Term) -> Self {
        Self::for_terminal(term.is_term())
    }

    pub fn for_terminal(is_term: bool) -> Self {
        if is_term { Self::colored() } else { Self::plain() }
    }

    pub fn colored() -> Self {
        Self {
            header: Style::new().cyan().bold(),
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
            warn: Style::new().yellow(),
            dim: Style::new().bright_black(),
        }
    }

    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            success: Style::new(),
            error: Style::new(),
            warn: Style::new(),
            dim: Style::new(),
        }
    }
}

/// Theme for lines written to stdout
pub fn theme() -> &'static Theme {
    THEME.get_or_init(|| Theme::detect(&console::Term::stdout()))
}

/// Theme for lines written to stderr
pub fn stderr_theme() -> &'static Theme {
    STDERR_THEME.get_or_init(|| Theme::detect(&console::Term::stderr()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use owo_colors::OwoColorize;

    #[test]
    fn test_plain_theme_writes_no_escapes() {
        let theme = Theme::for_terminal(false);
        let text = format!("{}", "rolled back".style(theme.error.clone()));
        assert_eq!(text, "rolled back");
    }

    #[test]
    fn test_terminal_theme_colours() {
        let theme = Theme::for_terminal(true);
        let text = format!("{}", "rolled back".style(theme.error.clone()));
        assert!(text.contains('\u{1b}'));
    }
}
