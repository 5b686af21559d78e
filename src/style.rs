//! Styling capability for report output.

use colored::Colorize;

/// Keyword colors the report knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Yellow,
}

/// How report text gets its presentation.
///
/// The formatter only talks to this trait, so tests can inject
/// [`PlainStyle`] and assert on bare text. Modifiers compose by nesting,
/// e.g. `style.bold(&style.color(Color::Red, text))`.
pub trait Style {
    /// Apply a keyword color.
    fn color(&self, color: Color, text: &str) -> String;

    /// Bold modifier.
    fn bold(&self, text: &str) -> String;

    /// Dim modifier.
    fn dim(&self, text: &str) -> String;

    /// Count of visible characters once escape sequences are stripped.
    ///
    /// Layout math goes through this, so columns line up no matter which
    /// cells carry styling.
    fn visible_len(&self, text: &str) -> usize {
        console::strip_ansi_codes(text).chars().count()
    }
}

/// ANSI styling backed by `colored`.
///
/// Empty input styles to the empty string, so blank cells keep their zero
/// width and trailing separators can be trimmed. Honors the `colored`
/// runtime controls (`NO_COLOR`, overrides); degrading to plain text keeps
/// layout intact since widths are measured after stripping.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyle;

impl Style for AnsiStyle {
    fn color(&self, color: Color, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        match color {
            Color::Red => text.red().to_string(),
            Color::Yellow => text.yellow().to_string(),
        }
    }

    fn bold(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        text.bold().to_string()
    }

    fn dim(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        text.dimmed().to_string()
    }
}

/// Pass-through implementation used for `--color never` and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyle;

impl Style for PlainStyle {
    fn color(&self, _color: Color, text: &str) -> String {
        text.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }
}
