//! Terminal capability detection and output styling

use owo_colors::{OwoColorize, colors::css};

/// Width below which listings switch to a stacked layout.
const NARROW_WIDTH: u16 = 60;

fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

fn terminal_width() -> Option<u16> {
    terminal_size::terminal_size().map(|(w, _)| w.0)
}

/// Check if the terminal is too narrow for tabular output
pub fn is_narrow() -> bool {
    terminal_width().is_some_and(|w| w < NARROW_WIDTH)
}

/// Extension trait for colorizing output
pub trait Colorize {
    /// Color as success (green)
    fn success(&self) -> String;
    /// Color as warning (amber)
    fn warning(&self) -> String;
    /// Color as info (blue)
    fn info(&self) -> String;
    /// Emphasise a heading
    fn heading(&self) -> String;
    /// Dim the text
    fn dim(&self) -> String;
}

impl Colorize for str {
    fn success(&self) -> String {
        paint(self, |s| s.fg::<css::Green>().to_string())
    }

    fn warning(&self) -> String {
        paint(self, |s| s.fg::<css::Orange>().to_string())
    }

    fn info(&self) -> String {
        paint(self, |s| s.fg::<css::LightBlue>().to_string())
    }

    fn heading(&self) -> String {
        paint(self, |s| s.bold().to_string())
    }

    fn dim(&self) -> String {
        paint(self, |s| s.dimmed().to_string())
    }
}

impl Colorize for String {
    fn success(&self) -> String {
        self.as_str().success()
    }

    fn warning(&self) -> String {
        self.as_str().warning()
    }

    fn info(&self) -> String {
        self.as_str().info()
    }

    fn heading(&self) -> String {
        self.as_str().heading()
    }

    fn dim(&self) -> String {
        self.as_str().dim()
    }
}

fn paint(text: &str, style: impl FnOnce(&str) -> String) -> String {
    if supports_color() {
        style(text)
    } else {
        text.to_string()
    }
}

/// Join identifiers for display, or a dimmed dash when there are none.
pub fn join_or_dash<T: AsRef<str>>(items: &[T]) -> String {
    if items.is_empty() {
        "–".dim()
    } else {
        let items: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
        items.join(", ")
    }
}
