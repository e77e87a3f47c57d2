//! Colors for the diagnostics written to stderr.
use clap::ValueEnum;
use once_cell::sync::Lazy;

/// When to color diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color if stderr supports it
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

/// The escape sequences that start and end each kind of styled text
#[derive(Debug, Clone, Copy)]
pub struct StyleSheet {
    error_start: &'static str,
    note_start: &'static str,
    end: &'static str,
}

impl StyleSheet {
    /// `s` styled as an error tag
    #[must_use]
    pub fn error(&self, s: &str) -> String {
        format!("{}{}{}", self.error_start, s, self.end)
    }
    /// `s` styled as a note, such as the cause of an error
    #[must_use]
    pub fn note(&self, s: &str) -> String {
        format!("{}{}{}", self.note_start, s, self.end)
    }
}

const BOLD_RED: &str = "\x1B[31;1m";
const YELLOW: &str = "\x1B[33m";
const RESET: &str = "\x1B[m";
const ALWAYS: StyleSheet = StyleSheet { error_start: BOLD_RED, note_start: YELLOW, end: RESET };
const NEVER: StyleSheet = StyleSheet { error_start: "", note_start: "", end: "" };
static AUTO: Lazy<StyleSheet> = Lazy::new(|| {
    use enable_ansi_support::enable_ansi_support;
    use supports_color::Stream;
    let use_color = enable_ansi_support().is_ok() && supports_color::on(Stream::Stderr).is_some();
    if use_color {
        ALWAYS
    } else {
        NEVER
    }
});

/// The style sheet for `choice`
#[must_use]
pub fn colored(choice: ColorChoice) -> &'static StyleSheet {
    match choice {
        ColorChoice::Always => &ALWAYS,
        ColorChoice::Never => &NEVER,
        ColorChoice::Auto => &*AUTO,
    }
}
