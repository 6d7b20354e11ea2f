use std::io::IsTerminal;

use owo_colors::OwoColorize;

/// When to color output.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Color output when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

/// Terminal styling for rendered output.
///
/// Disabled styling passes text through unchanged, which keeps rendered output easy to test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styling {
    enabled: bool,
}

impl Styling {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// No escape codes at all.
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn from_choice(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Always => Self::new(true),
            ColorChoice::Never => Self::plain(),
            ColorChoice::Auto => Self::new(
                std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
            ),
        }
    }

    /// Approvals and successes.
    pub fn positive(&self, text: &str) -> String {
        self.paint(text, |text| text.green().to_string())
    }

    /// Rejections and failures.
    pub fn negative(&self, text: &str) -> String {
        self.paint(text, |text| text.red().to_string())
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, |text| text.dimmed().to_string())
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, |text| text.bold().to_string())
    }

    pub fn highlight(&self, text: &str) -> String {
        self.paint(text, |text| text.yellow().to_string())
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> String) -> String {
        if self.enabled {
            style(text)
        } else {
            text.to_owned()
        }
    }
}
