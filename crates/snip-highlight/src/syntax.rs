//! TOML coloring for `snip config` and `snip init`.

use syntect::{
    easy::HighlightLines,
    highlighting::Theme,
    parsing::SyntaxSet,
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedThemeName, extra as extra_themes},
};

use crate::terminal::RESET;

/// Colors `.snip.toml` content for a terminal.
pub struct TomlHighlighter {
    /// Language definitions; TOML comes from the two-face extras.
    syntaxes: SyntaxSet,
    /// The Dracula theme, loaded once.
    theme: Theme,
}

impl Default for TomlHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl TomlHighlighter {
    /// Loads the TOML syntax and the Dracula theme.
    pub fn new() -> Self {
        Self {
            syntaxes: extra_syntaxes(),
            theme: extra_themes().get(EmbeddedThemeName::Dracula).clone(),
        }
    }

    /// Returns `toml` with ANSI colors, ending in a reset.
    ///
    /// A line the highlighter cannot parse is copied through uncolored.
    pub fn highlight(&self, toml: &str) -> String {
        let Some(syntax) = self.syntaxes.find_syntax_by_extension("toml") else {
            return toml.to_string();
        };
        let mut lines = HighlightLines::new(syntax, &self.theme);

        let mut out = String::with_capacity(toml.len() * 2);
        for line in LinesWithEndings::from(toml) {
            match lines.highlight_line(line, &self.syntaxes) {
                Ok(regions) => out.push_str(&as_24_bit_terminal_escaped(&regions, false)),
                Err(_) => out.push_str(line),
            }
        }
        out.push_str(RESET);
        out
    }
}
