//! Styled terminal output.

use crate::Markers;

/// Resets all terminal attributes.
pub const RESET: &str = "\x1b[0m";

/// The kinds of text snip prints, each with its own terminal style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// A highlighted run of query terms (bold yellow).
    Match,
    /// A document name above its snippet (bold cyan).
    Source,
    /// The not-found message and other placeholder text (dim).
    Sentinel,
    /// A section title in `snip config` and `snip init` (bold).
    Heading,
    /// A clean `snip check` result (green).
    Ok,
    /// A `snip check` warning label (yellow).
    Warning,
}

impl Style {
    /// The SGR sequence that switches this style on.
    pub const fn start(self) -> &'static str {
        match self {
            Self::Match => "\x1b[1;33m",
            Self::Source => "\x1b[1;36m",
            Self::Sentinel => "\x1b[2m",
            Self::Heading => "\x1b[1m",
            Self::Ok => "\x1b[32m",
            Self::Warning => "\x1b[33m",
        }
    }

    /// Returns `text` in this style, followed by a reset.
    pub fn paint(self, text: &str) -> String {
        format!("{}{text}{RESET}", self.start())
    }
}

/// Renders a highlighted snippet for a terminal.
///
/// Each opening marker becomes [`Style::Match`] and each closing marker a reset,
/// so the runs show in color and the marker text disappears. An empty marker has
/// nothing to replace and is skipped.
pub fn render_markers(text: &str, markers: &Markers) -> String {
    let mut out = text.to_string();
    if !markers.open.is_empty() {
        out = out.replace(&markers.open, Style::Match.start());
    }
    if !markers.close.is_empty() {
        out = out.replace(&markers.close, RESET);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_wraps_and_resets() {
        assert_eq!(Style::Source.paint("a.txt"), "\x1b[1;36ma.txt\x1b[0m");
        assert_eq!(Style::Sentinel.paint("none"), "\x1b[2mnone\x1b[0m");
    }

    #[test]
    fn render_markers_styles_runs() {
        let text = "and [[HIGHLIGHT]]tasty[[ENDHIGHLIGHT]]!";
        let out = render_markers(text, &Markers::default());
        assert_eq!(out, "and \x1b[1;33mtasty\x1b[0m!");
    }

    #[test]
    fn render_markers_leaves_plain_text_alone() {
        let text = "no runs here";
        assert_eq!(render_markers(text, &Markers::default()), text);
    }

    #[test]
    fn render_markers_ignores_empty_markers() {
        let markers = Markers {
            open: String::new(),
            close: String::new(),
        };
        assert_eq!(render_markers("plain", &markers), "plain");
    }
}
