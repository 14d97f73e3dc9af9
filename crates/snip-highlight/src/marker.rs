//! Marker-based term highlighting.

use std::ops::Range;

use regex::{Captures, Regex};
use snip_query::{
    PLURAL_SUFFIX, QueryError, alternation_pattern, compile_case_insensitive,
};

/// Opening marker placed before every highlighted run.
pub const OPEN_MARKER: &str = "[[HIGHLIGHT]]";

/// Closing marker placed after every highlighted run.
pub const CLOSE_MARKER: &str = "[[ENDHIGHLIGHT]]";

/// The literal delimiters wrapped around highlighted runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    /// Text inserted before a run.
    pub open: String,
    /// Text inserted after a run.
    pub close: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            open: OPEN_MARKER.to_string(),
            close: CLOSE_MARKER.to_string(),
        }
    }
}

/// A piece of text that either is or is not already enclosed in markers.
struct Segment<'t> {
    /// Byte offset of the segment in the full text.
    offset: usize,
    /// The segment text.
    text: &'t str,
    /// True when the segment is an existing marked region, markers included.
    marked: bool,
}

/// Highlights occurrences of a fixed set of query terms.
///
/// A run is one or more terms (each with an optional `s`/`es` suffix, matched as
/// whole words, case-insensitively) separated only by whitespace. Each run is
/// wrapped in a single marker pair; whitespace in front of the run stays outside
/// the markers. A run this highlighter already wrapped (the markers enclosing
/// nothing but a term run) is left untouched, so highlighting is idempotent.
/// Marker text enclosing anything else is ordinary text and gets highlighted.
///
/// The compiled patterns are read-only and can be shared across threads.
#[derive(Debug, Clone)]
pub struct TermHighlighter {
    /// Run matcher: group 1 is the leading whitespace, group 2 the run itself.
    /// `None` when there are no terms.
    runs: Option<Regex>,
    /// Matches runs already wrapped in `open`/`close`. `None` if either marker is
    /// empty or there are no terms.
    existing: Option<Regex>,
    /// Markers written around each run.
    markers: Markers,
}

impl TermHighlighter {
    /// Compiles a highlighter for `terms`.
    pub fn new<S: AsRef<str>>(terms: &[S], markers: Markers) -> Result<Self, QueryError> {
        let alternation = alternation_pattern(terms);
        let runs = alternation
            .as_deref()
            .map(|alt| compile_case_insensitive(&run_pattern(alt)))
            .transpose()?;

        let existing = alternation
            .as_deref()
            .filter(|_| !markers.open.is_empty() && !markers.close.is_empty())
            .map(|alt| compile_case_insensitive(&marked_run_pattern(alt, &markers)))
            .transpose()?;

        Ok(Self {
            runs,
            existing,
            markers,
        })
    }

    /// The markers this highlighter writes.
    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Returns `text` with every run of query terms wrapped in markers.
    ///
    /// Text without any matching term is returned unchanged.
    pub fn highlight(&self, text: &str) -> String {
        let Some(runs) = &self.runs else {
            return text.to_string();
        };

        let mut out = String::with_capacity(text.len());
        for segment in self.segments(text) {
            if segment.marked {
                out.push_str(segment.text);
                continue;
            }
            let replaced = runs.replace_all(segment.text, |caps: &Captures<'_>| {
                format!(
                    "{}{}{}{}",
                    &caps[1], self.markers.open, &caps[2], self.markers.close
                )
            });
            out.push_str(&replaced);
        }
        out
    }

    /// Byte ranges of the runs [`Self::highlight`] would wrap, relative to `text`.
    ///
    /// Leading whitespace is excluded. Ranges are sorted and do not overlap.
    pub fn match_ranges(&self, text: &str) -> Vec<Range<usize>> {
        let Some(runs) = &self.runs else {
            return Vec::new();
        };

        let mut ranges = Vec::new();
        for segment in self.segments(text).into_iter().filter(|s| !s.marked) {
            for caps in runs.captures_iter(segment.text) {
                if let Some(run) = caps.get(2) {
                    ranges.push(segment.offset + run.start()..segment.offset + run.end());
                }
            }
        }
        ranges
    }

    /// Splits `text` into already-marked regions and plain text between them.
    fn segments<'t>(&self, text: &'t str) -> Vec<Segment<'t>> {
        let mut segments = Vec::new();
        let mut last = 0;

        if let Some(existing) = &self.existing {
            for m in existing.find_iter(text) {
                if m.start() > last {
                    segments.push(Segment {
                        offset: last,
                        text: &text[last..m.start()],
                        marked: false,
                    });
                }
                segments.push(Segment {
                    offset: m.start(),
                    text: m.as_str(),
                    marked: true,
                });
                last = m.end();
            }
        }

        segments.push(Segment {
            offset: last,
            text: &text[last..],
            marked: false,
        });
        segments
    }
}

/// Builds the run pattern around a term alternation.
fn run_pattern(alternation: &str) -> String {
    format!(r"(\s*)((?:\b\s*{alternation}{PLURAL_SUFFIX}\b)+)")
}

/// Matches a run exactly as [`TermHighlighter::highlight`] writes it. The markers
/// themselves compare case-sensitively.
fn marked_run_pattern(alternation: &str, markers: &Markers) -> String {
    format!(
        r"(?-i:{})(?:\b\s*{alternation}{PLURAL_SUFFIX}\b)+(?-i:{})",
        regex::escape(&markers.open),
        regex::escape(&markers.close)
    )
}

/// Highlights `terms` in `excerpt` with the default markers.
///
/// With no terms, or no matching terms, the excerpt comes back unchanged.
pub fn highlight<S: AsRef<str>>(excerpt: &str, terms: &[S]) -> Result<String, QueryError> {
    Ok(TermHighlighter::new(terms, Markers::default())?.highlight(excerpt))
}
