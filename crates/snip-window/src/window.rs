//! Window expansion and edge snapping.

use log::debug;
use serde::Serialize;

use crate::{SpanMatch, WindowError, WindowPolicy, WordBoundaries, find_occurrences, min_span};

/// The excerpt chosen for a document, as byte offsets into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Window {
    /// First byte of the excerpt.
    pub start: usize,
    /// One past the last byte of the excerpt.
    pub end: usize,
    /// Offset of the leftmost selected occurrence.
    pub left_match: usize,
    /// Offset of the rightmost selected occurrence.
    pub right_match: usize,
    /// Distance between the selected occurrences.
    pub span: usize,
}

impl Window {
    /// The excerpt text within the document this window was selected from.
    pub fn excerpt<'a>(&self, doc: &'a str) -> &'a str {
        &doc[self.start..self.end]
    }
}

/// Selects the minimal-span window of `terms` in `doc` and widens it per `policy`.
///
/// The excerpt starts at the word `policy.context_before` words before the leftmost
/// selected occurrence and ends where the word `policy.context_after` words after
/// the rightmost occurrence starts (that word itself is not included). Either
/// boundary is then snapped to the document edge when fewer than
/// `policy.snap_start` / `policy.snap_end` characters separate them.
pub fn select_window<S: AsRef<str>>(
    doc: &str,
    terms: &[S],
    policy: &WindowPolicy,
) -> Result<Window, WindowError> {
    let occurrences = find_occurrences(doc, terms)?;
    let best = min_span(&occurrences).ok_or(WindowError::EmptyQuery)?;
    debug!(
        "minimal span {} between offsets {} and {}",
        best.span(),
        best.left,
        best.right
    );

    let boundaries = WordBoundaries::new(doc);
    let window = expand(doc, &boundaries, &best, policy);
    debug!("selected window {}..{}", window.start, window.end);
    Ok(window)
}

/// Widens a span match to word boundaries, then applies edge snapping.
fn expand(
    doc: &str,
    boundaries: &WordBoundaries,
    best: &SpanMatch,
    policy: &WindowPolicy,
) -> Window {
    let last_word = boundaries.len().saturating_sub(1);
    let left_word = boundaries
        .locate(best.left)
        .saturating_sub(policy.context_before);
    let right_word = boundaries
        .locate(best.right)
        .saturating_add(policy.context_after)
        .min(last_word);

    let mut start = boundaries.get(left_word).unwrap_or(0);
    let mut end = boundaries.get(right_word).unwrap_or(doc.len());

    if doc[end..].chars().count() < policy.snap_end {
        end = doc.len();
    }
    if doc[..start].chars().count() < policy.snap_start {
        start = 0;
    }

    Window {
        start,
        end,
        left_match: best.left,
        right_match: best.right,
        span: best.span(),
    }
}
