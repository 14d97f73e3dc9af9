//! The snippet pipeline: terms, window selection, highlighting.

use std::ops::Range;

use log::{debug, warn};
use serde::Serialize;
use snip_highlight::{Markers, TermHighlighter};
use snip_query::extract_terms;
use snip_window::{Window, WindowPolicy, select_window};

use crate::SnipError;

/// Returned by [`highlight_doc`] when no snippet can be formed.
pub const NOT_FOUND_MESSAGE: &str = "Search terms not found in doc";

/// A highlighted excerpt and how it was chosen.
#[derive(Debug, Clone, Serialize)]
pub struct Snippet {
    /// The excerpt with query term runs wrapped in markers.
    pub text: String,
    /// The query terms, as extracted from the query string.
    pub terms: Vec<String>,
    /// Where the excerpt sits in the document.
    pub window: Window,
    /// Byte ranges of highlighted runs within the unmarked excerpt.
    pub ranges: Vec<Range<usize>>,
}

/// Produces snippets with a given window policy and marker pair.
///
/// The default is the fixed policy and markers that [`highlight_doc`] and the
/// `snip` command use.
#[derive(Debug, Clone, Default)]
pub struct Snippeter {
    /// Context padding and edge-snap thresholds.
    policy: WindowPolicy,
    /// Markers placed around highlighted runs.
    markers: Markers,
}

impl Snippeter {
    /// Creates a snippeter with an explicit policy and markers.
    pub fn new(policy: WindowPolicy, markers: Markers) -> Self {
        Self { policy, markers }
    }

    /// The window policy in use.
    pub fn policy(&self) -> &WindowPolicy {
        &self.policy
    }

    /// The markers in use.
    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Selects and highlights the best excerpt of `doc` for `query`.
    pub fn snippet(&self, doc: &str, query: &str) -> Result<Snippet, SnipError> {
        let terms = extract_terms(query);
        debug!("query terms: {terms:?}");

        let window = select_window(doc, &terms, &self.policy)?;
        let excerpt = window.excerpt(doc);

        let highlighter = TermHighlighter::new(&terms, self.markers.clone())?;
        Ok(Snippet {
            text: highlighter.highlight(excerpt),
            ranges: highlighter.match_ranges(excerpt),
            terms,
            window,
        })
    }

    /// Like [`Self::snippet`], but returns [`NOT_FOUND_MESSAGE`] on any failure.
    pub fn highlight_doc(&self, doc: &str, query: &str) -> String {
        match self.snippet(doc, query) {
            Ok(snippet) => snippet.text,
            Err(err) => {
                if err.is_not_found() {
                    debug!("no snippet: {err}");
                } else {
                    warn!("no snippet: {err}");
                }
                NOT_FOUND_MESSAGE.to_string()
            }
        }
    }
}

/// Returns the highlighted minimal-span excerpt of `doc` for `query`.
///
/// Uses the default policy and markers. When some query term never occurs in the
/// document, or the query has no terms, returns [`NOT_FOUND_MESSAGE`] instead.
pub fn highlight_doc(doc: &str, query: &str) -> String {
    Snippeter::default().highlight_doc(doc, query)
}
