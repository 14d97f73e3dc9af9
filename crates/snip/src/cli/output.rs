//! Rendering and JSON serialization for CLI output.

use std::{ops::Range, process::ExitCode};

use serde::Serialize;
use snip::{Markers, NOT_FOUND_MESSAGE, SnipError, Snippet, Window};
use snip_highlight::{Style, render_markers};

/// The outcome of snippeting one document.
pub struct DocumentResult {
    /// Display name of the document (`-` for stdin).
    pub source: String,
    /// The snippet, or why none could be formed.
    pub outcome: Result<Snippet, SnipError>,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Plain text with literal markers.
    Plain,
    /// Text with markers rendered as terminal colors.
    Color,
    /// Pretty-printed JSON.
    Json,
}

/// JSON output for a single document.
#[derive(Serialize)]
struct JsonDocument<'a> {
    /// Document name.
    source: &'a str,
    /// Whether a snippet was formed.
    found: bool,
    /// The highlighted snippet, or the not-found message.
    snippet: &'a str,
    /// Excerpt position in the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    window: Option<&'a Window>,
    /// Highlighted run ranges within the unmarked excerpt.
    ranges: &'a [Range<usize>],
    /// Failure description when no snippet was formed.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// JSON output for `snip find`.
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// The raw query.
    query: &'a str,
    /// Results in input order.
    documents: Vec<JsonDocument<'a>>,
}

/// Prints results for `snip find` in the requested mode.
///
/// Pattern failures are reported on stderr and make the command fail; a document
/// without a snippet prints the not-found message and is not a failure.
pub fn print_results(
    query: &str,
    results: &[DocumentResult],
    markers: &Markers,
    mode: OutputMode,
) -> ExitCode {
    let mut code = ExitCode::SUCCESS;
    for result in results {
        if let Err(err) = &result.outcome
            && !err.is_not_found()
        {
            eprintln!("error: {}: {err}", result.source);
            code = ExitCode::FAILURE;
        }
    }

    if mode == OutputMode::Json {
        if !print_json(query, results) {
            return ExitCode::FAILURE;
        }
        return code;
    }

    let show_names = results.len() > 1;
    for result in results {
        if show_names {
            if mode == OutputMode::Color {
                println!("{}", Style::Source.paint(&result.source));
            } else {
                println!("==> {} <==", result.source);
            }
        }
        println!("{}", format_outcome(&result.outcome, markers, mode));
        if show_names {
            println!();
        }
    }

    code
}

/// Renders one outcome as text.
fn format_outcome(
    outcome: &Result<Snippet, SnipError>,
    markers: &Markers,
    mode: OutputMode,
) -> String {
    match (outcome, mode) {
        (Ok(snippet), OutputMode::Color) => render_markers(&snippet.text, markers),
        (Ok(snippet), _) => snippet.text.clone(),
        (Err(_), OutputMode::Color) => Style::Sentinel.paint(NOT_FOUND_MESSAGE),
        (Err(_), _) => NOT_FOUND_MESSAGE.to_string(),
    }
}

/// Prints all results as one JSON document. Returns false if serialization failed.
fn print_json(query: &str, results: &[DocumentResult]) -> bool {
    let documents = results
        .iter()
        .map(|result| match &result.outcome {
            Ok(snippet) => JsonDocument {
                source: &result.source,
                found: true,
                snippet: &snippet.text,
                window: Some(&snippet.window),
                ranges: &snippet.ranges,
                error: None,
            },
            Err(err) => JsonDocument {
                source: &result.source,
                found: false,
                snippet: NOT_FOUND_MESSAGE,
                window: None,
                ranges: &[],
                error: Some(err.to_string()),
            },
        })
        .collect();

    let output = JsonOutput { query, documents };
    match serde_json::to_string_pretty(&output) {
        Ok(json) => {
            println!("{json}");
            true
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            false
        }
    }
}
