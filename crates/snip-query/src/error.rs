//! Error types for query pattern compilation.

use thiserror::Error;

/// Errors raised while turning query terms into match patterns.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The regex engine rejected a composed pattern.
    ///
    /// Terms are escaped before composition, so this only happens when a pattern
    /// exceeds the engine's size limits.
    #[error("invalid match pattern '{pattern}': {source}")]
    Pattern {
        /// The pattern that failed to compile.
        pattern: String,
        /// Underlying regex error.
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::*;

    #[test]
    fn pattern_error_display_names_pattern() {
        let source = Regex::new("(").unwrap_err();
        let err = QueryError::Pattern {
            pattern: "(".to_string(),
            source,
        };
        let display = err.to_string();
        assert!(display.starts_with("invalid match pattern '('"));
    }
}
