//! Error types for window selection.

use snip_query::QueryError;
use thiserror::Error;

/// Reasons a snippet window cannot be formed.
#[derive(Debug, Error)]
pub enum WindowError {
    /// A query term never occurs in the document, with or without a plural suffix.
    #[error("search term '{term}' not found in document")]
    TermNotFound {
        /// The first term found to have no occurrences.
        term: String,
    },

    /// The query contained no terms at all.
    #[error("query contains no search terms")]
    EmptyQuery,

    /// A term could not be turned into a match pattern.
    #[error(transparent)]
    Query(#[from] QueryError),
}

impl WindowError {
    /// Returns true when the failure means "no snippet available" rather than a
    /// pattern problem.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TermNotFound { .. } | Self::EmptyQuery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_not_found_display() {
        let err = WindowError::TermNotFound {
            term: "apple".to_string(),
        };
        assert_eq!(err.to_string(), "search term 'apple' not found in document");
        assert!(err.is_not_found());
    }

    #[test]
    fn empty_query_counts_as_not_found() {
        assert!(WindowError::EmptyQuery.is_not_found());
    }
}
