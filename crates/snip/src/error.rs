//! Errors returned by the snippet pipeline.

use snip_query::QueryError;
use snip_window::WindowError;
use thiserror::Error;

/// Reasons a snippet could not be produced.
#[derive(Debug, Error)]
pub enum SnipError {
    /// No window could be selected.
    #[error(transparent)]
    Window(#[from] WindowError),

    /// The highlighter could not be built for the query terms.
    #[error(transparent)]
    Query(#[from] QueryError),
}

impl SnipError {
    /// Returns true when the failure means "no snippet available".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Window(err) if err.is_not_found())
    }
}
