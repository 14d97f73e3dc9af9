//! snip: minimal-span search snippets.
//!
//! Given a document and a search query, snip finds the shortest passage that
//! contains every query term, widens it with a little context, and marks each query
//! term inside it:
//!
//! ```
//! let marked = snip::highlight_doc(
//!     "herr dr. herr dr. schlaenker, come quick!",
//!     "Dr Schlaenker",
//! );
//! assert_eq!(
//!     marked,
//!     "herr [[HIGHLIGHT]]dr[[ENDHIGHLIGHT]]. herr \
//!      [[HIGHLIGHT]]dr[[ENDHIGHLIGHT]]. [[HIGHLIGHT]]schlaenker[[ENDHIGHLIGHT]], come quick!"
//! );
//!
//! assert_eq!(snip::highlight_doc("no match here", "kiwi"), snip::NOT_FOUND_MESSAGE);
//! ```
//!
//! [`highlight_doc`] is the string-in, string-out entry point. [`Snippeter`] exposes
//! the same pipeline with typed results and a tunable policy.

#![warn(missing_docs)]

mod error;
mod snippet;

pub use error::SnipError;
pub use snip_highlight::{CLOSE_MARKER, Markers, OPEN_MARKER, TermHighlighter, highlight};
pub use snip_query::extract_terms;
pub use snip_window::{Window, WindowError, WindowPolicy, select_window};
pub use snippet::{NOT_FOUND_MESSAGE, Snippet, Snippeter, highlight_doc};
