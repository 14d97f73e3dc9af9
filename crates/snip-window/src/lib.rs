//! Snippet window selection for snip.
//!
//! Given a document and a list of query terms, the selector finds the shortest
//! stretch of the document that contains an occurrence of every term, then widens
//! it to a word-aligned excerpt with some context on either side.
//!
//! Selection runs in four steps:
//!
//! 1. **Occurrences**: every whole-word, case-insensitive match of each term (with an
//!    optional `s`/`es` suffix) is recorded by start offset. A term with no
//!    occurrence at all means no snippet can be formed.
//! 2. **Minimum span**: the Cartesian product of the occurrence lists is scanned
//!    lazily; the first tuple with the smallest `max - min` wins.
//! 3. **Context**: the window is widened to [`CONTEXT_WORDS_BEFORE`] words before the
//!    leftmost match and [`CONTEXT_WORDS_AFTER`] words after the rightmost one.
//! 4. **Edge snap**: boundaries within [`EDGE_SNAP_CHARS`] characters of the document
//!    start or end are moved onto it.
//!
//! # Example
//!
//! ```
//! use snip_window::{WindowPolicy, select_window};
//!
//! let doc = "herr dr. herr dr. schlaenker, come quick!";
//! let window = select_window(doc, &["Dr", "Schlaenker"], &WindowPolicy::default()).unwrap();
//! assert_eq!(window.left_match, 14);
//! assert_eq!(window.excerpt(doc), doc);
//! ```

#![warn(missing_docs)]

mod boundary;
mod error;
mod occurrence;
mod policy;
mod product;
mod span;
mod window;

pub use boundary::WordBoundaries;
pub use error::WindowError;
pub use occurrence::find_occurrences;
pub use policy::{CONTEXT_WORDS_AFTER, CONTEXT_WORDS_BEFORE, EDGE_SNAP_CHARS, WindowPolicy};
pub use product::Product;
pub use span::{SpanMatch, min_span};
pub use window::{Window, select_window};
