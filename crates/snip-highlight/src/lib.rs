//! Query term highlighting and terminal colors for snip.
//!
//! The core of this crate is [`TermHighlighter`], which wraps every run of query
//! terms in an excerpt with a pair of literal markers:
//!
//! ```
//! use snip_highlight::highlight;
//!
//! let marked = highlight("and tasty! -- apples.", &["tasty", "apple"]).unwrap();
//! assert_eq!(
//!     marked,
//!     "and [[HIGHLIGHT]]tasty[[ENDHIGHLIGHT]]! -- [[HIGHLIGHT]]apples[[ENDHIGHLIGHT]]."
//! );
//! ```
//!
//! [`render_markers`] and [`Style`] style `snip` terminal output.
//! [`TomlHighlighter`] colors configuration files.

#![warn(missing_docs)]

mod marker;
mod syntax;
mod terminal;

pub use marker::{CLOSE_MARKER, Markers, OPEN_MARKER, TermHighlighter, highlight};
pub use syntax::TomlHighlighter;
pub use terminal::{RESET, Style, render_markers};
