//! Query terms and match patterns for snip.
//!
//! A raw query string is reduced to its words: every maximal run of word characters
//! becomes a term, and everything else (punctuation, whitespace) is discarded. Each
//! term then matches the document as a whole word, case-insensitively, optionally
//! followed by a simple plural suffix (`s` or `es`).
//!
//! # Example
//!
//! ```
//! use snip_query::{compile_term, extract_terms};
//!
//! let terms = extract_terms("tasty, apple!");
//! assert_eq!(terms, vec!["tasty", "apple"]);
//!
//! let apple = compile_term(&terms[1]).unwrap();
//! assert!(apple.is_match("Apples."));
//! assert!(!apple.is_match("pineapple"));
//! ```

#![warn(missing_docs)]

mod error;
mod lexer;
mod pattern;

pub use error::QueryError;
pub use lexer::{Word, extract_terms, words};
pub use pattern::{
    PLURAL_SUFFIX, alternation_pattern, compile_case_insensitive, compile_term, term_pattern,
};
