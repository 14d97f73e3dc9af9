//! Word tokenizer.
//!
//! The query and the document share one notion of a word: a maximal run of word
//! characters as defined by the regex `\w` class. Query terms and the document's
//! word-boundary index are both produced from the same matcher so they always agree.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a maximal run of word characters.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// A word located in some text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    /// The word text as it appears in the source.
    pub text: &'a str,
    /// Byte offset of the first character of the word.
    pub start: usize,
}

/// Iterates over every word in `text`, in order of appearance.
pub fn words(text: &str) -> impl Iterator<Item = Word<'_>> {
    WORD.find_iter(text).map(|m| Word {
        text: m.as_str(),
        start: m.start(),
    })
}

/// Extracts the query terms from a raw query string.
///
/// Punctuation and whitespace are discarded. Case is preserved and duplicates are
/// kept, in query order. A query without any word characters yields no terms.
pub fn extract_terms(query: &str) -> Vec<String> {
    words(query).map(|w| w.text.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(extract_terms("tasty apple"), vec!["tasty", "apple"]);
    }

    #[test]
    fn discards_punctuation() {
        assert_eq!(
            extract_terms("  Dr. Schlaenker!? "),
            vec!["Dr", "Schlaenker"]
        );
    }

    #[test]
    fn preserves_case_and_duplicates() {
        assert_eq!(extract_terms("Rust rust RUST"), vec!["Rust", "rust", "RUST"]);
    }

    #[test]
    fn keeps_digits_and_underscores() {
        assert_eq!(extract_terms("snake_case v2"), vec!["snake_case", "v2"]);
    }

    #[test]
    fn splits_on_apostrophes_and_hyphens() {
        assert_eq!(
            extract_terms("don't well-known"),
            vec!["don", "t", "well", "known"]
        );
    }

    #[test]
    fn empty_and_punctuation_only_queries_have_no_terms() {
        assert!(extract_terms("").is_empty());
        assert!(extract_terms("  ...--!? ").is_empty());
    }

    #[test]
    fn words_report_byte_offsets() {
        let found: Vec<_> = words("These...are -- good").collect();
        assert_eq!(
            found,
            vec![
                Word {
                    text: "These",
                    start: 0
                },
                Word {
                    text: "are",
                    start: 8
                },
                Word {
                    text: "good",
                    start: 15
                },
            ]
        );
    }
}
