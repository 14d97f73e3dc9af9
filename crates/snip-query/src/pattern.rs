//! Composition of term match patterns.
//!
//! Every term is matched as a whole word with an optional plural suffix:
//! `\b<term>(?:es|s)?\b`. Terms are escaped before they are composed, so a term can
//! never inject pattern syntax.

use regex::{Regex, RegexBuilder};

use crate::QueryError;

/// The optional plural suffix accepted after every term.
pub const PLURAL_SUFFIX: &str = "(?:es|s)?";

/// Returns the whole-word pattern for a single term.
pub fn term_pattern(term: &str) -> String {
    format!(r"\b{}{PLURAL_SUFFIX}\b", regex::escape(term))
}

/// Returns a non-capturing alternation of all terms, or `None` when there are none.
///
/// Alternatives are tried in query order, so with overlapping terms the earlier
/// one wins at a given position.
pub fn alternation_pattern<S: AsRef<str>>(terms: &[S]) -> Option<String> {
    if terms.is_empty() {
        return None;
    }
    let alternatives = terms
        .iter()
        .map(|t| regex::escape(t.as_ref()))
        .collect::<Vec<_>>()
        .join("|");
    Some(format!("(?:{alternatives})"))
}

/// Compiles a case-insensitive matcher for a single term.
pub fn compile_term(term: &str) -> Result<Regex, QueryError> {
    compile_case_insensitive(&term_pattern(term))
}

/// Compiles `pattern` case-insensitively, attaching the pattern to any error.
pub fn compile_case_insensitive(pattern: &str) -> Result<Regex, QueryError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| QueryError::Pattern {
            pattern: pattern.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collects the start offsets of every match.
    fn starts(re: &Regex, text: &str) -> Vec<usize> {
        re.find_iter(text).map(|m| m.start()).collect()
    }

    #[test]
    fn term_pattern_shape() {
        assert_eq!(term_pattern("apple"), r"\bapple(?:es|s)?\b");
    }

    #[test]
    fn matches_plural_suffixes() {
        let re = compile_term("apple").unwrap();
        assert_eq!(
            re.find("good apples").map(|m| m.as_str()),
            Some("apples")
        );

        let re = compile_term("box").unwrap();
        assert_eq!(re.find("two boxes").map(|m| m.as_str()), Some("boxes"));
    }

    #[test]
    fn is_case_insensitive() {
        let re = compile_term("Dr").unwrap();
        assert_eq!(starts(&re, "herr dr. DR. Dr"), vec![5, 9, 13]);
    }

    #[test]
    fn does_not_match_inside_longer_words() {
        let re = compile_term("cat").unwrap();
        assert!(starts(&re, "a catatonic bobcat").is_empty());
        assert_eq!(starts(&re, "catatonic cats"), vec![10]);
    }

    #[test]
    fn rejects_other_suffixes() {
        let re = compile_term("apple").unwrap();
        assert!(!re.is_match("applesauce"));
        assert!(!re.is_match("appled"));
    }

    #[test]
    fn alternation_of_no_terms_is_none() {
        let empty: [&str; 0] = [];
        assert!(alternation_pattern(&empty).is_none());
    }

    #[test]
    fn alternation_joins_in_order() {
        assert_eq!(
            alternation_pattern(&["tasty", "apple"]).as_deref(),
            Some("(?:tasty|apple)")
        );
    }

    #[test]
    fn terms_are_escaped() {
        assert_eq!(term_pattern("a.b"), r"\ba\.b(?:es|s)?\b");
    }
}
