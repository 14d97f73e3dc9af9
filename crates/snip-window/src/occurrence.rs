//! Per-term occurrence scan.

use log::trace;
use snip_query::compile_term;

use crate::WindowError;

/// Finds the start offset of every occurrence of each term in `doc`.
///
/// The result has one list per term, in term order; each list holds the byte
/// offsets of non-overlapping, whole-word, case-insensitive matches of the term
/// (optionally followed by `s` or `es`), in ascending order.
///
/// Fails with [`WindowError::TermNotFound`] for the first term that never occurs,
/// and with [`WindowError::EmptyQuery`] when there are no terms.
pub fn find_occurrences<S: AsRef<str>>(
    doc: &str,
    terms: &[S],
) -> Result<Vec<Vec<usize>>, WindowError> {
    if terms.is_empty() {
        return Err(WindowError::EmptyQuery);
    }

    let mut occurrences = Vec::with_capacity(terms.len());
    for term in terms {
        let term = term.as_ref();
        let matcher = compile_term(term)?;
        let starts: Vec<usize> = matcher.find_iter(doc).map(|m| m.start()).collect();
        trace!("term '{term}' occurs {} times", starts.len());

        if starts.is_empty() {
            return Err(WindowError::TermNotFound {
                term: term.to_string(),
            });
        }
        occurrences.push(starts);
    }

    Ok(occurrences)
}
