//! Word-boundary index.

use snip_query::words;

/// Ascending start offsets of every word in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBoundaries {
    /// Byte offset at which each word starts.
    starts: Vec<usize>,
}

impl WordBoundaries {
    /// Indexes the word starts of `doc`.
    pub fn new(doc: &str) -> Self {
        Self {
            starts: words(doc).map(|w| w.start).collect(),
        }
    }

    /// Number of words in the document.
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Returns true when the document has no words.
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Start offset of the word at `index`.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.starts.get(index).copied()
    }

    /// Word index of the last word starting at or before `offset`.
    ///
    /// Match offsets always fall on a word start, which maps to that word's own
    /// index. Offsets before the first word map to index 0.
    pub fn locate(&self, offset: usize) -> usize {
        self.starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    /// All word start offsets.
    pub fn starts(&self) -> &[usize] {
        &self.starts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_word_starts() {
        let index = WordBoundaries::new("These...are...good -- and tasty! -- apples.");
        assert_eq!(index.starts(), &[0, 8, 14, 22, 26, 36]);
        assert_eq!(index.len(), 6);
    }

    #[test]
    fn locate_maps_word_starts_to_their_own_index() {
        let index = WordBoundaries::new("alpha beta gamma");
        assert_eq!(index.locate(0), 0);
        assert_eq!(index.locate(6), 1);
        assert_eq!(index.locate(11), 2);
        assert_eq!(index.locate(7), 1);
    }

    #[test]
    fn locate_falls_back_to_preceding_word() {
        let index = WordBoundaries::new("  alpha beta gamma");
        assert_eq!(index.locate(2), 0);
        assert_eq!(index.locate(10), 1);
        assert_eq!(index.locate(0), 0);
        assert_eq!(index.locate(100), 2);
    }

    #[test]
    fn punctuation_only_text_has_no_words() {
        let index = WordBoundaries::new("... -- !!");
        assert!(index.is_empty());
        assert_eq!(index.get(0), None);
    }
}
