//! Minimum-span selection over candidate tuples.

use log::debug;

use crate::Product;

/// The winning candidate tuple and the span it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanMatch {
    /// One occurrence offset per term, in term order.
    pub tuple: Vec<usize>,
    /// Smallest offset in the tuple.
    pub left: usize,
    /// Largest offset in the tuple.
    pub right: usize,
}

impl SpanMatch {
    /// Distance between the leftmost and rightmost occurrence.
    pub fn span(&self) -> usize {
        self.right - self.left
    }
}

/// Scans the product of `lists` once and returns the tuple with the smallest span.
///
/// Ties go to the tuple enumerated first (see [`Product`] for the order). Returns
/// `None` when there are no lists or when any list is empty.
pub fn min_span(lists: &[Vec<usize>]) -> Option<SpanMatch> {
    if lists.is_empty() {
        return None;
    }

    let mut product = Product::new(lists);
    if let Some(count) = product.count_tuples() {
        debug!("scanning {count} candidate tuples");
    }

    let mut best: Option<SpanMatch> = None;
    while let Some(tuple) = product.next_tuple() {
        let (left, right) = bounds(tuple);
        if best.as_ref().is_some_and(|b| right - left >= b.span()) {
            continue;
        }
        best = Some(SpanMatch {
            tuple: tuple.to_vec(),
            left,
            right,
        });
        // Nothing beats a zero span, and later ties never replace it.
        if left == right {
            break;
        }
    }

    best
}

/// Returns the minimum and maximum of a non-empty tuple.
fn bounds(tuple: &[usize]) -> (usize, usize) {
    tuple
        .iter()
        .fold((usize::MAX, usize::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_closest_pairing() {
        // "herr dr. herr dr. schlaenker": the second "dr." is nearest.
        let lists = vec![vec![5, 14], vec![18]];
        let best = min_span(&lists).unwrap();
        assert_eq!(best.tuple, vec![14, 18]);
        assert_eq!((best.left, best.right), (14, 18));
        assert_eq!(best.span(), 4);
    }

    #[test]
    fn bounds_are_sorted_regardless_of_term_order() {
        let lists = vec![vec![40], vec![10, 90]];
        let best = min_span(&lists).unwrap();
        assert_eq!(best.tuple, vec![40, 10]);
        assert_eq!((best.left, best.right), (10, 40));
    }

    #[test]
    fn ties_keep_first_enumerated_tuple() {
        // (0, 10) and (20, 10) both span 10; (0, 10) is enumerated first.
        let lists = vec![vec![0, 20], vec![10]];
        let best = min_span(&lists).unwrap();
        assert_eq!(best.tuple, vec![0, 10]);
    }

    #[test]
    fn ties_follow_odometer_order_within_last_list() {
        // For the first occurrence of term one, (5, 0) and (5, 10) tie at 5.
        let lists = vec![vec![5], vec![0, 10]];
        let best = min_span(&lists).unwrap();
        assert_eq!(best.tuple, vec![5, 0]);
    }

    #[test]
    fn single_term_has_zero_span_at_first_occurrence() {
        let lists = vec![vec![3, 17, 42]];
        let best = min_span(&lists).unwrap();
        assert_eq!(best.tuple, vec![3]);
        assert_eq!(best.span(), 0);
    }

    #[test]
    fn repeated_term_collapses_to_one_occurrence() {
        let lists = vec![vec![4, 9], vec![4, 9]];
        let best = min_span(&lists).unwrap();
        assert_eq!(best.tuple, vec![4, 4]);
    }

    #[test]
    fn no_lists_or_empty_list_has_no_match() {
        assert!(min_span(&[]).is_none());
        assert!(min_span(&[vec![1], vec![]]).is_none());
    }
}
