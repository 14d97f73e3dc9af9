//! Lazy Cartesian product over occurrence lists.

/// Progress of a [`Product`] enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No tuple has been produced yet.
    Fresh,
    /// At least one tuple has been produced and more may follow.
    Running,
    /// The product is exhausted.
    Done,
}

/// Enumerates every tuple that picks one value from each list.
///
/// Tuples are produced one at a time in odometer order: the first list is the
/// outermost loop and the last list varies fastest. Only the current indices and
/// the current tuple are held in memory, so the product is never materialized.
///
/// The product of zero lists is a single empty tuple; the product involving any
/// empty list has no tuples.
///
/// ```
/// use snip_window::Product;
///
/// let lists = vec![vec![1, 2], vec![10, 20]];
/// let mut product = Product::new(&lists);
/// let mut seen = Vec::new();
/// while let Some(tuple) = product.next_tuple() {
///     seen.push(tuple.to_vec());
/// }
/// assert_eq!(seen, vec![vec![1, 10], vec![1, 20], vec![2, 10], vec![2, 20]]);
/// ```
#[derive(Debug, Clone)]
pub struct Product<'a> {
    /// The lists being combined.
    lists: &'a [Vec<usize>],
    /// Current position within each list.
    indices: Vec<usize>,
    /// Values at the current positions.
    current: Vec<usize>,
    /// Enumeration progress.
    state: State,
}

impl<'a> Product<'a> {
    /// Creates a product over `lists`.
    pub fn new(lists: &'a [Vec<usize>]) -> Self {
        Self {
            lists,
            indices: vec![0; lists.len()],
            current: Vec::with_capacity(lists.len()),
            state: State::Fresh,
        }
    }

    /// Total number of tuples, or `None` if it overflows `usize`.
    pub fn count_tuples(&self) -> Option<usize> {
        self.lists
            .iter()
            .try_fold(1usize, |acc, list| acc.checked_mul(list.len()))
    }

    /// Advances to the next tuple and returns it, or `None` once exhausted.
    pub fn next_tuple(&mut self) -> Option<&[usize]> {
        match self.state {
            State::Fresh => {
                if self.lists.iter().any(Vec::is_empty) {
                    self.state = State::Done;
                    return None;
                }
                self.current.extend(self.lists.iter().map(|list| list[0]));
                self.state = State::Running;
                Some(&self.current)
            }
            State::Running => {
                if self.advance() {
                    Some(&self.current)
                } else {
                    self.state = State::Done;
                    None
                }
            }
            State::Done => None,
        }
    }

    /// Increments the odometer, carrying leftward. Returns false on wrap-around.
    fn advance(&mut self) -> bool {
        let lists = self.lists;
        for pos in (0..lists.len()).rev() {
            let list = &lists[pos];
            self.indices[pos] += 1;
            if let Some(&value) = list.get(self.indices[pos]) {
                self.current[pos] = value;
                return true;
            }
            self.indices[pos] = 0;
            self.current[pos] = list[0];
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drains a product into owned tuples.
    fn collect(lists: &[Vec<usize>]) -> Vec<Vec<usize>> {
        let mut product = Product::new(lists);
        let mut out = Vec::new();
        while let Some(tuple) = product.next_tuple() {
            out.push(tuple.to_vec());
        }
        out
    }

    #[test]
    fn last_list_varies_fastest() {
        let lists = vec![vec![1, 2], vec![3], vec![4, 5]];
        assert_eq!(
            collect(&lists),
            vec![vec![1, 3, 4], vec![1, 3, 5], vec![2, 3, 4], vec![2, 3, 5]]
        );
    }

    #[test]
    fn single_list_yields_singletons() {
        let lists = vec![vec![7, 8, 9]];
        assert_eq!(collect(&lists), vec![vec![7], vec![8], vec![9]]);
    }

    #[test]
    fn zero_lists_yield_one_empty_tuple() {
        let lists: Vec<Vec<usize>> = Vec::new();
        assert_eq!(collect(&lists), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn any_empty_list_yields_nothing() {
        let lists = vec![vec![1, 2], vec![], vec![3]];
        assert!(collect(&lists).is_empty());
    }

    #[test]
    fn stays_exhausted() {
        let lists = vec![vec![1]];
        let mut product = Product::new(&lists);
        assert!(product.next_tuple().is_some());
        assert!(product.next_tuple().is_none());
        assert!(product.next_tuple().is_none());
    }

    #[test]
    fn count_matches_enumeration() {
        let lists = vec![vec![1, 2, 3], vec![4, 5], vec![6, 7, 8, 9]];
        let product = Product::new(&lists);
        assert_eq!(product.count_tuples(), Some(24));
        assert_eq!(collect(&lists).len(), 24);
    }

    #[test]
    fn count_reports_overflow() {
        let big = vec![0; 1 << 17];
        let lists = vec![big.clone(), big.clone(), big.clone(), big];
        assert_eq!(Product::new(&lists).count_tuples(), None);
    }
}
