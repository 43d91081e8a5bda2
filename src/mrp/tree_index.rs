use std::ops::Range;

/// Records where each tree's columns end in the global column sequence.
///
/// Each entry is the exclusive bound of the tree's columns, i.e. the number
/// of columns registered when the tree was terminated. A tree without any
/// columns repeats the previous bound and so spans an empty range.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TreeIndex {
    column_ends: Vec<usize>,
}

impl TreeIndex {
    pub fn new() -> Self { Self::default() }

    pub(crate) fn push_end(&mut self, column_end: usize) {
        debug_assert!(
            column_end >= self.column_ends.last().copied().unwrap_or(0)
        );
        self.column_ends.push(column_end);
    }

    pub fn count_of_trees(&self) -> usize { self.column_ends.len() }

    pub fn column_ends(&self) -> &[usize] { &self.column_ends }

    /// Highest global column index contributed up to and including `tree`.
    ///
    /// `None` when `tree` does not exist or when no column was registered
    /// before it ended.
    pub fn end_index(&self, tree: usize) -> Option<usize> {
        self.column_ends.get(tree)?.checked_sub(1)
    }

    /// Columns contributed by `tree` alone.
    pub fn column_range(&self, tree: usize) -> Option<Range<usize>> {
        let end = *self.column_ends.get(tree)?;
        let start = match tree {
            0 => 0,
            _ => self.column_ends[tree - 1],
        };
        Some(start..end)
    }

    /// Column ranges of all trees, in input order.
    pub fn column_ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.column_ends.len()).filter_map(|tree| self.column_range(tree))
    }
}
