// ============================================================
// COLUMN LIVENESS
// ============================================================
// Tracks which columns carried non-blank content anywhere in the body

use std::collections::BTreeMap;

/// Per-column dirty flag, keyed by zero-based column index.
///
/// Seeded once from the width of the first row processed; after that a
/// column only flips from clean to dirty, never back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnLiveness {
    columns: BTreeMap<usize, bool>,
}

impl ColumnLiveness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Register indexes `0..width` as clean, only if nothing is registered yet
    pub fn seed(&mut self, width: usize) {
        if !self.columns.is_empty() {
            return;
        }
        for index in 0..width {
            self.columns.insert(index, false);
        }
    }

    pub fn mark_dirty(&mut self, index: usize) {
        self.columns.insert(index, true);
    }

    /// `None` when the index was never registered
    pub fn is_dirty(&self, index: usize) -> Option<bool> {
        self.columns.get(&index).copied()
    }

    /// Registered indexes that never saw content, ascending
    pub fn clean_indexes(&self) -> impl Iterator<Item = usize> + '_ {
        self.columns
            .iter()
            .filter(|(_, dirty)| !**dirty)
            .map(|(index, _)| *index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.columns.iter().map(|(index, dirty)| (*index, *dirty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_only_when_empty() {
        let mut liveness = ColumnLiveness::new();
        liveness.seed(2);
        liveness.seed(5);

        assert_eq!(liveness.len(), 2);
        assert_eq!(liveness.is_dirty(4), None);
    }

    #[test]
    fn test_dirty_is_monotonic() {
        let mut liveness = ColumnLiveness::new();
        liveness.seed(3);
        liveness.mark_dirty(1);
        liveness.mark_dirty(1);

        assert_eq!(liveness.is_dirty(1), Some(true));
        assert_eq!(liveness.clean_indexes().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_mark_dirty_registers_unseeded_index() {
        let mut liveness = ColumnLiveness::new();
        liveness.seed(1);
        liveness.mark_dirty(7);

        assert_eq!(liveness.is_dirty(7), Some(true));
        assert_eq!(liveness.len(), 2);
    }
}
