use tracing::debug;

use crate::domain::csv::{positional_key, ColumnLiveness, TableDocument};

/// Drops every column whose liveness flag is still clean.
///
/// Removal is by positional key from both the headers and each row, so
/// running it again is a no-op. Indexes never registered in `liveness`
/// are left alone.
pub struct ColumnPruner<'a> {
    key_prefix: &'a str,
}

impl<'a> ColumnPruner<'a> {
    pub fn new(key_prefix: &'a str) -> Self {
        Self { key_prefix }
    }

    pub fn prune(&self, document: &mut TableDocument, liveness: &ColumnLiveness) {
        let clean_keys: Vec<String> = liveness
            .clean_indexes()
            .map(|index| positional_key(self.key_prefix, index))
            .collect();

        if clean_keys.is_empty() {
            return;
        }

        document
            .head
            .retain(|entry| !clean_keys.iter().any(|key| *key == entry.key));

        for row in document.body.iter_mut() {
            for key in &clean_keys {
                row.remove(key);
            }
        }

        debug!(
            pruned = clean_keys.len(),
            remaining_headers = document.head.len(),
            "pruned empty columns"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::csv::{ContentRow, HeaderEntry};

    fn row(pairs: &[(&str, &str)]) -> ContentRow {
        let mut row = ContentRow::new();
        for (k, v) in pairs {
            row.insert(k.to_string(), v.to_string());
        }
        row
    }

    fn sample() -> (TableDocument, ColumnLiveness) {
        let doc = TableDocument {
            head: vec![
                HeaderEntry::new("col_0".into(), "A".into()),
                HeaderEntry::new("col_1".into(), "B".into()),
                HeaderEntry::new("col_2".into(), "C".into()),
            ],
            body: vec![
                row(&[("col_0", "1"), ("col_1", ""), ("col_2", "3")]),
                row(&[("col_0", "2"), ("col_1", " ")]),
            ],
        };
        let mut liveness = ColumnLiveness::new();
        liveness.seed(3);
        liveness.mark_dirty(0);
        liveness.mark_dirty(2);
        (doc, liveness)
    }

    #[test]
    fn test_prunes_clean_column_from_head_and_body() {
        let (mut doc, liveness) = sample();
        ColumnPruner::new("col_").prune(&mut doc, &liveness);

        assert_eq!(doc.header_values(), vec!["A", "C"]);
        assert_eq!(doc.body[0].keys().collect::<Vec<_>>(), vec!["col_0", "col_2"]);
        assert_eq!(doc.body[1].keys().collect::<Vec<_>>(), vec!["col_0"]);
    }

    #[test]
    fn test_prune_is_idempotent() {
        let (mut once, liveness) = sample();
        ColumnPruner::new("col_").prune(&mut once, &liveness);

        let mut twice = once.clone();
        ColumnPruner::new("col_").prune(&mut twice, &liveness);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_unregistered_index_is_untouched() {
        let mut doc = TableDocument {
            head: vec![HeaderEntry::new("col_0".into(), "A".into())],
            body: vec![row(&[("col_0", "x"), ("col_5", "")])],
        };
        let mut liveness = ColumnLiveness::new();
        liveness.seed(1);
        liveness.mark_dirty(0);

        ColumnPruner::new("col_").prune(&mut doc, &liveness);
        assert!(doc.body[0].contains_key("col_5"));
    }

    #[test]
    fn test_all_clean_empties_headers() {
        let mut doc = TableDocument {
            head: vec![
                HeaderEntry::new("col_0".into(), "A".into()),
                HeaderEntry::new("col_1".into(), "B".into()),
            ],
            body: vec![],
        };
        let mut liveness = ColumnLiveness::new();
        liveness.seed(2);

        ColumnPruner::new("col_").prune(&mut doc, &liveness);
        assert!(doc.head.is_empty());
    }
}
