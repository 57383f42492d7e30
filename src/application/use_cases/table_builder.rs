// ============================================================
// TABLE BUILDER
// ============================================================
// Turns raw rows into headers + content rows while tracking which
// columns ever carried content

use crate::domain::csv::{
    positional_key, ColumnLiveness, ContentRow, HeaderEntry, RawRow, TableDocument,
};
use crate::infrastructure::csv::{clean_header_value, decode_field, is_blank};

/// Accumulates one document; liveness is shared by headers and rows.
///
/// The liveness universe is seeded by whichever row arrives first: the
/// header row in header mode, otherwise the first content row. Columns
/// past that width only get registered once they turn dirty.
pub struct TableBuilder {
    key_prefix: String,
    document: TableDocument,
    liveness: ColumnLiveness,
}

impl TableBuilder {
    pub fn new(key_prefix: impl Into<String>) -> Self {
        Self {
            key_prefix: key_prefix.into(),
            document: TableDocument::new(),
            liveness: ColumnLiveness::new(),
        }
    }

    /// Record the header row: one entry per field, display value cleaned
    pub fn set_headers(&mut self, row: &RawRow) {
        for (index, raw) in row.iter().enumerate() {
            self.document.head.push(HeaderEntry::new(
                positional_key(&self.key_prefix, index),
                clean_header_value(raw),
            ));
        }

        self.liveness.seed(row.len());
    }

    /// Record one content row, values stored uncleaned
    pub fn push_content(&mut self, row: &RawRow) {
        let mut content_row = ContentRow::new();

        for (index, raw) in row.iter().enumerate() {
            self.liveness.seed(row.len());

            content_row.push(positional_key(&self.key_prefix, index), decode_field(raw));

            if !is_blank(raw) {
                self.liveness.mark_dirty(index);
            }
        }

        self.document.body.push(content_row);
    }

    pub fn row_count(&self) -> usize {
        self.document.body.len()
    }

    pub fn liveness(&self) -> &ColumnLiveness {
        &self.liveness
    }

    pub fn finish(self) -> (TableDocument, ColumnLiveness) {
        (self.document, self.liveness)
    }
}
