// ============================================================
// CSV DOMAIN LAYER
// ============================================================
// Core types and value objects for the table pipeline
// No I/O, no async

mod column_liveness;
mod output_format;
mod source_config;
mod table_document;

pub use column_liveness::ColumnLiveness;
pub use output_format::OutputFormat;
pub use source_config::CsvSourceConfig;
pub use table_document::{positional_key, ContentRow, HeaderEntry, TableDocument};

/// One raw record as read from the source, fields in column order
pub type RawRow = Vec<Vec<u8>>;
