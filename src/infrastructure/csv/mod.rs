// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Delimited-text reading and byte-level field handling

mod field_cleaner;
mod row_reader;

pub use field_cleaner::{clean_header_value, decode_field, is_blank};
pub use row_reader::{CsvRowReader, RowStream};
