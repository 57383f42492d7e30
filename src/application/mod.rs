pub mod use_cases;

pub use use_cases::column_pruner::ColumnPruner;
pub use use_cases::csv_table::CsvTable;
pub use use_cases::table_builder::TableBuilder;
pub use use_cases::table_renderer::TableRenderer;
