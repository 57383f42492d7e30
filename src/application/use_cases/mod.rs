pub mod column_pruner;
pub mod csv_table;
pub mod table_builder;
pub mod table_renderer;
