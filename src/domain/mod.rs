pub mod error;

// Table pipeline types
pub mod csv;
