pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

mod app;

pub use crate::app::run;
pub use crate::application::CsvTable;
pub use crate::domain::csv::{CsvSourceConfig, OutputFormat, TableDocument};
pub use crate::domain::error::{AppError, Result};
