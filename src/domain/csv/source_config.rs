// ============================================================
// SOURCE CONFIGURATION
// ============================================================
// Where the delimited file lives and how to read it

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for loading one delimited source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvSourceConfig {
    /// Path to the delimited text file (default: list.csv)
    pub path: PathBuf,

    /// Single-byte field delimiter (default: ';')
    pub delimiter: char,

    /// Treat the first row as column headers (default: true)
    pub first_row_is_headers: bool,

    /// Prefix for positional keys (default: "col_")
    pub key_prefix: String,

    /// HTML-escape cell contents in the table rendering (default: false).
    /// Off means cells are interpolated raw, so only trusted input is safe.
    pub escape_cells: bool,
}

impl Default for CsvSourceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("list.csv"),
            delimiter: ';',
            first_row_is_headers: true,
            key_prefix: "col_".to_string(),
            escape_cells: false,
        }
    }
}

impl CsvSourceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_headers(mut self, first_row_is_headers: bool) -> Self {
        self.first_row_is_headers = first_row_is_headers;
        self
    }

    pub fn with_key_prefix(mut self, key_prefix: impl Into<String>) -> Self {
        self.key_prefix = key_prefix.into();
        self
    }

    pub fn with_escape_cells(mut self, escape_cells: bool) -> Self {
        self.escape_cells = escape_cells;
        self
    }

    /// Delimiter as the single byte the reader expects
    pub fn delimiter_byte(&self) -> u8 {
        // validate() guarantees ASCII
        self.delimiter as u8
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if !self.delimiter.is_ascii() {
            return Err(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ));
        }
        if self.delimiter == '"' {
            return Err("delimiter cannot be the quote character".to_string());
        }
        if self.key_prefix.is_empty() {
            return Err("key_prefix must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CsvSourceConfig::default();
        assert_eq!(config.path, PathBuf::from("list.csv"));
        assert_eq!(config.delimiter, ';');
        assert!(config.first_row_is_headers);
        assert_eq!(config.key_prefix, "col_");
        assert!(!config.escape_cells);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_ascii_delimiter() {
        let config = CsvSourceConfig::new().with_delimiter('§');
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_quote_delimiter_and_empty_prefix() {
        assert!(CsvSourceConfig::new().with_delimiter('"').validate().is_err());
        assert!(CsvSourceConfig::new().with_key_prefix("").validate().is_err());
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let config: CsvSourceConfig =
            serde_json::from_str(r#"{"delimiter": ",", "key_prefix": "c"}"#).unwrap();
        assert_eq!(config.delimiter, ',');
        assert_eq!(config.key_prefix, "c");
        assert_eq!(config.path, PathBuf::from("list.csv"));
        assert_eq!(config.delimiter_byte(), b',');
    }
}
