// ============================================================
// OUTPUT FORMAT ENUM
// ============================================================
// The two renderings a loaded table can be turned into

use serde::{Deserialize, Serialize};

/// Rendering requested for a loaded table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{ head, body }` structured object
    #[default]
    Json,

    /// `<table>` markup
    Html,
}

impl OutputFormat {
    /// Content type to declare when the rendering crosses a network boundary
    pub fn content_type(&self) -> &'static str {
        match self {
            OutputFormat::Json => "application/json; charset=utf-8",
            OutputFormat::Html => "text/html; charset=utf-8",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}
