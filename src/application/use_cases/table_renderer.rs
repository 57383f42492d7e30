// ============================================================
// TABLE RENDERER
// ============================================================
// Structured-object and HTML table renderings of a pruned document

use crate::domain::csv::TableDocument;
use crate::domain::error::{AppError, Result};

const TABLE_OPEN: &str = r#"<table border="1" style="border-collapse: collapse;">"#;

/// Renderer settings
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer {
    /// Escape HTML metacharacters in cells (default: false, raw interpolation)
    escape_cells: bool,
}

impl TableRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_escape_cells(mut self, escape_cells: bool) -> Self {
        self.escape_cells = escape_cells;
        self
    }

    /// `{"head": [...], "body": [...]}`
    pub fn render_json(&self, document: &TableDocument) -> Result<String> {
        serde_json::to_string(document)
            .map_err(|e| AppError::Internal(format!("Failed to encode table as JSON: {}", e)))
    }

    pub fn render_json_value(&self, document: &TableDocument) -> Result<serde_json::Value> {
        serde_json::to_value(document)
            .map_err(|e| AppError::Internal(format!("Failed to encode table as JSON: {}", e)))
    }

    /// Complete `<table>...</table>` markup.
    ///
    /// thead is emitted only with headers, tbody only with rows. Body cells
    /// follow each row's stored key order.
    pub fn render_html(&self, document: &TableDocument) -> String {
        let mut html = String::from(TABLE_OPEN);

        if !document.head.is_empty() {
            html.push_str("<thead>");
            html.push_str("<tr>");
            for header in &document.head {
                html.push_str("<th>");
                html.push_str(&self.cell(&header.value));
                html.push_str("</th>");
            }
            html.push_str("</tr>");
            html.push_str("</thead>");
        }

        if !document.body.is_empty() {
            html.push_str("<tbody>");
            for row in &document.body {
                html.push_str("<tr>");
                for (_, value) in row.iter() {
                    html.push_str("<td>");
                    html.push_str(&self.cell(value));
                    html.push_str("</td>");
                }
                html.push_str("</tr>");
            }
            html.push_str("</tbody>");
        }

        html.push_str("</table>");
        html
    }

    fn cell(&self, value: &str) -> String {
        if self.escape_cells {
            escape_html(value)
        } else {
            value.to_string()
        }
    }
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
