// ============================================================
// CSV TABLE USE CASE
// ============================================================
// Load a delimited source once, then render it pruned on demand

use std::io::Read;
use std::time::Instant;

use tracing::info;

use crate::application::use_cases::column_pruner::ColumnPruner;
use crate::application::use_cases::table_builder::TableBuilder;
use crate::application::use_cases::table_renderer::TableRenderer;
use crate::domain::csv::{ColumnLiveness, CsvSourceConfig, OutputFormat, RawRow, TableDocument};
use crate::domain::error::{AppError, Result};
use crate::infrastructure::csv::CsvRowReader;

/// A fully loaded source.
///
/// Every render starts by pruning clean columns; liveness is final once
/// loading returns, so repeated renders agree with each other.
#[derive(Debug, Clone)]
pub struct CsvTable {
    config: CsvSourceConfig,
    document: TableDocument,
    liveness: ColumnLiveness,
}

impl CsvTable {
    /// Read the configured file to the end.
    ///
    /// Missing or unreadable sources fail with `SourceUnavailable` before
    /// any document exists.
    pub fn load(config: CsvSourceConfig) -> Result<Self> {
        Self::validate(&config)?;

        let rows = Self::reader(&config).open(&config.path)?;
        info!(path = %config.path.display(), "loading source");
        Self::process(config, rows)
    }

    /// Same as `load`, reading from an already open byte source
    pub fn from_reader<R: Read>(config: CsvSourceConfig, reader: R) -> Result<Self> {
        Self::validate(&config)?;

        let rows = Self::reader(&config).from_reader(reader);
        Self::process(config, rows)
    }

    fn validate(config: &CsvSourceConfig) -> Result<()> {
        config
            .validate()
            .map_err(|e| AppError::ValidationError(format!("Invalid source config: {}", e)))
    }

    fn reader(config: &CsvSourceConfig) -> CsvRowReader {
        CsvRowReader::new().with_delimiter(config.delimiter_byte())
    }

    fn process<I>(config: CsvSourceConfig, rows: I) -> Result<Self>
    where
        I: Iterator<Item = Result<RawRow>>,
    {
        let start = Instant::now();
        let mut builder = TableBuilder::new(config.key_prefix.clone());

        for (index, row) in rows.enumerate() {
            let row = row?;
            if index == 0 && config.first_row_is_headers {
                builder.set_headers(&row);
                continue;
            }
            builder.push_content(&row);
        }

        let (document, liveness) = builder.finish();
        let clean_columns = liveness.clean_indexes().count();

        info!(
            headers = document.head.len(),
            rows = document.body.len(),
            tracked_columns = liveness.len(),
            clean_columns,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "source loaded"
        );

        Ok(Self {
            config,
            document,
            liveness,
        })
    }

    pub fn config(&self) -> &CsvSourceConfig {
        &self.config
    }

    pub fn liveness(&self) -> &ColumnLiveness {
        &self.liveness
    }

    /// Headers and rows with every clean column removed
    pub fn as_structured_data(&self) -> TableDocument {
        let mut document = self.document.clone();
        ColumnPruner::new(&self.config.key_prefix).prune(&mut document, &self.liveness);
        document
    }

    pub fn as_json(&self) -> Result<String> {
        self.renderer().render_json(&self.as_structured_data())
    }

    pub fn as_json_value(&self) -> Result<serde_json::Value> {
        self.renderer().render_json_value(&self.as_structured_data())
    }

    pub fn as_html_table(&self) -> String {
        self.renderer().render_html(&self.as_structured_data())
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => self.as_json(),
            OutputFormat::Html => Ok(self.as_html_table()),
        }
    }

    fn renderer(&self) -> TableRenderer {
        TableRenderer::new().with_escape_cells(self.config.escape_cells)
    }
}
