// ============================================================
// ROW READER
// ============================================================
// Stream raw records out of a delimited file

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, Reader, ReaderBuilder, Trim};
use tracing::{debug, warn};

use crate::domain::csv::RawRow;
use crate::domain::error::{AppError, Result};

const MISSING_SOURCE_HINT: &str = "Please specify a CSV filename and make sure it exists.";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Delimited-text reader producing raw byte rows
pub struct CsvRowReader {
    /// Delimiter byte (default: semicolon)
    delimiter: u8,
}

impl Default for CsvRowReader {
    fn default() -> Self {
        Self { delimiter: b';' }
    }
}

impl CsvRowReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Open a file and stream its rows.
    ///
    /// Fails with `SourceUnavailable` when the path is empty, missing, or
    /// cannot be opened. The handle is closed when the stream is dropped.
    pub fn open(&self, path: &Path) -> Result<RowStream<File>> {
        if path.as_os_str().is_empty() || !path.exists() {
            warn!(path = %path.display(), "source file missing");
            return Err(AppError::SourceUnavailable(format!(
                "{} ({})",
                MISSING_SOURCE_HINT,
                path.display()
            )));
        }

        let file = File::open(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "source file unreadable");
            AppError::SourceUnavailable(format!("{} ({}: {})", MISSING_SOURCE_HINT, path.display(), e))
        })?;

        debug!(path = %path.display(), delimiter = %(self.delimiter as char), "opened source");
        Ok(self.from_reader(file))
    }

    /// Stream rows from any byte source (in-memory content, pipes)
    pub fn from_reader<R: Read>(&self, reader: R) -> RowStream<R> {
        let inner = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true) // Rows may be shorter or longer than the header
            .trim(Trim::None)
            .from_reader(LeadSniffer::new(reader));

        RowStream {
            inner,
            record: ByteRecord::new(),
            first_record: true,
            finished: false,
        }
    }
}

/// Pass-through reader that remembers the first bytes of the source.
///
/// The `csv` reader drops a leading UTF-8 BOM; this lets the stream put
/// it back so the first field reaches the caller unchanged.
struct LeadSniffer<R> {
    inner: R,
    lead: Vec<u8>,
}

impl<R> LeadSniffer<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            lead: Vec::with_capacity(UTF8_BOM.len()),
        }
    }

    fn starts_with_bom(&self) -> bool {
        self.lead == UTF8_BOM
    }
}

impl<R: Read> Read for LeadSniffer<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(buf)?;
        let missing = UTF8_BOM.len() - self.lead.len();
        if missing > 0 {
            self.lead.extend_from_slice(&buf[..n.min(missing)]);
        }
        Ok(n)
    }
}

/// Lazy, non-restartable sequence of raw rows.
///
/// Yields `Err` at most once; the stream ends right after.
pub struct RowStream<R> {
    inner: Reader<LeadSniffer<R>>,
    record: ByteRecord,
    first_record: bool,
    finished: bool,
}

impl<R: Read> Iterator for RowStream<R> {
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.inner.read_byte_record(&mut self.record) {
            Ok(true) => {
                let mut row: RawRow = self.record.iter().map(|field| field.to_vec()).collect();
                if std::mem::take(&mut self.first_record) && self.inner.get_ref().starts_with_bom() {
                    if let Some(first) = row.first_mut() {
                        first.splice(0..0, UTF8_BOM.iter().copied());
                    }
                }
                Some(Ok(row))
            }
            Ok(false) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e.into()))
            }
        }
    }
}
