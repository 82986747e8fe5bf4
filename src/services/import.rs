//! Statement import service
//!
//! Reads bank statement CSV exports and text-based PDF statements, works out
//! which columns hold the date, description and amount from the header row,
//! and categorizes every line.
//!
//! PDF statements are read as text. Each text line is a table row whose cells
//! are separated by tabs or runs of two or more spaces; the first line that
//! names a description and an amount column is the header.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use lopdf::Document;
use tracing::{debug, warn};

use crate::config::settings::Settings;
use crate::error::{FinflowError, FinflowResult};
use crate::models::{Money, StatementTransaction};
use crate::services::Categorizer;

/// Header names accepted for the date column
const DATE_HEADERS: &[&str] = &["date", "transaction date", "posted date", "when"];

/// Header names accepted for the description column
const DESCRIPTION_HEADERS: &[&str] = &[
    "description",
    "narrow description",
    "transaction",
    "details",
    "info",
];

/// Header names accepted for the amount column
const AMOUNT_HEADERS: &[&str] = &[
    "amount",
    "value",
    "transaction amount",
    "credit/debit",
    "money",
];

/// Fallback date formats, tried after the configured one
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d/%m/%y", "%m/%d/%y", "%d-%m-%Y", "%d %b %Y", "%Y/%m/%d",
];

/// Which column holds what
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementColumns {
    pub date: Option<usize>,
    pub description: usize,
    pub amount: usize,
}

impl StatementColumns {
    /// Detect columns from a header row
    ///
    /// Headers are compared trimmed and lower-cased against fixed alias
    /// lists. Description and amount are required; date is optional.
    pub fn detect(headers: &StringRecord) -> FinflowResult<Self> {
        let find = |aliases: &[&str]| {
            headers
                .iter()
                .position(|h| aliases.contains(&h.trim().to_lowercase().as_str()))
        };

        let description = find(DESCRIPTION_HEADERS).ok_or_else(|| {
            FinflowError::Import("No description column found in statement header".into())
        })?;
        let amount = find(AMOUNT_HEADERS).ok_or_else(|| {
            FinflowError::Import("No amount column found in statement header".into())
        })?;

        Ok(Self {
            date: find(DATE_HEADERS),
            description,
            amount,
        })
    }
}

/// A statement line that could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// Line number in the file (header is line 1)
    pub line: u64,
    pub message: String,
}

/// Result of reading one statement
#[derive(Debug, Clone, Default)]
pub struct StatementImport {
    pub transactions: Vec<StatementTransaction>,
    pub errors: Vec<RowError>,
    /// Rows dropped for having no description
    pub skipped: usize,
}

/// Service for reading statement files
pub struct ImportService<'a> {
    settings: &'a Settings,
    categorizer: Categorizer,
}

impl<'a> ImportService<'a> {
    /// Create a new import service with the standard category rules
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            categorizer: Categorizer::default(),
        }
    }

    /// Read a statement file, as PDF when the extension says so and as CSV
    /// otherwise
    pub fn import_file(&self, path: &Path) -> FinflowResult<StatementImport> {
        if !path.exists() {
            return Err(FinflowError::Import(format!(
                "File not found: {}",
                path.display()
            )));
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        if extension.as_deref() == Some("pdf") {
            return self.import_pdf(path);
        }

        let file = std::fs::File::open(path)
            .map_err(|e| FinflowError::Import(format!("Failed to open {}: {}", path.display(), e)))?;

        debug!(path = %path.display(), "reading statement");
        self.parse_reader(file)
    }

    /// Read a text-based PDF statement
    fn import_pdf(&self, path: &Path) -> FinflowResult<StatementImport> {
        let read_error = |e: lopdf::Error| {
            FinflowError::Import(format!("Failed to read PDF {}: {}", path.display(), e))
        };

        let document = Document::load(path).map_err(read_error)?;
        let pages: Vec<u32> = document.get_pages().keys().copied().collect();
        if pages.is_empty() {
            return Err(FinflowError::Import(format!(
                "PDF {} has no pages",
                path.display()
            )));
        }

        let text = document.extract_text(&pages).map_err(read_error)?;
        debug!(path = %path.display(), pages = pages.len(), "read statement PDF");
        self.parse_text_table(&text)
    }

    /// Parse a statement laid out as text lines
    pub fn parse_text_table(&self, text: &str) -> FinflowResult<StatementImport> {
        let rows: Vec<(u64, StringRecord)> = text
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx as u64 + 1, StringRecord::from(split_cells(line))))
            .filter(|(_, record)| !record.is_empty())
            .collect();

        let (header_at, columns) = rows
            .iter()
            .enumerate()
            .find_map(|(pos, (_, record))| {
                StatementColumns::detect(record).ok().map(|columns| (pos, columns))
            })
            .ok_or_else(|| {
                FinflowError::Import(
                    "No statement table found: expected a header row with description and amount columns"
                        .into(),
                )
            })?;
        debug!(?columns, header_line = rows[header_at].0, "detected statement columns");

        let mut import = StatementImport::default();
        for (line, record) in &rows[header_at + 1..] {
            self.push_record(&mut import, *line, record, &columns);
        }

        log_summary(&import);
        Ok(import)
    }

    /// Parse statement CSV held in memory
    pub fn parse_csv(&self, content: &str) -> FinflowResult<StatementImport> {
        self.parse_reader(content.as_bytes())
    }

    /// Parse statement CSV from any reader
    pub fn parse_reader<R: Read>(&self, reader: R) -> FinflowResult<StatementImport> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| FinflowError::Import(format!("Failed to read header row: {}", e)))?
            .clone();
        let columns = StatementColumns::detect(&headers)?;
        debug!(?columns, "detected statement columns");

        let mut import = StatementImport::default();

        for (idx, result) in reader.records().enumerate() {
            let fallback_line = idx as u64 + 2;
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    import.errors.push(RowError {
                        line: fallback_line,
                        message: format!("Error reading CSV record: {}", e),
                    });
                    continue;
                }
            };
            let line = record.position().map(|p| p.line()).unwrap_or(fallback_line);
            self.push_record(&mut import, line, &record, &columns);
        }

        log_summary(&import);
        Ok(import)
    }

    fn push_record(
        &self,
        import: &mut StatementImport,
        line: u64,
        record: &StringRecord,
        columns: &StatementColumns,
    ) {
        match self.parse_record(record, columns) {
            Ok(Some(txn)) => import.transactions.push(txn),
            Ok(None) => import.skipped += 1,
            Err(message) => {
                warn!(line, %message, "skipping statement row");
                import.errors.push(RowError { line, message });
            }
        }
    }

    /// Parse one record; `Ok(None)` means the row has no description
    fn parse_record(
        &self,
        record: &StringRecord,
        columns: &StatementColumns,
    ) -> Result<Option<StatementTransaction>, String> {
        let description = record.get(columns.description).unwrap_or("").trim();
        if description.is_empty() {
            return Ok(None);
        }

        let amount_str = record
            .get(columns.amount)
            .ok_or_else(|| "Missing amount".to_string())?;
        let amount = Money::parse(amount_str)
            .map_err(|e| format!("Could not parse amount: {}", e))?;

        let category = self.categorizer.categorize(description);
        let mut txn = StatementTransaction::new(description, amount, category);

        if let Some(date_str) = columns.date.and_then(|col| record.get(col)) {
            match self.parse_date(date_str) {
                Some(date) => txn = txn.with_date(date),
                None if !date_str.is_empty() => {
                    warn!(date = date_str, "unrecognised statement date, keeping row undated");
                }
                None => {}
            }
        }

        Ok(Some(txn))
    }

    /// Parse a date string trying the configured format first
    fn parse_date(&self, s: &str) -> Option<NaiveDate> {
        std::iter::once(self.settings.statement_date_format.as_str())
            .chain(DATE_FORMATS.iter().copied())
            .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
    }
}

/// Split a text line into cells on tabs or runs of two or more spaces
fn split_cells(line: &str) -> Vec<&str> {
    line.split('\t')
        .flat_map(|part| part.split("  "))
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect()
}

fn log_summary(import: &StatementImport) {
    debug!(
        transactions = import.transactions.len(),
        errors = import.errors.len(),
        skipped = import.skipped,
        "parsed statement"
    );
}
