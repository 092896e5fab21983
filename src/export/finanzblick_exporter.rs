//! Writes the canonical transaction list as a Finanzblick import CSV.
//!
//! Finanzblick expects German conventions: semicolon separator, comma
//! decimal separator, `DD.MM.YYYY` dates, and a UTF-8 byte-order mark so
//! the importer detects the encoding.

use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use log::info;
use thiserror::Error;

use crate::constants::OUTPUT_FILENAME;
use crate::transactions::Transaction;

/// Column order required by Finanzblick. Missing values are written as
/// empty fields, never omitted.
const COLUMNS: [&str; 9] = [
    "Buchungsdatum",
    "Wertstellungsdatum",
    "Auswertungsdatum",
    "Empfänger",
    "Verwendungszweck",
    "Buchungstext",
    "Betrag",
    "IBAN",
    "BIC",
];

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no transactions to export")]
    NoTransactions,

    #[error("failed to write output file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize row: {0}")]
    Csv(#[from] csv::Error),
}

/// Exports transactions to the Finanzblick CSV format.
pub struct FinanzblickCsvExporter {
    output_path: PathBuf,
}

impl Default for FinanzblickCsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl FinanzblickCsvExporter {
    pub fn new() -> Self {
        Self {
            output_path: PathBuf::from(OUTPUT_FILENAME),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Write all transactions, most recent booking day first, overwriting
    /// any previous file. Returns the number of rows written.
    ///
    /// Refuses an empty input: no file is touched when there is nothing to
    /// export.
    pub fn export(&self, transactions: &[Transaction]) -> Result<usize, ExportError> {
        if transactions.is_empty() {
            return Err(ExportError::NoTransactions);
        }

        let buffer = render(transactions)?;
        std::fs::write(&self.output_path, buffer)?;

        info!(
            "wrote {} rows to {}",
            transactions.len(),
            self.output_path.display()
        );
        Ok(transactions.len())
    }
}

/// Render the full file contents, BOM included.
fn render(transactions: &[Transaction]) -> Result<Vec<u8>, ExportError> {
    // Stable sort on the booking day keeps same-day rows in input order.
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by(|a, b| b.booking_day().cmp(&a.booking_day()));

    let mut buffer = Vec::new();
    buffer.extend_from_slice(UTF8_BOM);

    let mut writer = WriterBuilder::new().delimiter(b';').from_writer(&mut buffer);
    writer.write_record(COLUMNS)?;
    for transaction in &ordered {
        writer.write_record(row(transaction))?;
    }
    writer.flush().map_err(ExportError::Io)?;
    drop(writer);

    Ok(buffer)
}

fn row(transaction: &Transaction) -> [String; 9] {
    let date = transaction.formatted_date();
    [
        date.clone(),
        date.clone(),
        date,
        transaction.recipient.clone(),
        transaction.description.clone(),
        transaction.kind.booking_text().to_string(),
        format_german_amount(transaction.signed_amount()),
        String::new(),
        String::new(),
    ]
}

/// Two decimal digits, comma decimal separator, no thousands separator.
fn format_german_amount(value: f64) -> String {
    format!("{:.2}", value).replace('.', ",")
}
