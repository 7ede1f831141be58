// src/pipeline/export.rs

//! CSV serialization of report rows.

use std::io::Write;

use crate::error::{AppError, Result};
use crate::models::{HEADER, OutputRecord};

/// Write the header and every row to `writer`, in order.
///
/// The header is written even when there are no rows.
pub fn write_csv<W: Write>(writer: W, rows: &[OutputRecord]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Serialize rows into an in-memory CSV document.
pub fn to_csv_bytes(rows: &[OutputRecord]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, rows)?;
    Ok(buffer)
}

/// Serialize rows into a CSV string.
pub fn to_csv_string(rows: &[OutputRecord]) -> Result<String> {
    String::from_utf8(to_csv_bytes(rows)?)
        .map_err(|e| AppError::validation(format!("CSV output is not UTF-8: {e}")))
}
