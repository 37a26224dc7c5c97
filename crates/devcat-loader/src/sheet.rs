//! Worksheet decoding: workbook bytes to header-keyed rows.
//!
//! The first row of the sheet is the header row. Every following row becomes
//! a [`SheetRow`] mapping lowercased header names to trimmed cell text. Blank
//! and error cells are left out, and rows with no cells at all are skipped.
//! When two headers normalize to the same name, the leftmost column wins.

use std::collections::{HashMap, HashSet};
use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use crate::error::LoaderError;

/// One data row of the worksheet, keyed by column header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRow {
    cells: HashMap<String, String>,
}

impl SheetRow {
    /// Build a row from `(header, value)` pairs, applying the same
    /// normalization as decoded sheets.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let (keys, values): (Vec<_>, Vec<_>) = pairs
            .into_iter()
            .map(|(key, value)| (normalize_header(key.as_ref()), value))
            .unzip();
        let cells = unique_headers(keys)
            .into_iter()
            .zip(values)
            .filter_map(|(key, value)| {
                let key = key?;
                let value = value.as_ref().trim();
                (!value.is_empty()).then(|| (key, value.to_string()))
            })
            .collect();
        Self { cells }
    }

    /// Trimmed, non-empty text of `column`.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Decode `bytes` as a workbook (xlsx, xls, xlsb or ods) and read the rows of
/// `sheet`, or of the first sheet when `sheet` is `None`.
///
/// # Errors
///
/// Returns [`LoaderError::Spreadsheet`] if the bytes are not a workbook,
/// [`LoaderError::NoSheets`] for an empty workbook, and
/// [`LoaderError::SheetNotFound`] if the named sheet is missing.
pub fn read_rows(bytes: Vec<u8>, sheet: Option<&str>) -> Result<Vec<SheetRow>, LoaderError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let sheet_names = workbook.sheet_names();

    let sheet_name = match sheet {
        Some(name) => sheet_names
            .iter()
            .find(|candidate| candidate.as_str() == name)
            .cloned()
            .ok_or_else(|| LoaderError::SheetNotFound(name.to_string()))?,
        None => sheet_names.first().cloned().ok_or(LoaderError::NoSheets)?,
    };

    let range = workbook.worksheet_range(&sheet_name)?;
    let mut rows = range.rows();

    let Some(header_row) = rows.next() else {
        return Ok(Vec::new());
    };
    let headers = unique_headers(
        header_row
            .iter()
            .map(|cell| cell_text(cell).and_then(|text| normalize_header(&text))),
    );

    let decoded = rows
        .map(|row| {
            let cells = headers
                .iter()
                .zip(row)
                .filter_map(|(header, cell)| Some((header.clone()?, cell_text(cell)?)))
                .collect();
            SheetRow { cells }
        })
        .filter(|row| !row.is_empty())
        .collect::<Vec<_>>();

    tracing::debug!(sheet = %sheet_name, rows = decoded.len(), "decoded worksheet");
    Ok(decoded)
}

/// Blank out every repeat of an already-seen header so its column is
/// ignored.
fn unique_headers<I>(headers: I) -> Vec<Option<String>>
where
    I: IntoIterator<Item = Option<String>>,
{
    let mut seen = HashSet::new();
    headers
        .into_iter()
        .enumerate()
        .map(|(column, header)| {
            let header = header?;
            if seen.insert(header.clone()) {
                Some(header)
            } else {
                tracing::warn!(%header, column, "duplicate column header; keeping the first");
                None
            }
        })
        .collect()
}

fn normalize_header(raw: &str) -> Option<String> {
    let header = raw.trim().to_ascii_lowercase();
    (!header.is_empty()).then_some(header)
}

/// Text of a cell, or `None` for blank and error cells.
fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty | Data::Error(_) => return None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::Float(f) => {
            // Ids typed as numbers come back as floats; keep them integral.
            if f.fract() == 0.0 {
                format!("{f:.0}")
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::DateTime(dt) => dt.to_string(),
    };
    (!text.is_empty()).then_some(text)
}
