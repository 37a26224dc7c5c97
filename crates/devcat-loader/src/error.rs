//! Loader error types.

use thiserror::Error;

/// Errors that can occur while fetching or decoding the catalog spreadsheet.
///
/// [`crate::RecordLoader::load`] logs these and yields an empty record set;
/// only [`crate::RecordLoader::try_load`] surfaces them.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Local file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote source returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// The workbook could not be decoded.
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// The workbook has no worksheets at all.
    #[error("workbook contains no sheets")]
    NoSheets,

    /// The configured worksheet does not exist.
    #[error("sheet '{0}' not found in workbook")]
    SheetNotFound(String),
}
