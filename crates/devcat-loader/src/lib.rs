//! # devcat-loader
//!
//! Record Loader for DevCatalog.
//!
//! Turns the catalog spreadsheet into an ordered list of
//! [`ProjectRecord`]s:
//! - fetch the workbook bytes from a local file or an HTTP(S) URL
//! - decode the first (or configured) worksheet with calamine
//! - map each row to a record, applying the defaulting rules
//! - keep loaded record sets in a scoped [`RecordCache`]
//!
//! A missing source is not an error: it loads as an empty catalog.
//! [`RecordLoader::load`] also absorbs every other failure into an empty
//! catalog after logging it, so consumers only ever see a list.

mod cache;
mod error;
pub mod row;
pub mod sheet;
mod source;

pub use cache::{CacheLookup, RecordCache, Records, find_record};
pub use error::LoaderError;
pub use source::RecordSource;

use chrono::Utc;
use devcat_config::SourceConfig;
use devcat_core::entities::ProjectRecord;

/// Loads the catalog from one configured source.
#[derive(Debug, Clone)]
pub struct RecordLoader {
    source: RecordSource,
    sheet: Option<String>,
}

impl RecordLoader {
    #[must_use]
    pub const fn new(source: RecordSource, sheet: Option<String>) -> Self {
        Self { source, sheet }
    }

    #[must_use]
    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(
            RecordSource::from_config(config),
            config.sheet_name().map(str::to_string),
        )
    }

    #[must_use]
    pub const fn source(&self) -> &RecordSource {
        &self.source
    }

    /// Load every valid record, or an empty list on any failure.
    pub async fn load(&self) -> Vec<ProjectRecord> {
        match self.try_load().await {
            Ok(records) => records,
            Err(error) => {
                tracing::warn!(source = %self.source, %error, "failed to load catalog; using empty list");
                Vec::new()
            }
        }
    }

    /// Load every valid record, surfacing fetch and decode failures.
    ///
    /// All records of one load share the same `created_at`/`updated_at`
    /// instant.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError`] if the source exists but cannot be fetched or
    /// decoded.
    pub async fn try_load(&self) -> Result<Vec<ProjectRecord>, LoaderError> {
        let Some(bytes) = self.source.fetch().await? else {
            tracing::warn!(source = %self.source, "no catalog spreadsheet found; returning empty list");
            return Ok(Vec::new());
        };

        let rows = sheet::read_rows(bytes, self.sheet.as_deref())?;
        let records = row::records_from_rows(&rows, Utc::now());
        tracing::debug!(
            source = %self.source,
            rows = rows.len(),
            records = records.len(),
            "loaded catalog"
        );
        Ok(records)
    }
}
