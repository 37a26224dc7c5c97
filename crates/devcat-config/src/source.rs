//! Record source configuration.

use serde::{Deserialize, Serialize};

/// Spreadsheet path used when nothing else is configured.
pub const DEFAULT_SOURCE_PATH: &str = "public/data/apps.xlsx";

fn default_path() -> String {
    DEFAULT_SOURCE_PATH.to_string()
}

/// Default HTTP timeout for remote spreadsheets, in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

/// Where the catalog spreadsheet comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLocation<'a> {
    File(&'a str),
    Url(&'a str),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Local spreadsheet path, relative to the working directory.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote spreadsheet URL. Takes precedence over `path` when set.
    #[serde(default)]
    pub url: String,

    /// Worksheet name. Empty means the first sheet of the workbook.
    #[serde(default)]
    pub sheet: String,

    /// Timeout for remote fetches, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            sheet: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SourceConfig {
    /// Whether the section differs from the built-in default location.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.is_remote() || self.path != DEFAULT_SOURCE_PATH
    }

    #[must_use]
    pub fn is_remote(&self) -> bool {
        !self.url.trim().is_empty()
    }

    #[must_use]
    pub fn location(&self) -> SourceLocation<'_> {
        if self.is_remote() {
            SourceLocation::Url(self.url.trim())
        } else {
            SourceLocation::File(&self.path)
        }
    }

    /// Configured sheet name, or `None` for "first sheet".
    #[must_use]
    pub fn sheet_name(&self) -> Option<&str> {
        let sheet = self.sheet.trim();
        (!sheet.is_empty()).then_some(sheet)
    }

    /// Point the source at `target`, choosing URL or path by its scheme.
    pub fn set_target(&mut self, target: &str) {
        if target.starts_with("http://") || target.starts_with("https://") {
            self.url = target.to_string();
        } else {
            self.url.clear();
            self.path = target.to_string();
        }
    }
}
