//! Row to record conversion with the catalog's defaulting rules.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use devcat_core::entities::{MediaItem, ProjectRecord};
use devcat_core::enums::{Category, LifecycleStatus};

use crate::sheet::SheetRow;

/// Column headers of the catalog spreadsheet.
pub mod columns {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const SHORT_DESCRIPTION: &str = "short_description";
    pub const FULL_DESCRIPTION: &str = "full_description";
    pub const PROBLEM_SOLVED: &str = "problem_solved";
    pub const WHY_IT_EXISTS: &str = "why_it_exists";
    pub const HOW_IT_WAS_BUILT: &str = "how_it_was_built";
    pub const TYPE: &str = "type";
    pub const STATUS: &str = "status";
    pub const TECH_STACK: &str = "tech_stack";
    pub const FEATURES: &str = "features";
    pub const ARCHITECTURE_NOTES: &str = "architecture_notes";
    pub const GITHUB_URL: &str = "github_url";
    pub const LIVE_URL: &str = "live_url";
    pub const UPCOMING_FEATURES: &str = "upcoming_features";
    pub const SCREENSHOT_URLS: &str = "screenshot_urls";
    pub const SCREENSHOT_ALTS: &str = "screenshot_alts";
}

/// Split a comma-separated cell into trimmed, non-empty items.
#[must_use]
pub fn parse_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Pair screenshot urls with alt texts by position.
#[must_use]
pub fn parse_media(urls: Option<&str>, alts: Option<&str>) -> Vec<MediaItem> {
    let alts = parse_list(alts);
    parse_list(urls)
        .into_iter()
        .enumerate()
        .map(|(index, url)| MediaItem {
            url,
            alt: alts
                .get(index)
                .cloned()
                .unwrap_or_else(|| MediaItem::placeholder_alt(index)),
        })
        .collect()
}

/// Convert one row, or `None` if it lacks an id or a name.
#[must_use]
pub fn record_from_row(row: &SheetRow, loaded_at: DateTime<Utc>) -> Option<ProjectRecord> {
    let id = row.get(columns::ID)?;
    let name = row.get(columns::NAME)?;
    let text = |column: &str| row.get(column).unwrap_or_default().to_string();
    let optional = |column: &str| row.get(column).map(str::to_string);

    let mut record = ProjectRecord::new(
        id,
        name,
        row.get(columns::TYPE)
            .map_or(Category::FALLBACK, Category::from_cell),
        row.get(columns::STATUS)
            .map_or(LifecycleStatus::FALLBACK, LifecycleStatus::from_cell),
        loaded_at,
    );
    record.short_summary = text(columns::SHORT_DESCRIPTION);
    record.full_summary = text(columns::FULL_DESCRIPTION);
    record.problem_statement = text(columns::PROBLEM_SOLVED);
    record.rationale = text(columns::WHY_IT_EXISTS);
    record.build_notes = text(columns::HOW_IT_WAS_BUILT);
    record.tags = parse_list(row.get(columns::TECH_STACK));
    record.feature_list = parse_list(row.get(columns::FEATURES));
    record.planned_feature_list = parse_list(row.get(columns::UPCOMING_FEATURES));
    record.architecture_notes = optional(columns::ARCHITECTURE_NOTES);
    record.source_link = optional(columns::GITHUB_URL);
    record.live_link = optional(columns::LIVE_URL);
    record.media = parse_media(
        row.get(columns::SCREENSHOT_URLS),
        row.get(columns::SCREENSHOT_ALTS),
    );
    Some(record)
}

/// Convert every row, preserving sheet order.
///
/// Rows without an id or name are dropped. When ids repeat, the first row
/// wins and later ones are dropped.
#[must_use]
pub fn records_from_rows(rows: &[SheetRow], loaded_at: DateTime<Utc>) -> Vec<ProjectRecord> {
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        // Header is sheet line 1.
        let line = index + 2;
        let Some(record) = record_from_row(row, loaded_at) else {
            tracing::debug!(line, "skipping row without id or name");
            continue;
        };
        if !seen.insert(record.id.clone()) {
            tracing::warn!(line, id = %record.id, "skipping row with duplicate id");
            continue;
        }
        records.push(record);
    }

    records
}
