//! Record filtering.

use devcat_core::entities::ProjectRecord;

use crate::selection::{CategoryFilter, StatusFilter};

/// Case-insensitive substring match of `needle` against name, short
/// summary, and tags.
///
/// An empty needle matches every record.
#[must_use]
pub fn matches_search(record: &ProjectRecord, needle: &str) -> bool {
    matches_lowered(record, &needle.to_lowercase())
}

/// [`matches_search`] for a needle that is already lowercase.
fn matches_lowered(record: &ProjectRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);
    contains(&record.name)
        || contains(&record.short_summary)
        || record.tags.iter().any(|tag| contains(tag))
}

/// Keep the records that pass the search term and both selections, in input
/// order.
///
/// The term is used verbatim apart from lowercasing: surrounding whitespace
/// is part of the substring.
#[must_use]
pub fn filter_records<'a>(
    records: &'a [ProjectRecord],
    search_term: &str,
    category: CategoryFilter,
    status: StatusFilter,
) -> Vec<&'a ProjectRecord> {
    let needle = search_term.to_lowercase();
    records
        .iter()
        .filter(|record| {
            matches_lowered(record, &needle)
                && category.admits(&record.category)
                && status.admits(&record.lifecycle_status)
        })
        .collect()
}
