//! Query state and its evaluated view.

use devcat_core::entities::ProjectRecord;
use devcat_core::enums::Category;
use schemars::JsonSchema;
use serde::Serialize;

use crate::counts::{CategoryCounts, compute_category_counts};
use crate::engine::filter_records;
use crate::selection::{CategoryFilter, Selection, StatusFilter};

/// The `(search, category, status)` triple driving a catalog listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub search: String,
    pub category: CategoryFilter,
    pub status: StatusFilter,
}

impl QueryState {
    #[must_use]
    pub fn new(search: impl Into<String>, category: CategoryFilter, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            category,
            status,
        }
    }

    /// Select `category`, or go back to all categories if it is already
    /// the active one.
    pub fn toggle_category(&mut self, category: Category) {
        self.category = if self.category == Selection::Only(category) {
            Selection::All
        } else {
            Selection::Only(category)
        };
    }

    pub fn clear_category(&mut self) {
        self.category = Selection::All;
    }

    pub fn set_status(&mut self, status: impl Into<StatusFilter>) {
        self.status = status.into();
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Clear search, category and status in one step.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty() || !self.category.is_all() || !self.status.is_all()
    }

    /// Evaluate this state against the full record set.
    ///
    /// Counts always cover `records`, not the filtered subset.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [ProjectRecord]) -> CatalogView<'a> {
        let filtered = filter_records(records, &self.search, self.category, self.status);
        CatalogView {
            total: records.len(),
            shown: filtered.len(),
            counts: compute_category_counts(records),
            records: filtered,
        }
    }
}

/// Filtered records plus category counts for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CatalogView<'a> {
    pub records: Vec<&'a ProjectRecord>,
    pub counts: CategoryCounts,
    pub total: usize,
    pub shown: usize,
}

impl CatalogView<'_> {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
