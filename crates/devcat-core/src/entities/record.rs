use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, LifecycleStatus};

/// A screenshot or other media attached to a project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MediaItem {
    pub url: String,
    pub alt: String,
}

impl MediaItem {
    /// Alt text used when the source gives none. `index` is zero-based.
    #[must_use]
    pub fn placeholder_alt(index: usize) -> String {
        format!("Screenshot {}", index + 1)
    }
}

/// One cataloged software project.
///
/// Records are built once per load and never mutated afterwards. `id` is
/// unique within a record set and neither `id` nor `name` is ever empty.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub lifecycle_status: LifecycleStatus,
    pub short_summary: String,
    pub full_summary: String,
    pub problem_statement: String,
    pub rationale: String,
    pub build_notes: String,
    /// Technology stack, in source order.
    pub tags: Vec<String>,
    pub feature_list: Vec<String>,
    pub planned_feature_list: Vec<String>,
    pub architecture_notes: Option<String>,
    pub source_link: Option<String>,
    pub live_link: Option<String>,
    pub media: Vec<MediaItem>,
    /// Stamped with the load instant; not read from the source.
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectRecord {
    /// Minimal record with every optional field empty.
    ///
    /// Used by the loader as the base for row conversion and by tests.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        lifecycle_status: LifecycleStatus,
        loaded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            lifecycle_status,
            short_summary: String::new(),
            full_summary: String::new(),
            problem_statement: String::new(),
            rationale: String::new(),
            build_notes: String::new(),
            tags: Vec::new(),
            feature_list: Vec::new(),
            planned_feature_list: Vec::new(),
            architecture_notes: None,
            source_link: None,
            live_link: None,
            media: Vec::new(),
            created_at: loaded_at,
            updated_at: loaded_at,
        }
    }

    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.short_summary = summary.into();
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}
