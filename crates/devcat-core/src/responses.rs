//! CLI response types returned as JSON by `devcat` commands.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::ProjectRecord;
use crate::enums::{Category, FeedbackKind, LifecycleStatus};

/// One row of `devcat list`: the fields a listing card shows.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecordSummary {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub status: LifecycleStatus,
    pub summary: String,
    pub tags: Vec<String>,
}

impl From<&ProjectRecord> for RecordSummary {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            category: record.category,
            status: record.lifecycle_status,
            summary: record.short_summary.clone(),
            tags: record.tags.clone(),
        }
    }
}

/// Response from `devcat list`.
///
/// `matched` counts every record passing the filters; `shown` is the number
/// of `records` left after the output limit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ListResponse {
    pub total: usize,
    pub matched: usize,
    pub shown: usize,
    pub has_active_filters: bool,
    pub records: Vec<RecordSummary>,
}

/// One row of `devcat categories`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoryRow {
    pub category: Category,
    pub label: String,
    pub description: String,
    pub count: usize,
}

/// Response from `devcat feedback`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FeedbackResponse {
    pub project_id: String,
    pub kind: FeedbackKind,
    pub subject: String,
    pub body: String,
    pub mailto: String,
}

/// Response from `devcat refresh`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RefreshResponse {
    pub scope: String,
    pub source: String,
    pub records: usize,
    pub loaded_at: DateTime<Utc>,
}
