//! Serde roundtrip and JsonSchema validation tests for record and response types.

use chrono::Utc;
use devcat_core::entities::{MediaItem, ProjectRecord};
use devcat_core::enums::{Category, FeedbackKind, LifecycleStatus};
use devcat_core::responses::{
    CategoryRow, FeedbackResponse, ListResponse, RecordSummary, RefreshResponse,
};
use pretty_assertions::assert_eq;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn full_record() -> ProjectRecord {
    let mut record = ProjectRecord::new(
        "budget-tracker",
        "Budget Tracker",
        Category::Web,
        LifecycleStatus::Live,
        Utc::now(),
    )
    .with_summary("Track monthly spending.")
    .with_tags(["React", "Node"]);
    record.full_summary = "A small budgeting tool.".into();
    record.feature_list = vec!["Charts".into(), "CSV export".into()];
    record.planned_feature_list = vec!["Bank sync".into()];
    record.architecture_notes = Some("SPA with a REST backend.".into());
    record.source_link = Some("https://github.com/example/budget".into());
    record.media = vec![MediaItem {
        url: "https://img.example.com/1.png".into(),
        alt: MediaItem::placeholder_alt(0),
    }];
    record
}

roundtrip_and_validate!(project_record_roundtrip, ProjectRecord, full_record());

roundtrip_and_validate!(
    minimal_record_roundtrip,
    ProjectRecord,
    ProjectRecord::new(
        "7",
        "Weather App",
        Category::Ios,
        LifecycleStatus::InProgress,
        Utc::now()
    )
);

roundtrip_and_validate!(
    list_response_roundtrip,
    ListResponse,
    ListResponse {
        total: 2,
        matched: 1,
        shown: 1,
        has_active_filters: true,
        records: vec![RecordSummary::from(&full_record())],
    }
);

roundtrip_and_validate!(
    category_row_roundtrip,
    CategoryRow,
    CategoryRow {
        category: Category::Extension,
        label: Category::Extension.label().into(),
        description: Category::Extension.description().into(),
        count: 3,
    }
);

roundtrip_and_validate!(
    feedback_response_roundtrip,
    FeedbackResponse,
    FeedbackResponse {
        project_id: "budget-tracker".into(),
        kind: FeedbackKind::Bug,
        subject: "[Bug Report] Budget Tracker: Crash".into(),
        body: "App: Budget Tracker\n".into(),
        mailto: "mailto:dev@example.com?subject=x&body=y".into(),
    }
);

roundtrip_and_validate!(
    refresh_response_roundtrip,
    RefreshResponse,
    RefreshResponse {
        scope: "catalog-records".into(),
        source: "public/data/apps.xlsx".into(),
        records: 12,
        loaded_at: Utc::now(),
    }
);

#[test]
fn record_serializes_status_in_kebab_case() {
    let record = full_record();
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["lifecycle_status"], "live");
    assert_eq!(value["category"], "web");
    assert_eq!(value["media"][0]["alt"], "Screenshot 1");
}

#[test]
fn summary_copies_listing_fields() {
    let summary = RecordSummary::from(&full_record());
    assert_eq!(summary.id, "budget-tracker");
    assert_eq!(summary.status, LifecycleStatus::Live);
    assert_eq!(summary.tags, vec!["React".to_string(), "Node".to_string()]);
}
