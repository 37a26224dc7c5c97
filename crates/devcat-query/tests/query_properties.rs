//! Behavioral properties of the catalog query engine.

use chrono::{DateTime, Utc};
use devcat_core::entities::ProjectRecord;
use devcat_core::enums::{Category, LifecycleStatus};
use devcat_query::{
    CategoryFilter, QueryState, Selection, StatusFilter, compute_category_counts, filter_records,
};
use pretty_assertions::assert_eq;

fn loaded_at() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-01-15T10:00:00Z")
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

fn record(
    id: &str,
    name: &str,
    category: Category,
    status: LifecycleStatus,
    tags: &[&str],
) -> ProjectRecord {
    ProjectRecord::new(id, name, category, status, loaded_at()).with_tags(tags.iter().copied())
}

fn catalog() -> Vec<ProjectRecord> {
    vec![
        record("budget", "Budget Tracker", Category::Web, LifecycleStatus::Live, &["React", "Node"])
            .with_summary("Track monthly spending"),
        record("weather", "Weather App", Category::Ios, LifecycleStatus::InProgress, &["Swift"])
            .with_summary("Forecasts at a glance"),
        record("notes", "Pocket Notes", Category::Android, LifecycleStatus::Live, &["Kotlin"]),
        record("sorter", "Tab Sorter", Category::Extension, LifecycleStatus::Archived, &["TypeScript"]),
        record("landing", "Studio Site", Category::Website, LifecycleStatus::Live, &["Astro", "React"]),
        record("ops", "Ops Console", Category::Internal, LifecycleStatus::InProgress, &[]),
    ]
}

fn ids(records: &[&ProjectRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn unfiltered_query_returns_input_unchanged() {
    let records = catalog();
    let filtered = filter_records(&records, "", Selection::All, Selection::All);
    let expected: Vec<&ProjectRecord> = records.iter().collect();
    assert_eq!(filtered, expected);
}

#[test]
fn counts_sum_to_record_total() {
    let records = catalog();
    let counts = compute_category_counts(&records);
    assert_eq!(counts.total(), records.len());
    for category in Category::ALL {
        assert_eq!(counts.get(category), 1, "{category}");
    }
}

#[test]
fn filtering_is_idempotent() {
    let records = catalog();
    let once: Vec<ProjectRecord> = filter_records(
        &records,
        "react",
        Selection::All,
        Selection::Only(LifecycleStatus::Live),
    )
    .into_iter()
    .cloned()
    .collect();
    let twice = filter_records(&once, "react", Selection::All, Selection::Only(LifecycleStatus::Live));
    assert_eq!(twice, once.iter().collect::<Vec<_>>());
}

#[test]
fn search_ignores_case() {
    let records = catalog();
    let upper = filter_records(&records, "REACT", Selection::All, Selection::All);
    let lower = filter_records(&records, "react", Selection::All, Selection::All);
    assert_eq!(ids(&upper), ids(&lower));
    assert_eq!(ids(&lower), vec!["budget", "landing"]);
}

#[test]
fn tag_match_retains_only_tagged_record() {
    let records = vec![
        record("budget", "Budget Tracker", Category::Web, LifecycleStatus::Live, &["React", "Node"]),
        record("weather", "Weather App", Category::Web, LifecycleStatus::Live, &["Swift"]),
    ];
    let filtered = filter_records(&records, "react", Selection::All, Selection::All);
    assert_eq!(ids(&filtered), vec!["budget"]);
}

#[test]
fn summary_match_is_enough() {
    let records = catalog();
    let filtered = filter_records(&records, "glance", Selection::All, Selection::All);
    assert_eq!(ids(&filtered), vec!["weather"]);
}

#[test]
fn toggling_active_category_restores_full_set() {
    let records = catalog();
    let mut state = QueryState::default();
    state.set_status(LifecycleStatus::Live);

    state.toggle_category(Category::Android);
    assert_eq!(ids(&state.apply(&records).records), vec!["notes"]);

    state.toggle_category(Category::Android);
    assert_eq!(state.category, CategoryFilter::All);
    assert_eq!(
        ids(&state.apply(&records).records),
        vec!["budget", "notes", "landing"]
    );
}

#[test]
fn empty_source_yields_zero_counts_and_no_records() {
    let counts = compute_category_counts(&[]);
    assert!(Category::ALL.iter().all(|&c| counts.get(c) == 0));

    for category in [CategoryFilter::All, CategoryFilter::Only(Category::Ios)] {
        for status in [StatusFilter::All, StatusFilter::Only(LifecycleStatus::Live)] {
            assert!(filter_records(&[], "anything", category, status).is_empty());
            assert!(filter_records(&[], "", category, status).is_empty());
        }
    }
}

#[test]
fn combined_filters_keep_input_order() {
    let records = vec![
        record("a1", "Live One", Category::Android, LifecycleStatus::Live, &[]),
        record("a2", "Old One", Category::Android, LifecycleStatus::Archived, &[]),
        record("w1", "Web Live", Category::Web, LifecycleStatus::Live, &[]),
        record("a3", "Live Two", Category::Android, LifecycleStatus::Live, &[]),
        record("a4", "Old Two", Category::Android, LifecycleStatus::Archived, &[]),
        record("a5", "Live Three", Category::Android, LifecycleStatus::Live, &[]),
    ];
    let filtered = filter_records(
        &records,
        "",
        Selection::Only(Category::Android),
        Selection::Only(LifecycleStatus::Live),
    );
    assert_eq!(ids(&filtered), vec!["a1", "a3", "a5"]);
}

#[test]
fn view_counts_cover_full_set_not_filtered_subset() {
    let records = catalog();
    let state = QueryState::new("swift", Selection::All, Selection::All);
    let view = state.apply(&records);

    assert_eq!(view.shown, 1);
    assert_eq!(view.total, records.len());
    assert_eq!(view.counts.get(Category::Android), 1);
    assert_eq!(view.counts.total(), records.len());
}

#[test]
fn view_serializes_records_and_counts() {
    let records = catalog();
    let view = QueryState::new("", Selection::Only(Category::Ios), Selection::All).apply(&records);
    let json = serde_json::to_value(&view).expect("serialize view");

    assert_eq!(json["shown"], 1);
    assert_eq!(json["records"][0]["id"], "weather");
    assert_eq!(json["records"][0]["lifecycle_status"], "in-progress");
    assert_eq!(json["counts"]["internal"], 1);
}
