//! Per-category record counts.

use devcat_core::entities::ProjectRecord;
use devcat_core::enums::Category;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A count for every category. There is no "missing key" case: each field
/// is present and zero when no record has that category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryCounts {
    pub android: usize,
    pub ios: usize,
    pub web: usize,
    pub extension: usize,
    pub website: usize,
    pub internal: usize,
}

impl CategoryCounts {
    #[must_use]
    pub const fn get(&self, category: Category) -> usize {
        match category {
            Category::Android => self.android,
            Category::Ios => self.ios,
            Category::Web => self.web,
            Category::Extension => self.extension,
            Category::Website => self.website,
            Category::Internal => self.internal,
        }
    }

    const fn slot(&mut self, category: Category) -> &mut usize {
        match category {
            Category::Android => &mut self.android,
            Category::Ios => &mut self.ios,
            Category::Web => &mut self.web,
            Category::Extension => &mut self.extension,
            Category::Website => &mut self.website,
            Category::Internal => &mut self.internal,
        }
    }

    /// `(category, count)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.into_iter().map(|category| (category, self.get(category)))
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.iter().map(|(_, count)| count).sum()
    }
}

/// Count records per category over the full record set.
#[must_use]
pub fn compute_category_counts(records: &[ProjectRecord]) -> CategoryCounts {
    records
        .iter()
        .fold(CategoryCounts::default(), |mut counts, record| {
            *counts.slot(record.category) += 1;
            counts
        })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use devcat_core::enums::LifecycleStatus;

    use super::*;

    fn record(id: &str, category: Category) -> ProjectRecord {
        ProjectRecord::new(id, id, category, LifecycleStatus::Live, Utc::now())
    }

    #[test]
    fn empty_records_count_zero_everywhere() {
        let counts = compute_category_counts(&[]);
        assert_eq!(counts, CategoryCounts::default());
        assert!(counts.iter().all(|(_, count)| count == 0));
        assert_eq!(counts.iter().count(), Category::ALL.len());
    }

    #[test]
    fn counts_sum_to_record_total() {
        let records = vec![
            record("a", Category::Android),
            record("b", Category::Android),
            record("c", Category::Web),
            record("d", Category::Internal),
        ];
        let counts = compute_category_counts(&records);
        assert_eq!(counts.get(Category::Android), 2);
        assert_eq!(counts.get(Category::Web), 1);
        assert_eq!(counts.get(Category::Ios), 0);
        assert_eq!(counts.total(), records.len());
    }

    #[test]
    fn serializes_every_category_key() {
        let value = serde_json::to_value(CategoryCounts::default()).unwrap();
        let object = value.as_object().unwrap();
        for category in Category::ALL {
            assert_eq!(object[category.as_str()], 0);
        }
    }
}
