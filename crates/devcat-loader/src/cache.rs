//! Scoped cache of loaded record sets.
//!
//! Each scope holds one immutable record set shared as `Arc<[ProjectRecord]>`.
//! An entry is fresh for the configured window, measured from its
//! `loaded_at`; after that the next `get_or_load` reloads it wholesale.
//! Loads for the cache run under one async mutex, so concurrent callers
//! never trigger the same load twice.
//!
//! A cache built with [`RecordCache::persisted_in`] also writes every entry
//! to `<dir>/<scope>.json`, so a later process within the freshness window
//! reuses it instead of fetching the spreadsheet again. Entries written for
//! a different source are ignored.

use std::collections::HashMap;
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use devcat_core::entities::ProjectRecord;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::{RecordLoader, RecordSource};

/// Shared, immutable record set.
pub type Records = Arc<[ProjectRecord]>;

#[derive(Debug)]
pub enum CacheLookup {
    Miss,
    Fresh(Records),
    Stale(Records),
}

#[derive(Debug, Clone)]
struct CacheEntry {
    records: Records,
    loaded_at: DateTime<Utc>,
}

/// On-disk layout of one persisted scope.
#[derive(Serialize)]
struct StoredEntryRef<'a> {
    source: &'a str,
    loaded_at: DateTime<Utc>,
    records: &'a [ProjectRecord],
}

#[derive(Deserialize)]
struct StoredEntry {
    source: String,
    loaded_at: DateTime<Utc>,
    records: Vec<ProjectRecord>,
}

#[derive(Debug, Clone)]
struct DiskStore {
    dir: PathBuf,
    source: String,
}

impl DiskStore {
    fn path_for(&self, scope: &str) -> PathBuf {
        let file: String = scope
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{file}.json"))
    }

    async fn read(&self, scope: &str) -> Option<CacheEntry> {
        let path = self.path_for(scope);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => return None,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to read cached records");
                return None;
            }
        };
        let stored: StoredEntry = match serde_json::from_slice(&bytes) {
            Ok(stored) => stored,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "ignoring unreadable cached records");
                return None;
            }
        };
        if stored.source != self.source {
            tracing::debug!(scope, cached = %stored.source, "cached records belong to another source");
            return None;
        }
        Some(CacheEntry {
            records: stored.records.into(),
            loaded_at: stored.loaded_at,
        })
    }

    async fn write(&self, scope: &str, entry: &CacheEntry) {
        let path = self.path_for(scope);
        let stored = StoredEntryRef {
            source: &self.source,
            loaded_at: entry.loaded_at,
            records: &entry.records,
        };
        let result = match serde_json::to_vec(&stored) {
            Ok(bytes) => write_file(&path, &bytes).await,
            Err(error) => Err(std::io::Error::other(error)),
        };
        if let Err(error) = result {
            tracing::warn!(path = %path.display(), %error, "failed to persist cached records");
        }
    }

    /// Delete the file for `scope`. Returns whether one existed.
    async fn remove(&self, scope: &str) -> bool {
        remove_file(&self.path_for(scope)).await
    }

    async fn clear(&self) {
        let Ok(mut dir) = tokio::fs::read_dir(&self.dir).await else {
            return;
        };
        while let Ok(Some(item)) = dir.next_entry().await {
            let path = item.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                remove_file(&path).await;
            }
        }
    }
}

async fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, bytes).await
}

async fn remove_file(path: &Path) -> bool {
    match tokio::fs::remove_file(path).await {
        Ok(()) => true,
        Err(error) if error.kind() == ErrorKind::NotFound => false,
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "failed to remove cached records");
            false
        }
    }
}

#[derive(Debug)]
pub struct RecordCache {
    stale_after: Duration,
    store: Option<DiskStore>,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl RecordCache {
    /// Process-local cache with no disk persistence.
    #[must_use]
    pub fn new(stale_after: Duration) -> Self {
        Self {
            stale_after,
            store: None,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Persist entries under `dir`, tagged with `source`.
    #[must_use]
    pub fn persisted_in(mut self, dir: impl Into<PathBuf>, source: &RecordSource) -> Self {
        self.store = Some(DiskStore {
            dir: dir.into(),
            source: source.to_string(),
        });
        self
    }

    /// Return the fresh record set for `scope`, running `load` if there is
    /// none.
    pub async fn get_or_load<F, Fut>(&self, scope: &str, load: F) -> Records
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Vec<ProjectRecord>>,
    {
        let mut entries = self.entries.lock().await;
        self.hydrate(&mut entries, scope).await;
        if let Some(entry) = entries.get(scope)
            && self.is_fresh(entry)
        {
            tracing::debug!(scope, records = entry.records.len(), "record cache hit");
            return Arc::clone(&entry.records);
        }

        tracing::debug!(scope, "record cache miss; loading");
        let records = load().await;
        self.insert(&mut entries, scope, records).await
    }

    /// [`Self::get_or_load`] backed by a [`RecordLoader`].
    pub async fn get_or_load_from(&self, scope: &str, loader: &RecordLoader) -> Records {
        self.get_or_load(scope, || loader.load()).await
    }

    /// Store `records` as the fresh entry for `scope`, replacing any
    /// existing one.
    pub async fn replace(&self, scope: &str, records: Vec<ProjectRecord>) -> Records {
        let mut entries = self.entries.lock().await;
        self.insert(&mut entries, scope, records).await
    }

    /// Inspect `scope` without loading.
    pub async fn peek(&self, scope: &str) -> CacheLookup {
        let mut entries = self.entries.lock().await;
        self.hydrate(&mut entries, scope).await;
        match entries.get(scope) {
            None => CacheLookup::Miss,
            Some(entry) if self.is_fresh(entry) => CacheLookup::Fresh(Arc::clone(&entry.records)),
            Some(entry) => CacheLookup::Stale(Arc::clone(&entry.records)),
        }
    }

    /// When the current entry for `scope` was loaded.
    pub async fn loaded_at(&self, scope: &str) -> Option<DateTime<Utc>> {
        let mut entries = self.entries.lock().await;
        self.hydrate(&mut entries, scope).await;
        entries.get(scope).map(|entry| entry.loaded_at)
    }

    /// Drop the entry for `scope`. Returns whether one existed.
    pub async fn invalidate(&self, scope: &str) -> bool {
        let mut removed = self.entries.lock().await.remove(scope).is_some();
        if let Some(store) = &self.store {
            removed |= store.remove(scope).await;
        }
        tracing::debug!(scope, removed, "record cache invalidated");
        removed
    }

    pub async fn invalidate_all(&self) {
        self.entries.lock().await.clear();
        if let Some(store) = &self.store {
            store.clear().await;
        }
    }

    /// Pull a persisted entry into memory if memory has none.
    async fn hydrate(&self, entries: &mut HashMap<String, CacheEntry>, scope: &str) {
        if entries.contains_key(scope) {
            return;
        }
        let Some(store) = &self.store else {
            return;
        };
        if let Some(entry) = store.read(scope).await {
            tracing::debug!(scope, loaded_at = %entry.loaded_at, "restored cached records from disk");
            entries.insert(scope.to_string(), entry);
        }
    }

    async fn insert(
        &self,
        entries: &mut HashMap<String, CacheEntry>,
        scope: &str,
        records: Vec<ProjectRecord>,
    ) -> Records {
        let entry = CacheEntry {
            records: records.into(),
            loaded_at: Utc::now(),
        };
        if let Some(store) = &self.store {
            store.write(scope, &entry).await;
        }
        let records = Arc::clone(&entry.records);
        entries.insert(scope.to_string(), entry);
        records
    }

    fn is_fresh(&self, entry: &CacheEntry) -> bool {
        Utc::now()
            .signed_duration_since(entry.loaded_at)
            .to_std()
            .is_ok_and(|age| age < self.stale_after)
    }
}

/// Detail lookup by exact id.
#[must_use]
pub fn find_record<'a>(records: &'a [ProjectRecord], id: &str) -> Option<&'a ProjectRecord> {
    records.iter().find(|record| record.id == id)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use devcat_core::enums::{Category, LifecycleStatus};

    use super::*;

    fn sample(id: &str) -> ProjectRecord {
        ProjectRecord::new(id, id, Category::Web, LifecycleStatus::Live, Utc::now())
    }

    async fn counting_load(counter: &AtomicUsize) -> Vec<ProjectRecord> {
        counter.fetch_add(1, Ordering::SeqCst);
        vec![sample("a"), sample("b")]
    }

    #[tokio::test]
    async fn fresh_entry_is_reused() {
        let cache = RecordCache::new(Duration::from_secs(300));
        let loads = AtomicUsize::new(0);

        let first = cache.get_or_load("apps", || counting_load(&loads)).await;
        let second = cache.get_or_load("apps", || counting_load(&loads)).await;

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(matches!(cache.peek("apps").await, CacheLookup::Fresh(_)));
    }

    #[tokio::test]
    async fn zero_window_reloads_every_time() {
        let cache = RecordCache::new(Duration::ZERO);
        let loads = AtomicUsize::new(0);

        cache.get_or_load("apps", || counting_load(&loads)).await;
        assert!(matches!(cache.peek("apps").await, CacheLookup::Stale(_)));
        cache.get_or_load("apps", || counting_load(&loads)).await;

        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn invalidate_forces_reload() {
        let cache = RecordCache::new(Duration::from_secs(300));
        let loads = AtomicUsize::new(0);

        cache.get_or_load("apps", || counting_load(&loads)).await;
        assert!(cache.invalidate("apps").await);
        assert!(!cache.invalidate("apps").await);
        assert!(matches!(cache.peek("apps").await, CacheLookup::Miss));

        cache.get_or_load("apps", || counting_load(&loads)).await;
        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn scopes_are_independent() {
        let cache = RecordCache::new(Duration::from_secs(300));
        let loads = AtomicUsize::new(0);

        cache.get_or_load("a", || counting_load(&loads)).await;
        cache.get_or_load("b", || counting_load(&loads)).await;
        assert_eq!(loads.load(Ordering::SeqCst), 2);

        cache.invalidate_all().await;
        assert!(matches!(cache.peek("a").await, CacheLookup::Miss));
        assert!(cache.loaded_at("b").await.is_none());
    }

    #[tokio::test]
    async fn concurrent_callers_share_one_load() {
        let cache = Arc::new(RecordCache::new(Duration::from_secs(300)));
        let loads = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = Arc::clone(&cache);
            let loads = Arc::clone(&loads);
            handles.push(tokio::spawn(async move {
                cache
                    .get_or_load("apps", || async {
                        loads.fetch_add(1, Ordering::SeqCst);
                        tokio::task::yield_now().await;
                        vec![sample("a")]
                    })
                    .await
                    .len()
            }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap(), 1);
        }
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn replace_swaps_entry_without_loading() {
        let cache = RecordCache::new(Duration::from_secs(300));
        let loads = AtomicUsize::new(0);

        cache.get_or_load("apps", || counting_load(&loads)).await;
        let replaced = cache.replace("apps", vec![sample("c")]).await;
        let served = cache.get_or_load("apps", || counting_load(&loads)).await;

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&replaced, &served));
        assert_eq!(served[0].id, "c");
    }

    fn file_source() -> RecordSource {
        RecordSource::File(PathBuf::from("data/apps.xlsx"))
    }

    #[tokio::test]
    async fn persisted_entry_survives_a_new_cache() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loads = AtomicUsize::new(0);

        let first = RecordCache::new(Duration::from_secs(300)).persisted_in(dir.path(), &file_source());
        first.get_or_load("catalog-records", || counting_load(&loads)).await;
        assert!(dir.path().join("catalog-records.json").exists());

        let second = RecordCache::new(Duration::from_secs(300)).persisted_in(dir.path(), &file_source());
        let records = second.get_or_load("catalog-records", || counting_load(&loads)).await;

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(
            second.loaded_at("catalog-records").await,
            first.loaded_at("catalog-records").await
        );
    }

    #[tokio::test]
    async fn expired_persisted_entry_is_reloaded() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loads = AtomicUsize::new(0);

        RecordCache::new(Duration::ZERO)
            .persisted_in(dir.path(), &file_source())
            .get_or_load("apps", || counting_load(&loads))
            .await;
        let second = RecordCache::new(Duration::ZERO).persisted_in(dir.path(), &file_source());
        assert!(matches!(second.peek("apps").await, CacheLookup::Stale(_)));
        second.get_or_load("apps", || counting_load(&loads)).await;

        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn persisted_entry_from_another_source_is_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loads = AtomicUsize::new(0);

        RecordCache::new(Duration::from_secs(300))
            .persisted_in(dir.path(), &file_source())
            .get_or_load("apps", || counting_load(&loads))
            .await;
        let other = RecordSource::File(PathBuf::from("elsewhere.xlsx"));
        let second = RecordCache::new(Duration::from_secs(300)).persisted_in(dir.path(), &other);
        assert!(matches!(second.peek("apps").await, CacheLookup::Miss));
        second.get_or_load("apps", || counting_load(&loads)).await;

        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn corrupt_persisted_entry_counts_as_miss() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("apps.json"), b"{not json").expect("write");

        let cache = RecordCache::new(Duration::from_secs(300)).persisted_in(dir.path(), &file_source());
        assert!(matches!(cache.peek("apps").await, CacheLookup::Miss));
    }

    #[tokio::test]
    async fn invalidate_removes_persisted_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loads = AtomicUsize::new(0);
        let cache = RecordCache::new(Duration::from_secs(300)).persisted_in(dir.path(), &file_source());

        cache.get_or_load("a", || counting_load(&loads)).await;
        cache.get_or_load("b", || counting_load(&loads)).await;
        assert!(cache.invalidate("a").await);
        assert!(!dir.path().join("a.json").exists());
        assert!(dir.path().join("b.json").exists());

        cache.invalidate_all().await;
        assert!(!dir.path().join("b.json").exists());
    }

    #[test]
    fn scope_names_become_safe_file_names() {
        let store = DiskStore {
            dir: PathBuf::from("/cache"),
            source: String::new(),
        };
        assert_eq!(store.path_for("team/apps v2"), PathBuf::from("/cache/team_apps_v2.json"));
    }

    #[test]
    fn find_record_matches_exact_id() {
        let records = vec![sample("a"), sample("b")];
        assert_eq!(find_record(&records, "b").map(|r| r.id.as_str()), Some("b"));
        assert!(find_record(&records, "B").is_none());
    }
}
