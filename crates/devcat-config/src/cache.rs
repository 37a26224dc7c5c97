//! Record cache configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// How long a loaded record set stays fresh (five minutes).
const fn default_stale_secs() -> u64 {
    300
}

fn default_scope() -> String {
    "catalog-records".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Freshness window in seconds. `0` reloads on every access.
    #[serde(default = "default_stale_secs")]
    pub stale_secs: u64,

    /// Cache key the record set is stored under.
    #[serde(default = "default_scope")]
    pub scope: String,

    /// Keep loaded records on disk so later invocations reuse them.
    #[serde(default = "default_persist")]
    pub persist: bool,

    /// Directory for persisted entries. Empty means the platform cache dir.
    #[serde(default)]
    pub dir: String,
}

const fn default_persist() -> bool {
    true
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            stale_secs: default_stale_secs(),
            scope: default_scope(),
            persist: default_persist(),
            dir: String::new(),
        }
    }
}

impl CacheConfig {
    #[must_use]
    pub const fn stale_after(&self) -> Duration {
        Duration::from_secs(self.stale_secs)
    }

    /// Directory persisted entries live in, or `None` when persistence is off.
    #[must_use]
    pub fn store_dir(&self) -> Option<PathBuf> {
        if !self.persist {
            return None;
        }
        if self.dir.trim().is_empty() {
            return dirs::cache_dir().map(|p| p.join("devcatalog"));
        }
        Some(PathBuf::from(&self.dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = CacheConfig::default();
        assert_eq!(config.stale_after(), Duration::from_secs(300));
        assert_eq!(config.scope, "catalog-records");
        assert!(config.persist);
        assert!(config.dir.is_empty());
    }

    #[test]
    fn explicit_dir_wins_over_platform_default() {
        let config = CacheConfig {
            dir: "/tmp/devcatalog-cache".to_string(),
            ..Default::default()
        };
        assert_eq!(config.store_dir(), Some(PathBuf::from("/tmp/devcatalog-cache")));
    }

    #[test]
    fn disabled_persistence_has_no_store_dir() {
        let config = CacheConfig {
            persist: false,
            dir: "/tmp/devcatalog-cache".to_string(),
            ..Default::default()
        };
        assert_eq!(config.store_dir(), None);
    }
}
