use anyhow::Context;
use devcat_config::CatalogConfig;
use devcat_core::entities::ProjectRecord;
use devcat_core::errors::CoreError;
use devcat_loader::{RecordCache, RecordLoader, Records, find_record};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: CatalogConfig,
    pub loader: RecordLoader,
    pub cache: RecordCache,
}

impl AppContext {
    #[must_use]
    pub fn init(config: CatalogConfig) -> Self {
        let loader = RecordLoader::from_config(&config.source);
        let mut cache = RecordCache::new(config.cache.stale_after());
        if let Some(dir) = config.cache.store_dir() {
            cache = cache.persisted_in(dir, loader.source());
        }
        tracing::debug!(
            source = %loader.source(),
            scope = %config.cache.scope,
            "catalog context ready"
        );
        Self {
            config,
            loader,
            cache,
        }
    }

    /// The cached catalog, loading it on first use. Load failures have
    /// already been logged and read as an empty catalog.
    pub async fn records(&self) -> Records {
        self.cache
            .get_or_load_from(&self.config.cache.scope, &self.loader)
            .await
    }

    /// Load the catalog again and swap it into the cache, surfacing load
    /// failures. A failed reload leaves the cached entry untouched.
    pub async fn reload(&self) -> anyhow::Result<Records> {
        let records = self
            .loader
            .try_load()
            .await
            .with_context(|| format!("failed to reload catalog from {}", self.loader.source()))?;
        Ok(self.cache.replace(&self.config.cache.scope, records).await)
    }
}

/// Look up `id`, turning absence into [`CoreError::NotFound`].
pub fn require_record<'a>(
    records: &'a [ProjectRecord],
    id: &str,
) -> Result<&'a ProjectRecord, CoreError> {
    find_record(records, id).ok_or_else(|| CoreError::NotFound {
        entity_type: "project".to_string(),
        id: id.to_string(),
    })
}
