//! TTL-bounded by-id record cache backing the detail views.

use crate::config::CacheConfig;
use crate::key::QueryKey;
use acadia_gateway::GatewayError;
use acadia_model::{EntityKind, Resource};
use moka::future::Cache;
use std::any::Any;
use std::future::Future;
use std::sync::Arc;

type Stored = Arc<dyn Any + Send + Sync>;

/// Cache of individual records keyed by `{collection}/id/{id}`.
///
/// Entries expire on a time-to-live and are evicted eagerly when a
/// mutation touches their id; between those, repeated detail-view
/// opens cost nothing.
#[derive(Debug, Clone)]
pub struct RecordCache {
    inner: Cache<QueryKey, Stored>,
}

impl RecordCache {
    /// Empty record cache with the given tuning.
    #[must_use]
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(config.record_capacity)
                .time_to_live(config.record_ttl)
                .build(),
        }
    }

    /// Get one record, loading it on a miss.
    pub async fn get_or_load<E, F, Fut>(&self, id: &str, load: F) -> Result<E, GatewayError>
    where
        E: Resource,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<E, GatewayError>>,
    {
        let key = QueryKey::record(E::KIND, id);
        if let Some(stored) = self.inner.get(&key).await {
            if let Ok(record) = stored.downcast::<E>() {
                return Ok((*record).clone());
            }
        }
        let record = load().await?;
        self.inner.insert(key, Arc::new(record.clone())).await;
        Ok(record)
    }

    /// Drop one record after a mutation touched it.
    pub async fn evict(&self, kind: EntityKind, id: &str) {
        self.inner.invalidate(&QueryKey::record(kind, id)).await;
    }

    /// Approximate number of cached records.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}
