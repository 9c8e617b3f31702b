//! The shared query cache.
//!
//! Process-wide store of fetched collections keyed by [`QueryKey`]:
//! - concurrent fetches of one key share a single in-flight load
//! - settled data is served without touching the network until the
//!   staleness window elapses or the key is invalidated
//! - a stale hit is served immediately while revalidation runs in the
//!   background
//! - every issued load carries a per-key generation; a response that
//!   settles after a newer load (or an invalidation) was issued for the
//!   same key is discarded wholesale, so a slow early response can
//!   never overwrite a fresher one
//! - loader failures are retained alongside last-known-good data
//!
//! The cache is an explicitly constructed, cheaply clonable handle; the
//! console builds one and hands clones to every entity manager.

use crate::config::CacheConfig;
use crate::key::QueryKey;
use acadia_gateway::GatewayError;
use acadia_model::EntityKind;
use dashmap::DashMap;
use std::any::Any;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;

type Stored = Arc<dyn Any + Send + Sync>;

/// Point-in-time view of one cached query: the `(data, is_loading,
/// error)` triple the presentation layer binds.
#[derive(Debug)]
pub struct Snapshot<T> {
    /// Last-known-good value, if any load ever settled.
    pub data: Option<Arc<T>>,
    /// Most recent loader failure, retained until a load settles.
    pub error: Option<Arc<GatewayError>>,
    /// Whether a load for this key is currently in flight.
    pub is_loading: bool,
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            error: self.error.clone(),
            is_loading: self.is_loading,
        }
    }
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            is_loading: false,
        }
    }
}

impl<T> Snapshot<T> {
    /// True when a settled value is available (possibly stale).
    #[inline]
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }
}

struct Flight {
    generation: u64,
    done_tx: watch::Sender<bool>,
    done: watch::Receiver<bool>,
}

struct EntryState {
    value: Option<Stored>,
    error: Option<Arc<GatewayError>>,
    fetched_at: Option<Instant>,
    stale: bool,
    /// Generation of the latest issued load for this key.
    generation: u64,
    flight: Option<Flight>,
    version: u64,
    notify: watch::Sender<u64>,
}

impl Default for EntryState {
    fn default() -> Self {
        let (notify, _) = watch::channel(0);
        Self {
            value: None,
            error: None,
            fetched_at: None,
            stale: false,
            generation: 0,
            flight: None,
            version: 0,
            notify,
        }
    }
}

impl EntryState {
    fn snapshot<T: Send + Sync + 'static>(&self) -> Snapshot<T> {
        Snapshot {
            data: self
                .value
                .clone()
                .and_then(|stored| stored.downcast::<T>().ok()),
            error: self.error.clone(),
            is_loading: self.flight.is_some(),
        }
    }

    fn tick(&mut self) {
        self.version += 1;
        let _ = self.notify.send(self.version);
    }

    fn finish_flight(&mut self) {
        if let Some(flight) = self.flight.take() {
            let _ = flight.done_tx.send(true);
        }
    }

    /// Mark stale and supersede any in-flight load.
    fn expire(&mut self) {
        self.stale = true;
        self.generation += 1;
        self.finish_flight();
        self.tick();
    }
}

enum Plan {
    Serve,
    Await(watch::Receiver<bool>),
    Lead { generation: u64, background: bool },
}

/// Shared stale-while-revalidate query store. Cloning yields another
/// handle onto the same entries.
#[derive(Clone)]
pub struct QueryCache {
    entries: Arc<DashMap<QueryKey, EntryState>>,
    config: CacheConfig,
}

impl QueryCache {
    /// Empty cache with the given tuning.
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            config,
        }
    }

    /// Resolve a query through the cache.
    ///
    /// The loader runs at most once per issued load: a fresh hit skips
    /// it entirely, and concurrent callers for the same key piggyback
    /// on the first caller's load.
    pub async fn fetch<T, F, Fut>(&self, key: &QueryKey, loader: F) -> Snapshot<T>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, GatewayError>> + Send + 'static,
    {
        let plan = self.plan(key);
        match plan {
            Plan::Serve => self.peek(key),
            Plan::Await(mut done) => {
                let _ = done.wait_for(|finished| *finished).await;
                self.peek(key)
            }
            Plan::Lead {
                generation,
                background,
            } => {
                let load = loader();
                if background {
                    // Serve the stale value now; revalidate behind it.
                    let cache = self.clone();
                    let owned_key = key.clone();
                    tokio::spawn(async move {
                        let result = load.await;
                        cache.settle::<T>(&owned_key, generation, result);
                    });
                    self.peek(key)
                } else {
                    let result = load.await;
                    self.settle::<T>(key, generation, result);
                    self.peek(key)
                }
            }
        }
    }

    /// Force a new load for `key`, superseding any in-flight one, then
    /// resolve through [`QueryCache::fetch`].
    pub async fn refetch<T, F, Fut>(&self, key: &QueryKey, loader: F) -> Snapshot<T>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, GatewayError>> + Send + 'static,
    {
        self.invalidate(key);
        self.fetch(key, loader).await
    }

    fn plan(&self, key: &QueryKey) -> Plan {
        let mut entry = self.entries.entry(key.clone()).or_insert_with(EntryState::default);
        let settled_recently = entry
            .fetched_at
            .is_some_and(|at| at.elapsed() < self.config.stale_after);
        if !entry.stale && settled_recently {
            return Plan::Serve;
        }
        if let Some(flight) = &entry.flight {
            if entry.value.is_some() {
                // Stale-while-revalidate: another caller already leads.
                return Plan::Serve;
            }
            return Plan::Await(flight.done.clone());
        }
        entry.generation += 1;
        let (done_tx, done) = watch::channel(false);
        entry.flight = Some(Flight {
            generation: entry.generation,
            done_tx,
            done,
        });
        Plan::Lead {
            generation: entry.generation,
            background: entry.value.is_some(),
        }
    }

    fn settle<T: Send + Sync + 'static>(
        &self,
        key: &QueryKey,
        generation: u64,
        result: Result<T, GatewayError>,
    ) {
        let Some(mut entry) = self.entries.get_mut(key) else {
            return;
        };
        if entry.generation != generation {
            // A newer load (or an invalidation) superseded this
            // response; drop it wholesale.
            tracing::debug!(%key, generation, "discarding superseded response");
            if entry
                .flight
                .as_ref()
                .is_some_and(|f| f.generation == generation)
            {
                entry.finish_flight();
            }
            return;
        }
        match result {
            Ok(value) => {
                entry.value = Some(Arc::new(value));
                entry.error = None;
            }
            Err(err) => {
                tracing::warn!(%key, error = %err, "query load failed");
                entry.error = Some(Arc::new(err));
            }
        }
        entry.stale = false;
        entry.fetched_at = Some(Instant::now());
        entry.finish_flight();
        entry.tick();
    }

    /// Current state of a key without triggering any load.
    #[must_use]
    pub fn peek<T: Send + Sync + 'static>(&self, key: &QueryKey) -> Snapshot<T> {
        self.entries
            .get(key)
            .map(|entry| entry.snapshot())
            .unwrap_or_default()
    }

    /// Mark one key stale. Data is retained; the next access
    /// revalidates; an in-flight load is superseded.
    pub fn invalidate(&self, key: &QueryKey) {
        if let Some(mut entry) = self.entries.get_mut(key) {
            entry.expire();
        }
    }

    /// Mark every key in an entity namespace stale: the unfiltered
    /// collection, all parent-scoped variants, and record keys.
    pub fn invalidate_kind(&self, kind: EntityKind) {
        for mut entry in self.entries.iter_mut() {
            if entry.key().kind() == kind {
                entry.value_mut().expire();
            }
        }
    }

    /// Optimistically overwrite the value for `key` without waiting for
    /// network confirmation. The entry is left stale so the next access
    /// reconciles against the backend.
    pub fn mutate<T: Send + Sync + 'static>(&self, key: &QueryKey, value: T) {
        let mut entry = self.entries.entry(key.clone()).or_insert_with(EntryState::default);
        entry.value = Some(Arc::new(value));
        entry.error = None;
        entry.stale = true;
        entry.tick();
    }

    /// Version channel for `key`; the value ticks whenever the entry
    /// settles, is invalidated, or is mutated.
    pub fn subscribe(&self, key: &QueryKey) -> watch::Receiver<u64> {
        self.entries
            .entry(key.clone())
            .or_insert_with(EntryState::default)
            .notify
            .subscribe()
    }

    /// Number of keys currently tracked.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl std::fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCache")
            .field("entries", &self.entries.len())
            .field("stale_after", &self.config.stale_after)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::oneshot;

    fn cache() -> QueryCache {
        QueryCache::new(CacheConfig::default())
    }

    fn courses_key() -> QueryKey {
        QueryKey::collection(EntityKind::Course)
    }

    async fn settle_background(cache: &QueryCache, key: &QueryKey) {
        let mut rx = cache.subscribe(key);
        tokio::time::timeout(Duration::from_secs(1), rx.changed())
            .await
            .expect("revalidation settles")
            .expect("cache alive");
    }

    #[tokio::test]
    async fn concurrent_fetches_share_one_load() {
        let cache = cache();
        let key = courses_key();
        let calls = Arc::new(AtomicUsize::new(0));
        let (release_tx, release_rx) = oneshot::channel::<()>();

        let leader = {
            let cache = cache.clone();
            let key = key.clone();
            let calls = Arc::clone(&calls);
            tokio::spawn(async move {
                cache
                    .fetch(&key, move || async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        release_rx.await.ok();
                        Ok(vec!["CS201".to_string()])
                    })
                    .await
            })
        };

        // Wait until the leader's flight is registered.
        while !cache.peek::<Vec<String>>(&key).is_loading {
            tokio::task::yield_now().await;
        }

        let follower = {
            let cache = cache.clone();
            let key = key.clone();
            let calls = Arc::clone(&calls);
            tokio::spawn(async move {
                cache
                    .fetch(&key, move || async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Ok(vec!["should not run".to_string()])
                    })
                    .await
            })
        };

        tokio::task::yield_now().await;
        release_tx.send(()).unwrap();

        let a = leader.await.unwrap();
        let b = follower.await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(a.data.as_deref(), Some(&vec!["CS201".to_string()]));
        assert_eq!(a.data, b.data);
    }

    #[tokio::test]
    async fn superseded_response_is_discarded() {
        let cache = cache();
        let key = courses_key();
        let (slow_tx, slow_rx) = oneshot::channel::<()>();

        // Load A: issued first, resolves last.
        let first = {
            let cache = cache.clone();
            let key = key.clone();
            tokio::spawn(async move {
                cache
                    .fetch(&key, move || async move {
                        slow_rx.await.ok();
                        Ok(vec!["old".to_string()])
                    })
                    .await
            })
        };
        while !cache.peek::<Vec<String>>(&key).is_loading {
            tokio::task::yield_now().await;
        }

        // Load B: issued second, resolves first.
        let fresh = cache
            .refetch(&key, || async { Ok(vec!["new".to_string()]) })
            .await;
        assert_eq!(fresh.data.as_deref(), Some(&vec!["new".to_string()]));

        // Let A resolve late; its response must not win.
        slow_tx.send(()).unwrap();
        first.await.unwrap();
        let settled = cache.peek::<Vec<String>>(&key);
        assert_eq!(settled.data.as_deref(), Some(&vec!["new".to_string()]));
    }

    #[tokio::test]
    async fn fresh_hit_skips_the_loader() {
        let cache = cache();
        let key = courses_key();
        cache
            .fetch(&key, || async { Ok(vec![1, 2, 3]) })
            .await;
        let hit = cache
            .fetch::<Vec<i32>, _, _>(&key, || async {
                panic!("loader must not run on a fresh hit")
            })
            .await;
        assert_eq!(hit.data.as_deref(), Some(&vec![1, 2, 3]));
        assert!(!hit.is_loading);
    }

    #[tokio::test]
    async fn stale_hit_serves_old_data_then_revalidates() {
        let config = CacheConfig::default().with_stale_after(Duration::ZERO);
        let cache = QueryCache::new(config);
        let key = courses_key();
        cache.fetch(&key, || async { Ok(vec!["v1".to_string()]) }).await;

        let stale = cache
            .fetch(&key, || async { Ok(vec!["v2".to_string()]) })
            .await;
        assert_eq!(stale.data.as_deref(), Some(&vec!["v1".to_string()]));
        assert!(stale.is_loading);

        settle_background(&cache, &key).await;
        let fresh = cache.peek::<Vec<String>>(&key);
        assert_eq!(fresh.data.as_deref(), Some(&vec!["v2".to_string()]));
        assert!(!fresh.is_loading);
    }

    #[tokio::test]
    async fn failed_revalidation_keeps_last_known_good() {
        let cache = cache();
        let key = courses_key();
        cache.fetch(&key, || async { Ok(vec!["good".to_string()]) }).await;
        cache.invalidate(&key);

        cache
            .fetch::<Vec<String>, _, _>(&key, || async {
                Err(GatewayError::Network {
                    message: "connection refused".into(),
                })
            })
            .await;
        settle_background(&cache, &key).await;

        let after = cache.peek::<Vec<String>>(&key);
        assert_eq!(after.data.as_deref(), Some(&vec!["good".to_string()]));
        assert!(after.error.as_deref().is_some_and(GatewayError::is_network));
    }

    #[tokio::test]
    async fn initial_load_failure_is_stored() {
        let cache = cache();
        let key = courses_key();
        let miss = cache
            .fetch::<Vec<String>, _, _>(&key, || async {
                Err(GatewayError::Network {
                    message: "down".into(),
                })
            })
            .await;
        assert!(miss.data.is_none());
        assert!(miss.error.is_some());
        assert!(!miss.is_loading);
    }

    #[tokio::test]
    async fn invalidate_kind_marks_all_scopes() {
        let cache = cache();
        let all = QueryKey::collection(EntityKind::Department);
        let scoped = QueryKey::parent_scoped(EntityKind::Department, EntityKind::School, "S1");
        let other = QueryKey::collection(EntityKind::School);
        cache.fetch(&all, || async { Ok(1u32) }).await;
        cache.fetch(&scoped, || async { Ok(2u32) }).await;
        cache.fetch(&other, || async { Ok(3u32) }).await;

        cache.invalidate_kind(EntityKind::Department);

        let calls = Arc::new(AtomicUsize::new(0));
        for key in [&all, &scoped] {
            let calls = Arc::clone(&calls);
            cache
                .fetch(key, move || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(9u32)
                })
                .await;
            settle_background(&cache, key).await;
        }
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        // The school namespace was untouched.
        let school_hit = cache
            .fetch::<u32, _, _>(&other, || async { panic!("still fresh") })
            .await;
        assert_eq!(school_hit.data.as_deref(), Some(&3));
    }

    #[tokio::test]
    async fn mutate_overwrites_and_marks_stale() {
        let cache = cache();
        let key = courses_key();
        cache.fetch(&key, || async { Ok(vec!["server".to_string()]) }).await;

        cache.mutate(&key, vec!["optimistic".to_string()]);
        let peeked = cache.peek::<Vec<String>>(&key);
        assert_eq!(peeked.data.as_deref(), Some(&vec!["optimistic".to_string()]));

        // Next access reconciles against the backend.
        cache
            .fetch(&key, || async { Ok(vec!["confirmed".to_string()]) })
            .await;
        settle_background(&cache, &key).await;
        let settled = cache.peek::<Vec<String>>(&key);
        assert_eq!(settled.data.as_deref(), Some(&vec!["confirmed".to_string()]));
    }

    #[tokio::test]
    async fn subscribers_tick_on_settle() {
        let cache = cache();
        let key = courses_key();
        let mut rx = cache.subscribe(&key);
        let initial = *rx.borrow();
        cache.fetch(&key, || async { Ok(0u8) }).await;
        rx.changed().await.unwrap();
        assert!(*rx.borrow() > initial);
    }
}
