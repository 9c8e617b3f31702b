//! Scriptable in-memory gateway for manager tests.

use acadia_gateway::{Gateway, GatewayError};
use acadia_model::{Record, Resource};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Per-method call counters.
#[derive(Debug, Default)]
pub struct CallCounts {
    list_all: AtomicUsize,
    list_by_parent: AtomicUsize,
    get_by_id: AtomicUsize,
    create: AtomicUsize,
    update: AtomicUsize,
    delete: AtomicUsize,
}

impl CallCounts {
    /// Calls to `list_all`.
    #[must_use]
    pub fn list_all(&self) -> usize {
        self.list_all.load(Ordering::SeqCst)
    }

    /// Calls to `list_by_parent`.
    #[must_use]
    pub fn list_by_parent(&self) -> usize {
        self.list_by_parent.load(Ordering::SeqCst)
    }

    /// Calls to `get_by_id`.
    #[must_use]
    pub fn get_by_id(&self) -> usize {
        self.get_by_id.load(Ordering::SeqCst)
    }

    /// Calls to `create`.
    #[must_use]
    pub fn create(&self) -> usize {
        self.create.load(Ordering::SeqCst)
    }

    /// Calls to `update`.
    #[must_use]
    pub fn update(&self) -> usize {
        self.update.load(Ordering::SeqCst)
    }

    /// Calls to `delete`.
    #[must_use]
    pub fn delete(&self) -> usize {
        self.delete.load(Ordering::SeqCst)
    }
}

/// In-memory [`Gateway`] with a seedable store, scriptable mutation
/// results, and single-shot failure injection.
///
/// `create` results must be scripted (the fake cannot materialize a
/// record from a payload); `update` falls back to returning the stored
/// record when no result is scripted.
pub struct FakeGateway<E: Resource> {
    store: Mutex<Vec<E>>,
    parent_of: fn(&E) -> Option<String>,
    scripted_creates: Mutex<VecDeque<E>>,
    scripted_updates: Mutex<VecDeque<E>>,
    fail_next: Mutex<Option<GatewayError>>,
    last_submitted_body: Mutex<Option<serde_json::Value>>,
    /// Observed call counts.
    pub calls: CallCounts,
}

impl<E: Resource> FakeGateway<E> {
    /// Empty gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    /// Gateway pre-populated with records.
    #[must_use]
    pub fn seeded(records: Vec<E>) -> Self {
        Self {
            store: Mutex::new(records),
            parent_of: |_| None,
            scripted_creates: Mutex::new(VecDeque::new()),
            scripted_updates: Mutex::new(VecDeque::new()),
            fail_next: Mutex::new(None),
            last_submitted_body: Mutex::new(None),
            calls: CallCounts::default(),
        }
    }

    /// With a foreign-key projection backing `list_by_parent`.
    #[must_use]
    pub fn with_parent(mut self, parent_of: fn(&E) -> Option<String>) -> Self {
        self.parent_of = parent_of;
        self
    }

    /// Script the record the next `create` call returns.
    pub fn queue_create_result(&self, record: E) {
        self.scripted_creates.lock().push_back(record);
    }

    /// Script the record the next `update` call returns.
    pub fn queue_update_result(&self, record: E) {
        self.scripted_updates.lock().push_back(record);
    }

    /// Make the next gateway call fail with `error`.
    pub fn fail_next(&self, error: GatewayError) {
        *self.fail_next.lock() = Some(error);
    }

    /// Records currently in the store.
    #[must_use]
    pub fn records(&self) -> Vec<E> {
        self.store.lock().clone()
    }

    /// Serialized body of the most recent create/update call, exactly
    /// as it would have gone over the wire.
    #[must_use]
    pub fn last_submitted_body(&self) -> Option<serde_json::Value> {
        self.last_submitted_body.lock().clone()
    }

    fn take_failure(&self) -> Result<(), GatewayError> {
        match self.fail_next.lock().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl<E: Resource> Default for FakeGateway<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Resource> Gateway<E> for FakeGateway<E> {
    async fn list_all(&self) -> Result<Vec<E>, GatewayError> {
        self.calls.list_all.fetch_add(1, Ordering::SeqCst);
        self.take_failure()?;
        Ok(self.store.lock().clone())
    }

    async fn list_by_parent(&self, parent_id: &str) -> Result<Vec<E>, GatewayError> {
        self.calls.list_by_parent.fetch_add(1, Ordering::SeqCst);
        self.take_failure()?;
        if E::PARENT.is_none() {
            return Err(GatewayError::ParentScope { kind: E::KIND });
        }
        Ok(self
            .store
            .lock()
            .iter()
            .filter(|record| (self.parent_of)(*record).as_deref() == Some(parent_id))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<E, GatewayError> {
        self.calls.get_by_id.fetch_add(1, Ordering::SeqCst);
        self.take_failure()?;
        self.store
            .lock()
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound {
                kind: E::KIND,
                id: id.to_string(),
            })
    }

    async fn create(&self, payload: &E::Payload) -> Result<E, GatewayError> {
        self.calls.create.fetch_add(1, Ordering::SeqCst);
        *self.last_submitted_body.lock() =
            Some(serde_json::to_value(payload).expect("payload serializes"));
        self.take_failure()?;
        let record = self
            .scripted_creates
            .lock()
            .pop_front()
            .expect("no scripted create result; call queue_create_result first");
        self.store.lock().push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, payload: &E::Payload) -> Result<E, GatewayError> {
        self.calls.update.fetch_add(1, Ordering::SeqCst);
        *self.last_submitted_body.lock() =
            Some(serde_json::to_value(payload).expect("payload serializes"));
        self.take_failure()?;
        let mut store = self.store.lock();
        let Some(position) = store.iter().position(|record| record.id() == id) else {
            return Err(GatewayError::NotFound {
                kind: E::KIND,
                id: id.to_string(),
            });
        };
        let merged = self
            .scripted_updates
            .lock()
            .pop_front()
            .unwrap_or_else(|| store[position].clone());
        store[position] = merged.clone();
        Ok(merged)
    }

    async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        self.calls.delete.fetch_add(1, Ordering::SeqCst);
        self.take_failure()?;
        let mut store = self.store.lock();
        let Some(position) = store.iter().position(|record| record.id() == id) else {
            return Err(GatewayError::NotFound {
                kind: E::KIND,
                id: id.to_string(),
            });
        };
        store.remove(position);
        Ok(())
    }
}
