//! The per-entity gateway contract.

use crate::error::GatewayError;
use acadia_model::Resource;
use async_trait::async_trait;

/// CRUD surface of one entity collection.
///
/// Every method is a single asynchronous network operation: no retries,
/// no local cache mutation (reconciliation is the query cache's job).
/// Managers hold gateways as `Arc<dyn Gateway<E>>` so tests can swap in
/// in-memory fakes.
#[async_trait]
pub trait Gateway<E: Resource>: Send + Sync {
    /// Fetch the full collection.
    async fn list_all(&self) -> Result<Vec<E>, GatewayError>;

    /// Fetch the subset whose foreign key equals `parent_id`.
    ///
    /// Only meaningful for entities with a natural parent; fails with
    /// [`GatewayError::ParentScope`] otherwise.
    async fn list_by_parent(&self, parent_id: &str) -> Result<Vec<E>, GatewayError>;

    /// Fetch one record; [`GatewayError::NotFound`] if the id is absent.
    async fn get_by_id(&self, id: &str) -> Result<E, GatewayError>;

    /// Create a record; the stored record with its assigned id comes
    /// back. Missing or invalid required fields surface as
    /// [`GatewayError::Validation`].
    async fn create(&self, payload: &E::Payload) -> Result<E, GatewayError>;

    /// Update a record; the merged, persisted record comes back.
    /// [`GatewayError::NotFound`] if the id is absent.
    async fn update(&self, id: &str, payload: &E::Payload) -> Result<E, GatewayError>;

    /// Delete a record. Idempotent from the caller's perspective: a
    /// second delete of the same id reports [`GatewayError::NotFound`],
    /// never a crash.
    async fn delete(&self, id: &str) -> Result<(), GatewayError>;
}
