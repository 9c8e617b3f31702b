//! Acadia Cache - shared query state
//!
//! De-duplicates and reuses backend fetches for the whole console:
//! - `QueryCache` — stale-while-revalidate collection store with
//!   single-flight loads, generation-based discard of superseded
//!   responses, namespace invalidation, and optimistic overwrite
//! - `RecordCache` — TTL by-id store for detail views
//! - `QueryKey` — logical query identifiers
//!
//! Both caches are cheap-to-clone handles over shared state; the
//! console constructs them once and hands clones to every manager.

#![warn(unreachable_pub)]

mod config;
mod key;
mod records;
mod store;

pub use config::CacheConfig;
pub use key::{QueryKey, QueryScope};
pub use records::RecordCache;
pub use store::{QueryCache, Snapshot};
