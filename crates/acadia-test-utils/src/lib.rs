//! Testing utilities for the Acadia workspace
//!
//! Shared fixtures, a scriptable in-memory gateway, and a warp-backed
//! mock of the records backend.

#![allow(missing_docs)]

pub mod fake;
pub mod fixtures;
pub mod mock_api;

pub use fake::{CallCounts, FakeGateway};
pub use mock_api::MockApi;

use std::sync::Once;

/// Install a compact tracing subscriber once per test binary.
/// Respects `RUST_LOG`; silent by default.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
