//! Acadia Manager - per-entity view-models
//!
//! One `EntityManager` per collection, each composing the shared query
//! cache with its REST gateway and local UI state:
//! - search text, active filters with parent-chain reset, column sort
//! - selection plus form/detail panel state machines
//! - CRUD submission with cache-namespace invalidation
//! - queued notices the presentation layer drains
//!
//! Managers never swallow an error: every failure is both returned and
//! queued as a notice.

#![warn(unreachable_pub)]

mod manager;
mod notice;
mod panel;
pub mod view;

pub use manager::{EntityManager, ViewState};
pub use notice::{Notice, NoticeLevel};
pub use panel::{transition, FormPanel, PanelEvent, PanelTransitionError};
pub use view::{SortDirection, SortSpec};
