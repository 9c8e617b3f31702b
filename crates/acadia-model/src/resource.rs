//! The `Record` and `Resource` traits binding entities to the console.

use crate::kind::EntityKind;
use crate::value::{FilterValue, SortKey};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Link from a child entity to the parent entity that scopes its
/// listings (departments of a school, courses of a program).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentSpec {
    /// Kind of the parent entity.
    pub kind: EntityKind,
    /// Name of the active filter whose value selects the parent id.
    pub filter: &'static str,
}

/// Behavior every managed record shares.
///
/// Implementations are plain field projections; no I/O, no validation.
pub trait Record: Clone + Send + Sync + 'static {
    /// Backend-assigned identifier. Immutable once assigned.
    fn id(&self) -> &str;

    /// Short display label for notices and detail headers.
    fn label(&self) -> String;

    /// Fields the search box matches against, in match order.
    fn search_haystack(&self) -> Vec<&str>;

    /// Equality test for one named filter.
    ///
    /// A filter naming a field this entity does not carry passes: in the
    /// source console the school selector on the courses screen only
    /// scopes the program dropdown, it never restricts the table itself.
    fn matches_filter(&self, name: &str, value: &FilterValue) -> bool;

    /// Sort projection for one column, `None` when the column does not
    /// apply to this entity.
    fn sort_key(&self, field: &str) -> Option<SortKey>;
}

/// A `Record` wired to its REST collection and console screen.
pub trait Resource: Record + Serialize + DeserializeOwned {
    /// Submission payload: every field optional, absent fields are
    /// stripped from the serialized body.
    type Payload: Serialize + Default + Clone + Send + Sync + 'static;

    /// Which collection this entity belongs to.
    const KIND: EntityKind;

    /// Parent scoping for listings, when the entity has a natural parent.
    const PARENT: Option<ParentSpec>;

    /// Hierarchical filter names, outermost first. Changing a filter
    /// resets every filter after it in this chain.
    const FILTER_CHAIN: &'static [&'static str];
}
