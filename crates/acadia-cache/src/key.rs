//! Logical query identifiers.
//!
//! A key names one cacheable query: a whole collection, a parent-scoped
//! slice of it, or a single record. Keys render canonically
//! (`courses`, `courses/program/P1`, `courses/id/C1`) and invalidation
//! can target a whole kind namespace at once.

use acadia_model::EntityKind;
use std::fmt;

/// Scope of a cached query within one entity namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryScope {
    /// The full collection.
    Collection,
    /// The subset whose foreign key equals `id`.
    Parent {
        /// Parent entity kind (e.g. `School` for departments).
        kind: EntityKind,
        /// Parent record id.
        id: String,
    },
    /// One record, by id.
    Record {
        /// Record id.
        id: String,
    },
}

/// Identifier of one logical query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    kind: EntityKind,
    scope: QueryScope,
}

impl QueryKey {
    /// Key for the full collection of `kind`.
    #[inline]
    #[must_use]
    pub fn collection(kind: EntityKind) -> Self {
        Self {
            kind,
            scope: QueryScope::Collection,
        }
    }

    /// Key for the slice of `kind` owned by one parent record.
    #[inline]
    pub fn parent_scoped(kind: EntityKind, parent: EntityKind, parent_id: impl Into<String>) -> Self {
        Self {
            kind,
            scope: QueryScope::Parent {
                kind: parent,
                id: parent_id.into(),
            },
        }
    }

    /// Key for a single record of `kind`.
    #[inline]
    pub fn record(kind: EntityKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            scope: QueryScope::Record { id: id.into() },
        }
    }

    /// Entity namespace this key belongs to.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Query scope within the namespace.
    #[inline]
    #[must_use]
    pub fn scope(&self) -> &QueryScope {
        &self.scope
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scope {
            QueryScope::Collection => f.write_str(self.kind.collection()),
            QueryScope::Parent { kind, id } => {
                write!(f, "{}/{}/{}", self.kind.collection(), kind.singular(), id)
            }
            QueryScope::Record { id } => write!(f, "{}/id/{}", self.kind.collection(), id),
        }
    }
}
