//! Error taxonomy for gateway calls.
//!
//! Errors propagate unchanged to the entity managers, which decide
//! placement (inline vs. notice). Nothing at this layer retries.

use acadia_model::EntityKind;

/// Failure shapes a gateway call can produce.
///
/// Variants carry rendered messages rather than source errors so values
/// stay `Clone` and can be retained by the query cache alongside
/// last-known-good data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// Transport failure; no response was received.
    #[error("network error: {message}")]
    Network {
        /// Rendered transport error.
        message: String,
    },

    /// The target record does not exist (HTTP 404).
    #[error("{kind} {id} not found")]
    NotFound {
        /// Entity collection addressed.
        kind: EntityKind,
        /// Identifier that failed to resolve.
        id: String,
    },

    /// The backend rejected the submitted fields (HTTP 400/422).
    #[error("validation rejected: {message}")]
    Validation {
        /// Backend-reported message, shown inline on the form.
        message: String,
    },

    /// A response arrived but its body could not be decoded.
    #[error("could not decode {kind} response: {message}")]
    Decode {
        /// Entity collection addressed.
        kind: EntityKind,
        /// Rendered decode error.
        message: String,
    },

    /// Any other failure shape.
    #[error("unexpected response (status {status}): {body}")]
    Unexpected {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        body: String,
    },

    /// Parent-scoped listing requested for an entity with no parent.
    #[error("{kind} has no parent-scoped listing")]
    ParentScope {
        /// Entity collection addressed.
        kind: EntityKind,
    },
}

impl GatewayError {
    /// True for the missing-record failure shape.
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for backend field-validation rejections.
    #[inline]
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// True for transport failures where cached data should stay up.
    #[inline]
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}
