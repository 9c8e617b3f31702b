//! Acadia Gateway - REST access to the records backend
//!
//! One gateway per entity collection, each translating CRUD intents
//! into HTTP calls against a single configured base URL:
//! - `Gateway<E>` — the async CRUD contract managers program against
//! - `RestGateway<E>` — the reqwest-backed implementation
//! - `GatewayError` — the error taxonomy surfaced to the UI layer
//!
//! Gateways never retry and never touch the query cache; they are the
//! network edge and nothing else.

#![warn(unreachable_pub)]

mod config;
mod error;
mod gateway;
mod rest;

pub use config::{ClientConfig, ConfigError, BASE_URL_ENV};
pub use error::GatewayError;
pub use gateway::Gateway;
pub use rest::{RestClient, RestGateway};
