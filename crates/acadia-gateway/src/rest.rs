//! REST implementation of the gateway contract.
//!
//! One shared HTTP client serves every entity gateway; paths follow the
//! uniform contract: `GET /{plural}`, `GET /{plural}/{parent}/{id}`,
//! `GET|PUT|DELETE /{plural}/{id}`, `POST /{plural}`.

use crate::config::{ClientConfig, ConfigError};
use crate::error::GatewayError;
use crate::gateway::Gateway;
use acadia_model::{EntityKind, Resource};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use url::Url;

const BODY_SNIPPET_LEN: usize = 256;

/// Shared HTTP transport for all entity gateways.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RestClient {
    /// Build the shared client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| GatewayError::Network {
                message: "base URL cannot carry path segments".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        kind: EntityKind,
        id: Option<&str>,
        segments: &[&str],
    ) -> Result<T, GatewayError> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%url, "GET");
        let response = self.http.get(url).send().await.map_err(transport)?;
        decode(kind, id, response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        kind: EntityKind,
        segments: &[&str],
        body: &B,
    ) -> Result<T, GatewayError> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%url, "POST");
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        decode(kind, None, response).await
    }

    async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        kind: EntityKind,
        id: &str,
        segments: &[&str],
        body: &B,
    ) -> Result<T, GatewayError> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%url, "PUT");
        let response = self
            .http
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        decode(kind, Some(id), response).await
    }

    async fn delete(
        &self,
        kind: EntityKind,
        id: &str,
        segments: &[&str],
    ) -> Result<(), GatewayError> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%url, "DELETE");
        let response = self.http.delete(url).send().await.map_err(transport)?;
        let status = response.status();
        if status.is_success() {
            // 200 and 204 are both in contract; the body is irrelevant.
            return Ok(());
        }
        Err(failure(kind, Some(id), status.as_u16(), response).await)
    }
}

fn transport(err: reqwest::Error) -> GatewayError {
    GatewayError::Network {
        message: err.to_string(),
    }
}

async fn decode<T: DeserializeOwned>(
    kind: EntityKind,
    id: Option<&str>,
    response: reqwest::Response,
) -> Result<T, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return response.json::<T>().await.map_err(|e| GatewayError::Decode {
            kind,
            message: e.to_string(),
        });
    }
    Err(failure(kind, id, status.as_u16(), response).await)
}

async fn failure(
    kind: EntityKind,
    id: Option<&str>,
    status: u16,
    response: reqwest::Response,
) -> GatewayError {
    let body = response.text().await.unwrap_or_default();
    match status {
        404 => GatewayError::NotFound {
            kind,
            id: id.unwrap_or(kind.collection()).to_string(),
        },
        400 | 422 => GatewayError::Validation {
            message: validation_message(&body),
        },
        _ => GatewayError::Unexpected {
            status,
            body: snippet(&body),
        },
    }
}

/// Backends report validation failures as `{"message": "..."}`; fall
/// back to the raw body when the shape differs.
fn validation_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| snippet(body))
}

fn snippet(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(BODY_SNIPPET_LEN) {
        Some((cut, _)) => format!("{}…", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}

/// REST gateway for one entity collection.
#[derive(Debug, Clone)]
pub struct RestGateway<E> {
    client: RestClient,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Resource> RestGateway<E> {
    /// Bind a gateway to the shared client.
    #[inline]
    #[must_use]
    pub fn new(client: RestClient) -> Self {
        Self {
            client,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E: Resource> Gateway<E> for RestGateway<E> {
    async fn list_all(&self) -> Result<Vec<E>, GatewayError> {
        self.client
            .get_json(E::KIND, None, &[E::KIND.collection()])
            .await
    }

    async fn list_by_parent(&self, parent_id: &str) -> Result<Vec<E>, GatewayError> {
        let Some(parent) = E::PARENT else {
            return Err(GatewayError::ParentScope { kind: E::KIND });
        };
        self.client
            .get_json(
                E::KIND,
                None,
                &[E::KIND.collection(), parent.kind.singular(), parent_id],
            )
            .await
    }

    async fn get_by_id(&self, id: &str) -> Result<E, GatewayError> {
        self.client
            .get_json(E::KIND, Some(id), &[E::KIND.collection(), id])
            .await
    }

    async fn create(&self, payload: &E::Payload) -> Result<E, GatewayError> {
        self.client
            .post_json(E::KIND, &[E::KIND.collection()], payload)
            .await
    }

    async fn update(&self, id: &str, payload: &E::Payload) -> Result<E, GatewayError> {
        self.client
            .put_json(E::KIND, id, &[E::KIND.collection(), id], payload)
            .await
    }

    async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        self.client
            .delete(E::KIND, id, &[E::KIND.collection(), id])
            .await
    }
}
