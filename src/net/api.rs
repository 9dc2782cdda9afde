//! HTTP client wrapper for the FluxVision API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token attached from persisted storage, cookies forwarded, and a fixed
//! 10 s timeout. Server-side (SSR): stubs returning an error since the
//! API is only reachable from the browser.
//!
//! INTERCEPTION
//! ============
//! Every failed response goes through [`handle_failure`]:
//! - 401 off `/auth/me` tears down persisted credentials and emits the
//!   unauthorized event for the shell to act on.
//! - 401 on `/auth/me` is returned silently; the startup session check
//!   owns that decision.
//! - Everything else surfaces a notification with the server's `detail`
//!   message, falling back to a generic string.
//! Callers therefore never need auth- or error-display logic of their own.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::events;
use crate::util::storage;

/// Base URL all request paths are appended to.
pub const BASE_URL: &str = "https://rotas.fluxvision.cloud/api";

/// Fixed per-request timeout.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Fallback message when the server provides no `detail` field.
pub const GENERIC_ERROR: &str = "Erro interno do servidor";

/// Failure of a single API call. Terminal: there is no retry logic
/// anywhere in the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// 401 from the server; credentials are no longer valid.
    Unauthorized,
    /// Any other non-success HTTP status, with the derived message.
    Server { status: u16, message: String },
    /// The request never produced a response.
    Network(String),
    /// The fixed request timeout elapsed.
    Timeout,
    /// The response body was not the expected JSON shape.
    Decode(String),
}

impl ApiError {
    /// User-facing message: the server `detail` when we have one,
    /// otherwise the generic fallback.
    pub fn message(&self) -> String {
        match self {
            Self::Server { message, .. } => message.clone(),
            Self::Unauthorized => "Não autorizado".to_owned(),
            Self::Network(_) | Self::Timeout | Self::Decode(_) => GENERIC_ERROR.to_owned(),
        }
    }

    /// True only for [`ApiError::Unauthorized`].
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::Server { status, message } => write!(f, "server error {status}: {message}"),
            Self::Network(e) => write!(f, "network error: {e}"),
            Self::Timeout => write!(f, "request timed out"),
            Self::Decode(e) => write!(f, "decode error: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Whether `path` is the startup session-check endpoint, which is exempt
/// from the global 401 teardown.
pub(crate) fn is_session_check(path: &str) -> bool {
    path.starts_with("/auth/me")
}

/// Extract the server's `detail` message from an error body, if any.
pub(crate) fn detail_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(ToOwned::to_owned)
}

/// Apply the response-side interception rules for a failed response and
/// classify it. Pure with respect to the network; side effects are the
/// credential teardown and event emission described in the module docs.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn handle_failure(path: &str, status: u16, body: &str) -> ApiError {
    if status == 401 {
        if is_session_check(path) {
            return ApiError::Unauthorized;
        }
        storage::clear_credentials();
        events::emit_unauthorized();
        events::emit_error(detail_message(body).unwrap_or_else(|| GENERIC_ERROR.to_owned()));
        return ApiError::Unauthorized;
    }

    let message = detail_message(body).unwrap_or_else(|| GENERIC_ERROR.to_owned());
    events::emit_error(message.clone());
    ApiError::Server { status, message }
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    // Some endpoints answer with an empty body; treat it as JSON null.
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(not(feature = "hydrate"))]
fn server_stub() -> ApiError {
    ApiError::Network("requisições não estão disponíveis fora do navegador".to_owned())
}

#[cfg(feature = "hydrate")]
async fn send_request(
    method: gloo_net::http::Method,
    path: &str,
    query: &[(&str, String)],
    body: Option<&serde_json::Value>,
) -> Result<String, ApiError> {
    use futures::FutureExt;
    use gloo_net::http::RequestBuilder;

    let url = format!("{BASE_URL}{path}");
    let mut builder = RequestBuilder::new(&url)
        .method(method)
        .credentials(web_sys::RequestCredentials::Include)
        .query(query.iter().map(|(k, v)| (*k, v.as_str())));

    if let Some(token) = storage::token() {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder.json(json),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let send = request.send().fuse();
    let timeout = gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS).fuse();
    futures::pin_mut!(send, timeout);

    let response = futures::select! {
        resp = send => resp,
        () = timeout => {
            events::emit_error(GENERIC_ERROR);
            return Err(ApiError::Timeout);
        }
    };

    let response = match response {
        Ok(resp) => resp,
        Err(e) => {
            events::emit_error(GENERIC_ERROR);
            return Err(ApiError::Network(e.to_string()));
        }
    };

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    if response.ok() {
        Ok(text)
    } else {
        Err(handle_failure(path, status, &text))
    }
}

/// `GET` with optional query parameters, decoding the JSON response.
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let text = send_request(gloo_net::http::Method::GET, path, query, None).await?;
        decode(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, query);
        Err(server_stub())
    }
}

/// `POST` with a JSON body, decoding the JSON response.
pub async fn post_json<T: DeserializeOwned>(
    path: &str,
    body: &impl Serialize,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let json = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let text = send_request(gloo_net::http::Method::POST, path, &[], Some(&json)).await?;
        decode(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(server_stub())
    }
}

/// `PUT` with a JSON body, decoding the JSON response.
pub async fn put_json<T: DeserializeOwned>(
    path: &str,
    body: &impl Serialize,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let json = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let text = send_request(gloo_net::http::Method::PUT, path, &[], Some(&json)).await?;
        decode(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(server_stub())
    }
}

/// `DELETE`, decoding the JSON response.
pub async fn delete_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let text = send_request(gloo_net::http::Method::DELETE, path, &[], None).await?;
        decode(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(server_stub())
    }
}
