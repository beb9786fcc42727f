//! Generic request/decode path for the API client.
//!
//! # Design
//! `ApiClient` holds only a base URL and an injected transport, and carries no
//! mutable state between calls. Each call builds its own request, awaits the
//! transport once, and interprets the response locally, so concurrent callers
//! never interfere. Failures map to exactly one `ApiError` variant, with a
//! fixed precedence: unresolvable URL, then transport failure, then non-2xx
//! status, then decode failure. A non-2xx body is never handed to the decoder.

use std::sync::Arc;

use log::debug;
use serde::de::DeserializeOwned;
use url::Url;

use crate::endpoint::Endpoint;
use crate::error::{ApiError, Result};
use crate::http::{HttpRequest, Method};
use crate::transport::{HttpTransport, Transport};

/// Asynchronous client for a JSON-over-HTTP API.
///
/// Immutable and cheap to clone; safe to share across concurrent calls.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Url,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(base_url: Url, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url,
            transport,
        }
    }

    /// Convenience constructor wiring in the reqwest-backed transport.
    pub fn with_http_transport(base_url: Url) -> Self {
        Self::new(base_url, Arc::new(HttpTransport::new()))
    }

    /// Send one request and decode the 2xx response body into `T`.
    ///
    /// Headers are set verbatim; no defaults are injected here. Exactly one
    /// outbound request is made per call — no retries, no caching.
    pub async fn perform_request<T: DeserializeOwned>(
        &self,
        path: &str,
        method: Method,
        headers: Vec<(String, String)>,
        body: Option<Vec<u8>>,
    ) -> Result<T> {
        // URL resolution happens before any network activity.
        let url = self
            .base_url
            .join(path)
            .map_err(|_| ApiError::InvalidUrl)?;
        debug!("{} {url}", method.as_str());

        let request = HttpRequest {
            url,
            method,
            headers,
            body,
        };

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        debug!("response status: {}", response.status);

        // The status gate runs before decoding; a non-2xx body is never
        // passed to the decoder, regardless of its content.
        if !(200..300).contains(&response.status) {
            return Err(ApiError::InvalidResponse(response.status));
        }

        serde_json::from_slice(&response.body).map_err(|e| ApiError::Decoding(e.to_string()))
    }

    /// `perform_request` with `GET`, no headers, and no body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.perform_request(path, Method::Get, Vec::new(), None).await
    }

    /// Endpoint-descriptor overload. Serializes the descriptor's JSON body
    /// and tags `Content-Type: application/json` when a body is present.
    pub async fn request<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T> {
        let (headers, body) = match endpoint.body() {
            Some(value) => (
                vec![("Content-Type".to_string(), "application/json".to_string())],
                Some(value.to_string().into_bytes()),
            ),
            None => (Vec::new(), None),
        };
        self.perform_request(&endpoint.path(), endpoint.method(), headers, body)
            .await
    }
}
