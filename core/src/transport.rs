//! Transport capability: the single seam between the client and the network.
//!
//! # Design
//! `Transport` turns a fully-formed `HttpRequest` into an `HttpResponse` or a
//! `TransportError`. It is the only abstraction boundary in the crate: tests
//! implement it in-process with canned responses, production code uses
//! `HttpTransport` over reqwest. Connection pooling, timeouts, and
//! cancellation are entirely the transport's concern — the client adds no
//! policy of its own on top.

use async_trait::async_trait;
use log::{debug, trace};

use crate::http::{HttpRequest, HttpResponse, Method};

/// A transport-level failure: anything that prevented an HTTP response from
/// being produced at all (DNS, connection refusal, TLS, timeout).
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Sends one request and asynchronously yields the response or a failure.
///
/// Implementations must be safe to share across concurrent calls; the client
/// holds a transport behind an `Arc` and never serializes access to it.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> std::result::Result<HttpResponse, TransportError>;
}

/// Production transport backed by `reqwest::Client`.
///
/// Reads the entire response body into memory; this client does not stream.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> std::result::Result<HttpResponse, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
            Method::Patch => reqwest::Method::PATCH,
        };

        let mut req = self.client.request(method, request.url);
        for (name, value) in &request.headers {
            req = req.header(name, value);
        }
        if let Some(body) = request.body {
            req = req.body(body);
        }

        let response = req
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        debug!("transport received status {status}");

        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError(e.to_string()))?
            .to_vec();
        trace!("transport read {} body bytes", body.len());

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
