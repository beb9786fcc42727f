//! Plain-data HTTP request and response types.
//!
//! # Design
//! These types describe HTTP exchanges as plain data. The client builds
//! `HttpRequest` values and interprets `HttpResponse` values; the `Transport`
//! implementation is the only code that touches the network. This separation
//! keeps the client deterministic and lets tests substitute an in-process
//! transport with canned responses.
//!
//! All fields use owned types (`String`, `Vec`) so values can move freely
//! across the async transport boundary without lifetime concerns.

use url::Url;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        }
    }
}

/// A fully-formed HTTP request described as plain data.
///
/// The `url` is always absolute — `ApiClient` resolves the caller's path
/// against its base URL before the request reaches any transport. Headers are
/// carried as ordered pairs and set verbatim; the client injects no defaults
/// of its own.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: Url,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport` after executing an `HttpRequest`. The body is
/// raw bytes; decoding happens in `ApiClient` only after the status code has
/// been validated.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}
