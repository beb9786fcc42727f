//! Asynchronous API client core for the user service.
//!
//! # Overview
//! Sends one HTTP request per call, validates the status code, and decodes
//! the JSON body into a caller-chosen type. Every failure maps into a closed
//! four-variant `ApiError` before it leaves the crate.
//!
//! # Design
//! - `ApiClient` is immutable — it holds only a base URL and a transport.
//! - `Transport` is the single abstraction boundary; tests substitute an
//!   in-process double, production uses the reqwest-backed `HttpTransport`.
//! - Request/response values are plain owned data, so the I/O seam stays
//!   explicit and deterministic to test.
//! - No retries, caching, or session state; policy belongs to callers.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use endpoint::Endpoint;
pub use error::{ApiError, Result};
pub use http::{HttpRequest, HttpResponse, Method};
pub use transport::{HttpTransport, Transport, TransportError};
pub use types::{AuthResponse, LoginUser, RegisterUser, User};
