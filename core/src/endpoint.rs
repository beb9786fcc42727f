//! Endpoint descriptors for the user service.
//!
//! # Design
//! Each variant is static data naming a path, method, and optional JSON body.
//! No call-site logic lives here; `ApiClient::request` consumes a descriptor,
//! serializes its body, and tags `Content-Type: application/json` when a body
//! is present.

use serde_json::{json, Value};

use crate::http::Method;

/// The closed set of user-service endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Register {
        name: String,
        email: String,
        password: String,
    },
    Login {
        email: String,
        password: String,
    },
    User(u64),
}

impl Endpoint {
    /// Path relative to the client's base URL.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Register { .. } => "auth/register".to_string(),
            Endpoint::Login { .. } => "auth/login".to_string(),
            Endpoint::User(id) => format!("user/{id}"),
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::Register { .. } | Endpoint::Login { .. } => Method::Post,
            Endpoint::User(_) => Method::Get,
        }
    }

    /// JSON request payload, if this endpoint carries one.
    pub fn body(&self) -> Option<Value> {
        match self {
            Endpoint::Register {
                name,
                email,
                password,
            } => Some(json!({
                "name": name,
                "email": email,
                "password": password,
            })),
            Endpoint::Login { email, password } => Some(json!({
                "email": email,
                "password": password,
            })),
            Endpoint::User(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_descriptor() {
        let endpoint = Endpoint::Register {
            name: "Steve Jobs".to_string(),
            email: "steve@example.com".to_string(),
            password: "apple".to_string(),
        };
        assert_eq!(endpoint.path(), "auth/register");
        assert_eq!(endpoint.method(), Method::Post);
        let body = endpoint.body().unwrap();
        assert_eq!(body["name"], "Steve Jobs");
        assert_eq!(body["email"], "steve@example.com");
        assert_eq!(body["password"], "apple");
    }

    #[test]
    fn login_descriptor() {
        let endpoint = Endpoint::Login {
            email: "steve@example.com".to_string(),
            password: "apple".to_string(),
        };
        assert_eq!(endpoint.path(), "auth/login");
        assert_eq!(endpoint.method(), Method::Post);
        let body = endpoint.body().unwrap();
        assert_eq!(body["email"], "steve@example.com");
        assert!(body.get("name").is_none());
    }

    #[test]
    fn user_descriptor_has_no_body() {
        let endpoint = Endpoint::User(42);
        assert_eq!(endpoint.path(), "user/42");
        assert_eq!(endpoint.method(), Method::Get);
        assert!(endpoint.body().is_none());
    }
}
