//! Domain DTOs for the user service.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently,
//! so the client crate never depends on server internals. Integration tests
//! catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A user account as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    #[serde(rename = "isPremium")]
    pub is_premium: bool,
}

/// Request payload for creating a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request payload for logging into an existing account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginUser {
    pub email: String,
    pub password: String,
}

/// Returned by both `auth/register` and `auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_premium_field_uses_wire_name() {
        let user = User {
            id: 1,
            name: "Steve Jobs".to_string(),
            is_premium: true,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["isPremium"], true);
        assert!(json.get("is_premium").is_none());
    }

    #[test]
    fn user_roundtrips_through_json() {
        let json = r#"{"id":1,"name":"Steve Jobs","isPremium":true}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Steve Jobs");
        assert!(user.is_premium);
    }

    #[test]
    fn user_rejects_missing_premium_field() {
        let result: Result<User, _> =
            serde_json::from_str(r#"{"id":1,"name":"Steve Jobs"}"#);
        assert!(result.is_err());
    }
}
