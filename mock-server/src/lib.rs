use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    #[serde(rename = "isPremium")]
    pub is_premium: bool,
}

#[derive(Serialize, Deserialize)]
pub struct RegisterUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct LoginUser {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Clone)]
struct Account {
    user: User,
    email: String,
    password: String,
}

pub struct Store {
    accounts: HashMap<u64, Account>,
    next_id: u64,
}

impl Store {
    /// One well-known premium account so `GET /user/1` works unseeded.
    fn seeded() -> Self {
        let mut accounts = HashMap::new();
        accounts.insert(
            1,
            Account {
                user: User {
                    id: 1,
                    name: "Steve Jobs".to_string(),
                    is_premium: true,
                },
                email: "steve@mockapi.example.com".to_string(),
                password: "apple".to_string(),
            },
        );
        Self {
            accounts,
            next_id: 2,
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded()));
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/user/{id}", get(get_user))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn token_for(id: u64) -> String {
    format!("token-{id}")
}

async fn register(
    State(db): State<Db>,
    Json(input): Json<RegisterUser>,
) -> Result<(StatusCode, Json<AuthResponse>), StatusCode> {
    let mut store = db.write().await;
    if store.accounts.values().any(|a| a.email == input.email) {
        return Err(StatusCode::CONFLICT);
    }
    let id = store.next_id;
    store.next_id += 1;
    let user = User {
        id,
        name: input.name,
        is_premium: false,
    };
    store.accounts.insert(
        id,
        Account {
            user: user.clone(),
            email: input.email,
            password: input.password,
        },
    );
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token: token_for(id),
            user,
        }),
    ))
}

async fn login(
    State(db): State<Db>,
    Json(input): Json<LoginUser>,
) -> Result<Json<AuthResponse>, StatusCode> {
    let store = db.read().await;
    let account = store
        .accounts
        .values()
        .find(|a| a.email == input.email)
        .ok_or(StatusCode::UNAUTHORIZED)?;
    if account.password != input.password {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(AuthResponse {
        token: token_for(account.user.id),
        user: account.user.clone(),
    }))
}

async fn get_user(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<User>, StatusCode> {
    let store = db.read().await;
    store
        .accounts
        .get(&id)
        .map(|a| Json(a.user.clone()))
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_with_wire_field_name() {
        let user = User {
            id: 1,
            name: "Steve Jobs".to_string(),
            is_premium: true,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Steve Jobs");
        assert_eq!(json["isPremium"], true);
    }

    #[test]
    fn register_user_rejects_missing_password() {
        let result: Result<RegisterUser, _> =
            serde_json::from_str(r#"{"name":"A","email":"a@example.com"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn login_user_parses_from_json() {
        let input: LoginUser =
            serde_json::from_str(r#"{"email":"a@example.com","password":"pw"}"#).unwrap();
        assert_eq!(input.email, "a@example.com");
        assert_eq!(input.password, "pw");
    }

    #[test]
    fn seeded_store_contains_premium_user_one() {
        let store = Store::seeded();
        let account = store.accounts.get(&1).unwrap();
        assert_eq!(account.user.name, "Steve Jobs");
        assert!(account.user.is_premium);
        assert_eq!(store.next_id, 2);
    }
}
