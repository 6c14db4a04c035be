// ============================
// auth-server/src/store.rs
// ============================
//! User persistence abstraction with an in-memory implementation.
use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::AppError;

/// A persisted user record
#[derive(Clone, Debug, Serialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    /// Salted one-way hash of the password; the plaintext is never stored
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Fields supplied by signup; the store assigns the id
pub struct NewUser {
    pub name: String,
    pub user_name: String,
    pub password_hash: String,
    pub access_token: String,
}

/// Trait for user store backends
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find the user with the given login handle
    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<User>, AppError>;

    /// Find the user holding the given access token
    async fn find_by_token(&self, token: &str) -> Result<Option<User>, AppError>;

    /// Persist a new user, enforcing uniqueness of `user_name` and `name`.
    ///
    /// Duplicates are rejected with [`AppError::Conflict`]; a `user_name`
    /// collision is reported in preference to a `name` collision. The check
    /// and the insert are a single atomic operation.
    async fn create_user(&self, new_user: NewUser) -> Result<User, AppError>;
}

/// In-memory implementation of the `UserStore` trait
#[derive(Clone, Default)]
pub struct MemoryStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.user_name == user_name).cloned())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.access_token == token).cloned())
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        // Uniqueness check and insert share one write-lock critical section,
        // so two concurrent signups cannot both pass the check.
        let mut users = self.users.write().await;

        if users.values().any(|u| u.user_name == new_user.user_name) {
            return Err(AppError::Conflict("username"));
        }
        if users.values().any(|u| u.name == new_user.name) {
            return Err(AppError::Conflict("name"));
        }

        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            user_name: new_user.user_name,
            password_hash: new_user.password_hash,
            access_token: new_user.access_token,
        };
        users.insert(user.id, user.clone());

        Ok(user)
    }
}
