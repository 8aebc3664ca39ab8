//! User entity representing a registered user in the AniWatch system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Unique login handle chosen at registration
    pub login: String,

    /// One-way salted password digest
    pub password_hash: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,

    /// Soft-delete flag; inactive users cannot authenticate
    pub is_active: bool,

    /// Whether the user has administrative privileges
    pub is_admin: bool,
}

impl User {
    /// Creates a new active, non-admin user
    pub fn new(login: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            login,
            password_hash,
            created_at: now,
            updated_at: now,
            is_active: true,
            is_admin: false,
        }
    }

    /// Replaces the password digest
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Soft-deletes the user account
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}
