use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use aw_core::domain::entities::user::User;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Desired login handle
    #[validate(length(min = 3, max = 64))]
    pub login: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

/// Public view of a user; the password digest never leaves the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub login: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            login: user.login,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_excludes_password_hash() {
        let user = User::new("shinji".to_string(), "digest".to_string());
        let response = UserResponse::from(user);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["login"], "shinji");
    }

    #[test]
    fn test_create_user_request_validation() {
        let request = CreateUserRequest {
            login: "ab".to_string(),
            password: "short".to_string(),
        };
        assert!(request.validate().is_err());

        let request = CreateUserRequest {
            login: "shinji".to_string(),
            password: "long enough password".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
