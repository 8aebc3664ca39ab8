//! Configuration for the token service

use aw_shared::config::JwtConfig;

use crate::domain::entities::token::{ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Access token expiry in seconds
    pub access_token_expiry: i64,
    /// Refresh token expiry in seconds
    pub refresh_token_expiry: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            access_token_expiry: ACCESS_TOKEN_EXPIRY_MINUTES * 60,
            refresh_token_expiry: REFRESH_TOKEN_EXPIRY_DAYS * 86_400,
        }
    }
}

impl From<&JwtConfig> for TokenConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            access_token_expiry: config.access_token_expiry,
            refresh_token_expiry: config.refresh_token_expiry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_expiries() {
        let config = TokenConfig::default();
        assert_eq!(config.access_token_expiry, 900);
        assert_eq!(config.refresh_token_expiry, 14 * 86_400);
    }

    #[test]
    fn test_from_jwt_config() {
        let jwt = JwtConfig::new("secret").with_access_expiry_minutes(5);
        let config = TokenConfig::from(&jwt);
        assert_eq!(config.jwt_secret, "secret");
        assert_eq!(config.access_token_expiry, 300);
    }
}
