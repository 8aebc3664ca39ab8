//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenType, JWT_AUDIENCE, JWT_ISSUER};
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenConfig;

/// Service issuing and verifying JWT access and refresh tokens
///
/// The service is a pure function of the signing key and the clock: it keeps
/// no per-token state. Whether a refresh token is still the active one for
/// its user is the session registry's question, not this service's.
pub struct TokenService {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed access token for a user
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded JWT
    /// * `Err(DomainError)` - Token generation failed
    pub fn issue_access(&self, user_id: Uuid) -> DomainResult<String> {
        let claims = Claims::new(user_id, TokenType::Access, self.config.access_token_expiry);
        self.encode_jwt(&claims)
    }

    /// Issues a signed refresh token for a user
    ///
    /// # Returns
    ///
    /// * `Ok((String, Claims))` - The encoded JWT and its claims; the caller
    ///   registers the `jti` with the session registry
    /// * `Err(DomainError)` - Token generation failed
    pub fn issue_refresh(&self, user_id: Uuid) -> DomainResult<(String, Claims)> {
        let claims = Claims::new(user_id, TokenType::Refresh, self.config.refresh_token_expiry);
        let token = self.encode_jwt(&claims)?;
        Ok((token, claims))
    }

    /// Verifies a token and returns its claims
    ///
    /// Checks signature, expiry, issuer/audience, and the type tag. Callers
    /// must present all failures to clients as one generic auth failure; the
    /// distinct variants are for internal logging only.
    ///
    /// # Arguments
    ///
    /// * `token` - The encoded JWT
    /// * `expected_type` - Access or refresh
    pub fn verify(&self, token: &str, expected_type: TokenType) -> DomainResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        DomainError::Token(TokenError::TokenExpired)
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        DomainError::Token(TokenError::InvalidSignature)
                    }
                    _ => DomainError::Token(TokenError::InvalidTokenFormat),
                }
            })?;

        if token_data.claims.token_type != expected_type {
            return Err(DomainError::Token(TokenError::WrongTokenType));
        }

        Ok(token_data.claims)
    }

    /// Access token lifetime in seconds
    pub fn access_expiry_seconds(&self) -> i64 {
        self.config.access_token_expiry
    }

    /// Refresh token lifetime in seconds
    pub fn refresh_expiry_seconds(&self) -> i64 {
        self.config.refresh_token_expiry
    }

    /// Encodes claims into a JWT
    fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }
}
