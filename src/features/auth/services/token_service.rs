use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::{AuthenticatedUser, Claims};
use crate::features::auth::validator::TOKEN_AUDIENCE;

/// Issued access token and its lifetime in seconds
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in: i64,
}

/// Signs HS256 access tokens for signed-in users
pub struct TokenService {
    encoding_key: EncodingKey,
    issuer: String,
    ttl_secs: u64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            issuer: config.jwt_issuer.clone(),
            ttl_secs: config.token_ttl.as_secs(),
        }
    }

    pub fn create_token(&self, user: &AuthenticatedUser) -> Result<IssuedToken> {
        let now = Utc::now().timestamp().max(0) as u64;
        self.create_token_at(user, now)
    }

    fn create_token_at(&self, user: &AuthenticatedUser, issued_at: u64) -> Result<IssuedToken> {
        let claims = Claims {
            sub: user.sub.clone(),
            name: user.name.clone(),
            iss: self.issuer.clone(),
            aud: TOKEN_AUDIENCE.to_string(),
            iat: issued_at,
            exp: issued_at.saturating_add(self.ttl_secs),
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                tracing::error!("Failed to sign access token: {}", e);
                AppError::Internal(format!("Failed to sign access token: {}", e))
            })?;

        Ok(IssuedToken {
            access_token,
            expires_in: i64::try_from(self.ttl_secs).unwrap_or(i64::MAX),
        })
    }
}
