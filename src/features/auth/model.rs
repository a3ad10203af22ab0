use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Signed-in portal user, taken from a validated access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    /// Email address the user signed in with
    pub sub: String,
    /// Display name (local part of the email)
    pub name: String,
}

impl AuthenticatedUser {
    /// Build a user from a login email; the display name is the part before `@`
    pub fn from_email(email: &str) -> Self {
        let email = email.trim();
        let name = email.split('@').next().unwrap_or(email).to_string();
        Self {
            sub: email.to_string(),
            name,
        }
    }
}

/// Claims carried by the access tokens issued at login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub iss: String,
    pub aud: String,
    pub iat: u64,
    pub exp: u64,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            sub: claims.sub,
            name: claims.name,
        }
    }
}
