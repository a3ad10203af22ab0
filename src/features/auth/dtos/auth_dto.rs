use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::auth::model::AuthenticatedUser;

/// Request DTO for signing in.
///
/// The portal has no password check: any valid email address signs in.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequestDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Response DTO for a successful login
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    /// JWT access token
    pub access_token: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    /// Token expiry time in seconds
    pub expires_in: i64,
    pub user: AuthUserDto,
}

/// User info included in auth responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthUserDto {
    pub email: String,
    pub name: String,
}

impl From<AuthenticatedUser> for AuthUserDto {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            email: user.sub,
            name: user.name,
        }
    }
}
