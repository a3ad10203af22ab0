use std::sync::Arc;

use crate::core::error::Result;
use crate::features::auth::dtos::{AuthResponseDto, AuthUserDto, LoginRequestDto};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::services::TokenService;

/// Mock sign-in: every well-formed email gets a session token
pub struct AuthService {
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }

    pub async fn login(&self, dto: LoginRequestDto) -> Result<AuthResponseDto> {
        let user = AuthenticatedUser::from_email(&dto.email);
        let token = self.token_service.create_token(&user)?;

        tracing::info!("User signed in: {}", user.sub);

        Ok(AuthResponseDto {
            access_token: token.access_token,
            token_type: "Bearer".to_string(),
            expires_in: token.expires_in,
            user: user.into(),
        })
    }

    pub async fn get_current_user(&self, user: AuthenticatedUser) -> Result<AuthUserDto> {
        Ok(user.into())
    }
}
