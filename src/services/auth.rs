//! Token issuance service

use chrono::Utc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::auth::Claims,
};

#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Check operator credentials and return a signed JWT
    pub fn authenticate(&self, login: &str, password: &str) -> AppResult<String> {
        if login != self.config.api_login || password != self.config.api_password {
            return Err(AppError::Authentication(
                "Invalid login or password".to_string(),
            ));
        }

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: login.to_string(),
            iat: now,
            exp: now + (self.config.jwt_expiration_hours as i64 * 3600),
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }
}
