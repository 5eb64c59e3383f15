//! Authentication configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Minimum HS256 secret length accepted in production.
pub const MIN_JWT_SECRET_LEN: usize = 32;

/// Bearer token settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// HS256 shared secret. Without one, every token is rejected.
    pub jwt_secret: Option<Secret<String>>,

    /// Expected `iss` claim, if any
    pub jwt_issuer: Option<String>,
}

impl AuthConfig {
    pub fn validate(&self, environment: Environment) -> Result<(), ValidationError> {
        if environment != Environment::Production {
            return Ok(());
        }
        match &self.jwt_secret {
            None => Err(ValidationError::MissingRequired("AUTH__JWT_SECRET")),
            Some(secret) if secret.expose_secret().len() < MIN_JWT_SECRET_LEN => {
                Err(ValidationError::JwtSecretTooShort(MIN_JWT_SECRET_LEN))
            }
            Some(_) => Ok(()),
        }
    }
}
