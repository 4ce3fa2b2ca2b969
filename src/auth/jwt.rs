use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::claims::SessionClaims,
    errors::{AppError, AppResult},
    models::domain::User,
};

/// Signs and checks the session tokens handed to browsers and API clients.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_hours: i64,
}

impl JwtService {
    pub fn new(secret: &SecretString, ttl_hours: i64) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation: Validation::default(),
            ttl_hours,
        }
    }

    pub fn create_token(&self, user: &User, session_id: &str) -> AppResult<(String, SessionClaims)> {
        let claims = SessionClaims::new(user, session_id, self.ttl_hours);

        let token = encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            log::error!("Failed to sign session token: {}", e);
            AppError::InternalError("Failed to create session token".to_string())
        })?;

        Ok((token, claims))
    }

    pub fn validate_token(&self, token: &str) -> AppResult<SessionClaims> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                log::debug!("Rejected session token: {}", e);
                AppError::Unauthenticated
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_jwt_create_and_validate() {
        let config = Config::test_config();
        let jwt_service = JwtService::new(&config.session_secret, 1);

        let user = User::test_user(5, "john@example.com", false);
        let (token, issued) = jwt_service.create_token(&user, "sid-5").unwrap();

        assert!(!token.is_empty());

        let claims = jwt_service.validate_token(&token).unwrap();
        assert_eq!(claims.user_id(), Some(5));
        assert_eq!(claims.sid, "sid-5");
        assert_eq!(claims.exp, issued.exp);
    }

    #[test]
    fn test_jwt_invalid_token() {
        let config = Config::test_config();
        let jwt_service = JwtService::new(&config.session_secret, 1);

        let result = jwt_service.validate_token("invalid.token.here");
        assert!(matches!(result, Err(AppError::Unauthenticated)));
    }

    #[test]
    fn test_jwt_rejects_token_signed_with_other_secret() {
        let user = User::test_user(5, "john@example.com", false);
        let other = JwtService::new(&SecretString::from("another-secret".to_string()), 1);
        let (token, _) = other.create_token(&user, "sid").unwrap();

        let config = Config::test_config();
        let jwt_service = JwtService::new(&config.session_secret, 1);
        assert!(jwt_service.validate_token(&token).is_err());
    }
}
