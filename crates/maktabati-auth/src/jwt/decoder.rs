//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use maktabati_core::config::auth::AuthConfig;
use maktabati_core::error::AppError;

use super::claims::Claims;

/// Validates bearer tokens issued by the external identity provider.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;
        if !config.issuer.is_empty() {
            validation.set_issuer(&[config.issuer.as_str()]);
        }

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    ///
    /// Checks signature validity and expiration; every failure maps to an
    /// unauthorized error so the API layer answers 401 uniformly.
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::unauthorized("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::unauthorized("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthorized("Invalid token signature")
                    }
                    _ => AppError::unauthorized(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use uuid::Uuid;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            issuer: String::new(),
            leeway_seconds: 5,
        }
    }

    fn sign(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_decode_valid_token() {
        let decoder = JwtDecoder::new(&config());
        let user_id = Uuid::new_v4();
        let now = Utc::now().timestamp();
        let token = sign(
            &Claims {
                sub: user_id,
                email: Some("user@example.com".to_string()),
                iat: now,
                exp: now + 3600,
            },
            "test-secret",
        );

        let claims = decoder.decode_token(&token).unwrap();
        assert_eq!(claims.user_id(), user_id);
    }

    #[test]
    fn test_reject_bad_signature() {
        let decoder = JwtDecoder::new(&config());
        let now = Utc::now().timestamp();
        let token = sign(
            &Claims {
                sub: Uuid::new_v4(),
                email: None,
                iat: now,
                exp: now + 3600,
            },
            "other-secret",
        );

        assert!(decoder.decode_token(&token).is_err());
    }

    #[test]
    fn test_reject_expired_token() {
        let decoder = JwtDecoder::new(&config());
        let now = Utc::now().timestamp();
        let token = sign(
            &Claims {
                sub: Uuid::new_v4(),
                email: None,
                iat: now - 7200,
                exp: now - 3600,
            },
            "test-secret",
        );

        assert!(decoder.decode_token(&token).is_err());
    }
}
