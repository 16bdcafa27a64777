// JWT token generation and validation service

use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::auth::error::AuthError;

/// Default access token lifetime in minutes
pub const DEFAULT_ACCESS_TOKEN_MINUTES: i64 = 30;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // username
    pub iat: i64,    // issued at timestamp
    pub exp: i64,    // expiration timestamp
}

/// Token service for JWT operations (HS256)
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_duration: i64, // in seconds
}

impl TokenService {
    /// Create a TokenService whose access tokens live for `access_token_minutes`
    pub fn new(secret: &str, access_token_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_duration: access_token_minutes * 60,
        }
    }

    /// Generate an access token for `username`, issued now
    pub fn generate_access_token(&self, username: &str) -> Result<String, AuthError> {
        self.generate_access_token_at(username, Utc::now().timestamp())
    }

    /// Generate an access token with an explicit issue time
    pub fn generate_access_token_at(
        &self,
        username: &str,
        issued_at: i64,
    ) -> Result<String, AuthError> {
        let claims = Claims {
            sub: username.to_string(),
            iat: issued_at,
            exp: issued_at + self.access_token_duration,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenGenerationError(e.to_string()))
    }

    /// Validate signature and expiry, returning the typed claims
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => AuthError::InvalidToken,
            })?;

        if claims.sub.is_empty() {
            return Err(AuthError::InvalidToken);
        }
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_token_service() -> TokenService {
        TokenService::new("test_secret_key_for_testing_purposes", DEFAULT_ACCESS_TOKEN_MINUTES)
    }

    #[test]
    fn test_access_token_expiration_is_30_minutes() {
        let service = test_token_service();
        let token = service.generate_access_token("manager").unwrap();
        let claims = service.validate_access_token(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, 1800);
        assert_eq!(claims.sub, "manager");
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = test_token_service();
        let issued = Utc::now().timestamp() - 3600;
        let token = service.generate_access_token_at("manager", issued).unwrap();

        assert!(matches!(
            service.validate_access_token(&token),
            Err(AuthError::ExpiredToken)
        ));
    }

    #[test]
    fn test_malformed_tokens_are_rejected() {
        let service = test_token_service();

        for token in [
            "",
            "not.a.token",
            "invalid_token_format",
            "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.invalid.signature",
        ] {
            assert!(matches!(
                service.validate_access_token(token),
                Err(AuthError::InvalidToken)
            ));
        }
    }

    #[test]
    fn test_token_signature_verification() {
        let service1 = TokenService::new("secret1", 30);
        let service2 = TokenService::new("secret2", 30);

        let token = service1.generate_access_token("employee").unwrap();
        assert!(service1.validate_access_token(&token).is_ok());
        assert!(matches!(
            service2.validate_access_token(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_empty_subject_is_rejected() {
        let service = test_token_service();
        let token = service.generate_access_token("").unwrap();
        assert!(matches!(
            service.validate_access_token(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_custom_lifetime() {
        let service = TokenService::new("secret", 5);
        let issued_at = chrono::Utc::now().timestamp();
        let token = service.generate_access_token_at("manager", issued_at).unwrap();
        let claims = service.validate_access_token(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 300);
    }

    proptest! {
        #[test]
        fn prop_claims_round_trip_username(username in "[a-z][a-z0-9_]{2,20}") {
            let service = test_token_service();
            let token = service.generate_access_token(&username)?;
            let claims = service.validate_access_token(&token)?;
            prop_assert_eq!(claims.sub, username);
            prop_assert_eq!(claims.exp - claims.iat, 1800);
        }

        #[test]
        fn prop_random_strings_rejected(malformed in "[a-zA-Z0-9]{10,50}") {
            let service = test_token_service();
            prop_assert!(service.validate_access_token(&malformed).is_err());
        }
    }
}
