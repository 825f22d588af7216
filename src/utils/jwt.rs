use jiff::Timestamp;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Session token claims
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Admin id
    pub sub: String,
    pub email: String,
    pub username: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiration time (unix seconds)
    pub exp: i64,
}

impl Claims {
    pub fn new(admin_id: i32, email: String, username: String, expiration_hours: i64) -> Self {
        let now = Timestamp::now().as_second();

        Self {
            sub: admin_id.to_string(),
            email,
            username,
            iat: now,
            exp: now.saturating_add(expiration_hours.saturating_mul(3600)),
        }
    }

    /// The admin id carried in `sub`.
    pub fn admin_id(&self) -> AppResult<i32> {
        self.sub
            .parse()
            .map_err(|_| AppError::unauthorized("Invalid token subject"))
    }
}

/// Sign an HS256 session token for an admin.
pub fn issue_session_token(
    admin_id: i32,
    email: String,
    username: String,
    secret: &str,
    expiration_hours: i64,
) -> AppResult<String> {
    let claims = Claims::new(admin_id, email, username, expiration_hours);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal {
        source: anyhow::anyhow!("Failed to generate session token: {}", e),
    })
}

/// Verify signature and expiry of a session token and return its claims.
pub fn validate_session_token(token: &str, secret: &str) -> AppResult<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::unauthorized("Token has expired")
        }
        jsonwebtoken::errors::ErrorKind::InvalidSignature => {
            AppError::unauthorized("Invalid token signature")
        }
        _ => AppError::unauthorized(format!("Token validation failed: {}", e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test_secret_key_for_session_tokens";

    fn token_for(expiration_hours: i64) -> String {
        issue_session_token(
            7,
            "admin@example.com".to_string(),
            "admin".to_string(),
            TEST_SECRET,
            expiration_hours,
        )
        .expect("token should be issued")
    }

    #[test]
    fn test_issue_and_validate() {
        let claims = validate_session_token(&token_for(8), TEST_SECRET).unwrap();

        assert_eq!(claims.sub, "7");
        assert_eq!(claims.admin_id().unwrap(), 7);
        assert_eq!(claims.email, "admin@example.com");
        assert_eq!(claims.username, "admin");
        assert_eq!(claims.exp - claims.iat, 8 * 3600);
    }

    #[test]
    fn test_wrong_secret() {
        match validate_session_token(&token_for(8), "another_secret_key_entirely_000") {
            Err(AppError::Unauthorized { message }) => assert!(message.contains("signature")),
            other => panic!("Expected Unauthorized error, got {:?}", other),
        }
    }

    #[test]
    fn test_expired_token() {
        // Past the default 60s leeway
        match validate_session_token(&token_for(-2), TEST_SECRET) {
            Err(AppError::Unauthorized { message }) => assert!(message.contains("expired")),
            other => panic!("Expected Unauthorized error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_token() {
        assert!(matches!(
            validate_session_token("invalid.token.format", TEST_SECRET),
            Err(AppError::Unauthorized { .. })
        ));
    }

    #[test]
    fn test_oversized_expiration_saturates() {
        let claims = Claims::new(1, "a@b.c".to_string(), "a".to_string(), i64::MAX);
        assert_eq!(claims.exp, i64::MAX);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_non_numeric_subject() {
        let claims = Claims {
            sub: "abc".to_string(),
            ..Claims::new(1, "a@b.c".to_string(), "a".to_string(), 1)
        };
        assert!(claims.admin_id().is_err());
    }
}
