//! HS256 access tokens.

use crate::utils::error::{JournalError, Result};
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id, as a string.
    pub sub: String,
    pub username: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// The numeric user id carried in `sub`.
    pub fn user_id(&self) -> Result<i64> {
        self.sub
            .parse()
            .map_err(|_| JournalError::InvalidIdentityError)
    }
}

#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    pub fn from_secret(secret: &[u8], ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
            ttl_secs: i64::try_from(ttl_secs).unwrap_or(i64::MAX),
        }
    }

    pub fn issue(&self, user_id: i64, username: &str, email: &str) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now.saturating_add(self.ttl_secs),
        };
        self.encode(&claims)
    }

    pub fn encode(&self, claims: &Claims) -> Result<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding).map_err(|e| {
            JournalError::InternalError {
                message: format!("failed to sign access token: {}", e),
            }
        })
    }

    pub fn verify(&self, token: &str) -> Result<Claims> {
        match decode::<Claims>(token, &self.decoding, &self.validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => match e.kind() {
                ErrorKind::ExpiredSignature => Err(JournalError::TokenExpiredError {
                    subject: self
                        .expired_subject(token)
                        .unwrap_or_else(|| "unknown".to_string()),
                }),
                _ => Err(JournalError::InvalidTokenError {
                    details: e.to_string(),
                }),
            },
        }
    }

    /// `sub` of a correctly signed token whose only problem is its age.
    fn expired_subject(&self, token: &str) -> Option<String> {
        let mut validation = self.validation.clone();
        validation.validate_exp = false;
        decode::<Claims>(token, &self.decoding, &validation)
            .ok()
            .map(|data| data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key";

    #[test]
    fn test_issue_and_verify() {
        let tokens = TokenService::from_secret(SECRET, 3600);
        let token = tokens.issue(42, "testuser", "test@example.com").unwrap();

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.user_id().unwrap(), 42);
        assert_eq!(claims.username, "testuser");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = TokenService::from_secret(SECRET, 3600)
            .issue(1, "a", "a@example.com")
            .unwrap();

        let err = TokenService::from_secret(b"other", 3600)
            .verify(&token)
            .unwrap_err();
        assert!(matches!(err, JournalError::InvalidTokenError { .. }));
    }

    #[test]
    fn test_expired_token() {
        let tokens = TokenService::from_secret(SECRET, 3600);
        let now = Utc::now().timestamp();
        let token = tokens
            .encode(&Claims {
                sub: "7".to_string(),
                username: "old".to_string(),
                email: "old@example.com".to_string(),
                iat: now - 7200,
                exp: now - 3600,
            })
            .unwrap();

        let err = tokens.verify(&token).unwrap_err();
        assert!(matches!(err, JournalError::TokenExpiredError { ref subject } if subject == "7"));
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let tokens = TokenService::from_secret(SECRET, 3600);
        assert!(matches!(
            tokens.verify("not.a.jwt").unwrap_err(),
            JournalError::InvalidTokenError { .. }
        ));
    }

    #[test]
    fn test_non_numeric_subject() {
        let claims = Claims {
            sub: "alice".to_string(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            iat: 0,
            exp: 0,
        };
        assert!(matches!(
            claims.user_id().unwrap_err(),
            JournalError::InvalidIdentityError
        ));
    }
}
