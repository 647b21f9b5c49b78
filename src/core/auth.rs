use crate::core::token::{Claims, TokenService};
use crate::domain::model::NewUser;
use crate::domain::ports::UserRepository;
use crate::utils::error::{JournalError, Result};
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub access_token: String,
    pub user_id: i64,
    pub username: String,
}

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, tokens: TokenService) -> Self {
        Self { users, tokens }
    }

    pub async fn register(&self, registration: Registration) -> Result<i64> {
        if self
            .users
            .find_by_username(&registration.username)
            .await?
            .is_some()
        {
            return Err(JournalError::UsernameTakenError);
        }
        if self
            .users
            .find_by_email(&registration.email)
            .await?
            .is_some()
        {
            return Err(JournalError::EmailTakenError);
        }

        let password = registration.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| JournalError::InternalError {
                message: format!("password hashing task failed: {}", e),
            })??;

        let user_id = self
            .users
            .create_user(NewUser {
                username: registration.username.clone(),
                email: registration.email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id, username = %registration.username, "user registered");
        Ok(user_id)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome> {
        let Some(user) = self.users.find_by_username(username).await? else {
            tracing::debug!(%username, "login for unknown user");
            return Err(JournalError::InvalidCredentialsError);
        };

        let stored = user.password_hash.clone();
        let candidate = password.to_string();
        let matches = tokio::task::spawn_blocking(move || verify_password(&candidate, &stored))
            .await
            .map_err(|e| JournalError::InternalError {
                message: format!("password verification task failed: {}", e),
            })??;

        if !matches {
            tracing::debug!(user_id = user.id, "login with wrong password");
            return Err(JournalError::InvalidCredentialsError);
        }

        let access_token = self.tokens.issue(user.id, &user.username, &user.email)?;
        tracing::info!(user_id = user.id, "user logged in");

        Ok(LoginOutcome {
            access_token,
            user_id: user.id,
            username: user.username,
        })
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        self.tokens.verify(token)
    }
}

pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| JournalError::PasswordHashError {
            message: e.to_string(),
        })
}

/// `Ok(false)` on mismatch; `Err` only when the stored hash is unreadable.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| JournalError::PasswordHashError {
        message: e.to_string(),
    })?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;

    fn service() -> AuthService {
        AuthService::new(
            Arc::new(MemoryStore::new()),
            TokenService::from_secret(b"test_secret_key", 3600),
        )
    }

    fn registration(username: &str, email: &str) -> Registration {
        Registration {
            username: username.to_string(),
            email: email.to_string(),
            password: "password123".to_string(),
        }
    }

    #[test]
    fn test_hash_and_verify_password() {
        let hash = hash_password("password123").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("password123", &hash).unwrap());
        assert!(!verify_password("wrongpassword", &hash).unwrap());
        assert!(verify_password("password123", "not-a-hash").is_err());
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let auth = service();
        let user_id = auth
            .register(registration("loginuser", "login@example.com"))
            .await
            .unwrap();

        let outcome = auth.login("loginuser", "password123").await.unwrap();
        assert_eq!(outcome.user_id, user_id);
        assert_eq!(outcome.username, "loginuser");

        let claims = auth.verify_token(&outcome.access_token).unwrap();
        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.email, "login@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_username_and_email() {
        let auth = service();
        auth.register(registration("duplicate", "first@example.com"))
            .await
            .unwrap();

        let err = auth
            .register(registration("duplicate", "second@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, JournalError::UsernameTakenError));

        let err = auth
            .register(registration("other", "first@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, JournalError::EmailTakenError));
    }

    #[tokio::test]
    async fn test_login_failures_share_one_error() {
        let auth = service();
        auth.register(registration("loginuser2", "login2@example.com"))
            .await
            .unwrap();

        assert!(matches!(
            auth.login("loginuser2", "wrongpassword").await.unwrap_err(),
            JournalError::InvalidCredentialsError
        ));
        assert!(matches!(
            auth.login("nobody", "password123").await.unwrap_err(),
            JournalError::InvalidCredentialsError
        ));
    }
}
