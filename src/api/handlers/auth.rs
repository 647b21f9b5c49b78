//! - `POST /users`: register
//! - `POST /login`: exchange credentials for an access token

use crate::api::{reject_body, AppState};
use crate::core::auth::Registration;
use crate::utils::error::{JournalError, Result};
use crate::utils::validation::{require_field, validate_email, validate_not_blank};
use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl RegisterRequest {
    fn into_registration(self) -> Result<Registration> {
        let username = require_field("username", &self.username)?;
        validate_not_blank("username", username)?;
        let email = require_field("email", &self.email)?;
        validate_email("email", email)?;
        let password = require_field("password", &self.password)?;
        validate_not_blank("password", password)?;

        Ok(Registration {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub access_token: String,
    pub user_id: i64,
    pub username: String,
}

/// Parses the body as JSON whatever its `Content-Type`; an empty object counts as no data.
fn parse_register_body(body: &[u8]) -> Result<RegisterRequest> {
    let invalid = || JournalError::BadRequestError {
        message: "Request must be valid JSON with Content-Type: application/json".to_string(),
    };

    let value: serde_json::Value = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("unreadable registration body: {}", e);
        invalid()
    })?;
    match &value {
        serde_json::Value::Object(fields) if !fields.is_empty() => {}
        _ => return Err(invalid()),
    }
    serde_json::from_value(value).map_err(|e| {
        tracing::debug!("malformed registration body: {}", e);
        invalid()
    })
}

pub async fn register(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<RegisterResponse>)> {
    let registration = parse_register_body(&body)?.into_registration()?;

    let user_id = state.auth.register(registration).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created successfully",
            user_id,
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    let Json(request) =
        payload.map_err(|rejection| reject_body(rejection, "No input data provided"))?;
    let username = require_field("username", &request.username)?;
    let password = require_field("password", &request.password)?;

    let outcome = state.auth.login(username, password).await?;

    Ok(Json(LoginResponse {
        message: "Login successful",
        access_token: outcome.access_token,
        user_id: outcome.user_id,
        username: outcome.username,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_body_is_parsed_as_json() {
        let request =
            parse_register_body(br#"{"username": "alex", "email": "alex@example.com"}"#).unwrap();
        assert_eq!(request.username.as_deref(), Some("alex"));
        assert!(request.password.is_none());
    }

    #[test]
    fn test_unusable_register_bodies_are_rejected() {
        for body in [&b""[..], b"not json", b"{}", b"[1, 2]", b"null"] {
            let err = parse_register_body(body).unwrap_err();
            assert!(matches!(err, JournalError::BadRequestError { .. }));
        }
    }
}
