//! Maps `JournalError` onto HTTP status codes and JSON bodies.

use crate::utils::error::JournalError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

impl JournalError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            JournalError::InvalidInputError { .. }
            | JournalError::BadRequestError { .. }
            | JournalError::UsernameTakenError
            | JournalError::EmailTakenError => StatusCode::BAD_REQUEST,
            JournalError::InvalidCredentialsError
            | JournalError::MissingTokenError { .. }
            | JournalError::TokenExpiredError { .. }
            | JournalError::InvalidTokenError { .. }
            | JournalError::InvalidIdentityError => StatusCode::UNAUTHORIZED,
            JournalError::NotFoundError { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for JournalError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            JournalError::InvalidInputError { field, message } => json!({
                "message": "Invalid input",
                "errors": { field: [message] },
            }),
            JournalError::BadRequestError { message } | JournalError::NotFoundError { message } => {
                json!({ "message": message })
            }
            JournalError::MissingTokenError { details } => json!({
                "message": "Request does not contain an access token",
                "error": "authorization_required",
                "details": details,
            }),
            JournalError::TokenExpiredError { subject } => json!({
                "message": "The token has expired",
                "error": "token_expired",
                "user_id": subject,
            }),
            JournalError::InvalidTokenError { details } => json!({
                "message": "Signature verification failed",
                "error": "invalid_token",
                "details": details,
            }),
            _ => json!({ "message": self.user_friendly_message() }),
        };

        if status.is_server_error() {
            tracing::error!(
                category = ?self.category(),
                severity = ?self.severity(),
                "request failed: {}",
                self
            );
        } else {
            tracing::debug!(status = status.as_u16(), "request rejected: {}", self);
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            JournalError::UsernameTakenError.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            JournalError::InvalidCredentialsError.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            JournalError::NotFoundError {
                message: "Journal not found or unauthorized".to_string()
            }
            .status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            JournalError::DatabaseError(sqlx::Error::PoolTimedOut).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
