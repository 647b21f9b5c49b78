//! Bearer-token authentication for the journal routes.

use crate::api::AppState;
use crate::utils::error::JournalError;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

/// The caller identity, inserted as a request extension by [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i64,
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, JournalError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| JournalError::MissingTokenError {
            details: "Missing Authorization Header".to_string(),
        })?;

    let token = header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| JournalError::MissingTokenError {
            details: "Missing 'Bearer' type in 'Authorization' header".to_string(),
        })?;

    let claims = state.auth.verify_token(token).inspect_err(|e| {
        if let JournalError::TokenExpiredError { subject } = e {
            tracing::info!(%subject, "expired token");
        }
    })?;
    let user_id = claims.user_id()?;

    req.extensions_mut().insert(AuthUser { user_id });
    Ok(next.run(req).await)
}
