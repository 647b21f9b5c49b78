//! - `GET /journals`: the caller's entries, newest first
//! - `POST /journals`: create and score an entry
//! - `GET /journals/:id`: one entry with its score
//! - `GET /journals/:id/score`: score only

use crate::api::middleware::AuthUser;
use crate::api::{reject_body, AppState};
use crate::domain::model::{JournalEntry, JournalScore};
use crate::utils::error::{JournalError, Result};
use crate::utils::validation::require_field;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateJournalRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JournalScoreResponse {
    pub journal_id: i64,
    pub score: JournalScore,
}

#[derive(Debug, Serialize)]
pub struct JournalResponse {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<JournalScore>,
}

pub async fn list_journals(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<JournalEntry>>> {
    let entries = state.journals.list(user.user_id).await?;
    Ok(Json(entries))
}

pub async fn create_journal(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: std::result::Result<Json<CreateJournalRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<JournalScoreResponse>)> {
    let Json(request) =
        payload.map_err(|rejection| reject_body(rejection, "No input data provided"))?;
    let text = require_field("text", &request.text)?;

    let (entry, score) = state.journals.create(user.user_id, text).await?;
    Ok((
        StatusCode::CREATED,
        Json(JournalScoreResponse {
            journal_id: entry.id,
            score,
        }),
    ))
}

pub async fn get_journal(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    journal_id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<JournalResponse>> {
    let journal_id = journal_id_from(journal_id)?;
    let scored = state.journals.get(user.user_id, journal_id).await?;
    Ok(Json(JournalResponse {
        id: scored.entry.id,
        text: scored.entry.text,
        created_at: scored.entry.created_at,
        score: scored.score,
    }))
}

pub async fn get_journal_score(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    journal_id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<JournalScoreResponse>> {
    let journal_id = journal_id_from(journal_id)?;
    let score = state.journals.get_score(user.user_id, journal_id).await?;
    Ok(Json(JournalScoreResponse { journal_id, score }))
}

/// An id that is not an integer cannot name a journal, so it reads as not found.
fn journal_id_from(path: std::result::Result<Path<i64>, PathRejection>) -> Result<i64> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!("rejected journal id: {}", rejection.body_text());
        JournalError::NotFoundError {
            message: "Journal not found or unauthorized".to_string(),
        }
    })
}
