use crate::api::AppState;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub categories: Vec<String>,
    pub words: usize,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let lexicon = state.journals.analyzer().lexicon();
    Json(HealthResponse {
        status: "ok",
        categories: lexicon.names().into_iter().map(String::from).collect(),
        words: lexicon.word_count(),
    })
}
