//! HTTP surface: router, shared state, auth middleware, error mapping.

pub mod error;
pub mod handlers;
pub mod middleware;

use crate::core::analyzer::TextAnalyzer;
use crate::core::auth::AuthService;
use crate::core::journal::JournalService;
use crate::core::lexicon::LexiconStore;
use crate::core::token::TokenService;
use crate::domain::ports::{JournalRepository, UserRepository};
use crate::utils::error::JournalError;
use axum::extract::rejection::JsonRejection;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared by every handler; cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub journals: JournalService,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        journals: Arc<dyn JournalRepository>,
        lexicon: Arc<LexiconStore>,
        tokens: TokenService,
    ) -> Self {
        Self {
            auth: AuthService::new(users, tokens),
            journals: JournalService::new(journals, TextAnalyzer::new(lexicon)),
        }
    }
}

/// Build the full axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    // Routes that require a bearer token
    let protected = Router::new()
        .route(
            "/journals",
            get(handlers::journals::list_journals).post(handlers::journals::create_journal),
        )
        .route("/journals/:id", get(handlers::journals::get_journal))
        .route(
            "/journals/:id/score",
            get(handlers::journals::get_journal_score),
        )
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::require_auth,
        ));

    // Public routes (no auth)
    let public = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/users", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    public
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Turns an unreadable request body into a 400 carrying `message`.
pub(crate) fn reject_body(rejection: JsonRejection, message: &str) -> JournalError {
    tracing::debug!("rejected request body: {}", rejection.body_text());
    JournalError::BadRequestError {
        message: message.to_string(),
    }
}
