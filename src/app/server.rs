use crate::adapters::SqliteStore;
use crate::api::{build_router, AppState};
use crate::config::DEFAULT_JWT_SECRET;
use crate::core::lexicon::LexiconStore;
use crate::core::token::TokenService;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// 組裝好的服務：詞庫在建構時載入完成，之後只讀
pub struct JournalServer {
    bind_addr: String,
    state: AppState,
}

impl JournalServer {
    pub async fn from_config(config: &dyn ConfigProvider) -> Result<Self> {
        let lexicon = Arc::new(LexiconStore::from_seeds(&config.lexicon_seed())?);
        tracing::info!(
            "📚 Lexicon loaded: {} categories, {} words",
            lexicon.len(),
            lexicon.word_count()
        );

        let store = Arc::new(SqliteStore::connect(config.database_url()).await?);
        tracing::info!("🗄️  Database ready at {}", config.database_url());

        if config.jwt_secret() == DEFAULT_JWT_SECRET {
            tracing::warn!("⚠️  Using the default JWT secret; set SECRET_KEY outside development");
        }
        let tokens =
            TokenService::from_secret(config.jwt_secret().as_bytes(), config.token_ttl_secs());

        Ok(Self {
            bind_addr: config.bind_addr().to_string(),
            state: AppState::new(store.clone(), store, lexicon, tokens),
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// 綁定位址並持續服務，直到收到 Ctrl-C
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(&self.bind_addr).await?;
        tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("👋 Server stopped");
        Ok(())
    }
}

/// Resolves on Ctrl-C, or on SIGTERM where the platform has it.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("🛑 Ctrl-C received, shutting down"),
        _ = terminate => tracing::info!("🛑 SIGTERM received, shutting down"),
    }
}
