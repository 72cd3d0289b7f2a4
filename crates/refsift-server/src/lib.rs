//! HTTP service wrapping the refsift core.
//!
//! Implements the three-step flow: upload a reference file plus one or more
//! data files, choose a column on each side, download the missing and
//! existing record sets as CSV. All table logic lives in the core crates;
//! this crate only moves bytes, renders pages, and maps error kinds to
//! status codes.

mod config;
mod error;
mod handlers;
mod pages;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use refsift_session::SessionStore;

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SessionStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }
}

/// Build the application router.
pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::upload_page).post(handlers::upload))
        .route("/process", post(handlers::process))
        .route("/download/missing", get(handlers::download_missing))
        .route("/download/existing", get(handlers::download_existing))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: ServerConfig, store: Arc<dyn SessionStore>) -> anyhow::Result<()> {
    let app = build_router(AppState::new(store), config.max_upload_bytes);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "refsift listening");
    axum::serve(listener, app).await?;
    Ok(())
}
