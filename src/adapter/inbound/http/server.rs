//! Router and listener.

use std::future::Future;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use super::handler;
use crate::application::{BetRecorder, OfferScanner};
use crate::domain::Criteria;
use crate::error::Result;

/// Shared state behind every request.
pub struct HttpState {
    pub scanner: OfferScanner,
    pub recorder: BetRecorder,
    /// Criteria used when a request carries no overrides.
    pub criteria: Criteria,
}

impl HttpState {
    #[must_use]
    pub fn new(scanner: OfferScanner, recorder: BetRecorder, criteria: Criteria) -> Self {
        Self {
            scanner,
            recorder,
            criteria,
        }
    }
}

/// Build the application router. CORS allows any origin.
pub fn router(state: Arc<HttpState>) -> Router {
    Router::new()
        .route("/health", get(handler::health))
        .route("/offers", get(handler::offers))
        .route("/bets", post(handler::record_bet))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve until `shutdown` resolves.
///
/// # Errors
/// Returns an error if the server fails while accepting connections.
pub async fn serve<F>(listener: TcpListener, state: Arc<HttpState>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(addr = %addr, "HTTP server listening");
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("HTTP server stopped");
    Ok(())
}
