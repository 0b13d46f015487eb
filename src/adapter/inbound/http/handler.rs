//! Request handlers.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use super::server::HttpState;
use crate::domain::{BookmakerKey, Criteria, Offer};

/// Optional per-request overrides of the configured criteria.
#[derive(Debug, Default, Deserialize)]
pub struct OffersQuery {
    pub bookmaker: Option<String>,
    pub max_price: Option<i64>,
    pub min_competitors: Option<usize>,
    pub limit: Option<usize>,
}

impl OffersQuery {
    fn criteria(&self, base: &Criteria) -> Criteria {
        Criteria {
            bookmaker: self
                .bookmaker
                .as_deref()
                .map(BookmakerKey::from)
                .unwrap_or_else(|| base.bookmaker.clone()),
            max_price: self.max_price.unwrap_or(base.max_price),
            min_competitors: self.min_competitors.unwrap_or(base.min_competitors),
            limit: self.limit.unwrap_or(base.limit),
        }
    }
}

/// Error body `{"error": message}` with a status code.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, err: impl std::fmt::Display) -> Self {
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /offers`
pub async fn offers(
    State(state): State<Arc<HttpState>>,
    Query(query): Query<OffersQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let criteria = query.criteria(&state.criteria);
    let report = state.scanner.scan(&criteria).await.map_err(|e| {
        warn!(error = %e, "Scan failed");
        ApiError::new(StatusCode::BAD_GATEWAY, e)
    })?;

    Ok(Json(json!({ "results": report.offers })))
}

/// `POST /bets`
pub async fn record_bet(
    State(state): State<Arc<HttpState>>,
    Json(offer): Json<Offer>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let id = state.recorder.record(&offer).await.map_err(|e| {
        warn!(event = %offer.event_id, error = %e, "Failed to record bet");
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, e)
    })?;

    info!(bet = %id, "Bet recorded via HTTP");
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_overrides_only_given_fields() {
        let base = Criteria::default();
        let query = OffersQuery {
            max_price: Some(150),
            limit: Some(3),
            ..OffersQuery::default()
        };

        let criteria = query.criteria(&base);
        assert_eq!(criteria.bookmaker, base.bookmaker);
        assert_eq!(criteria.max_price, 150);
        assert_eq!(criteria.min_competitors, base.min_competitors);
        assert_eq!(criteria.limit, 3);
    }
}
