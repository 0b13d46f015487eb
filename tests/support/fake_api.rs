//! A local stand-in for The Odds API v4.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const API_KEY: &str = "test-key";

#[derive(Default)]
struct FakeState {
    events: HashMap<String, Value>,
    odds: HashMap<String, Value>,
    queries: Mutex<Vec<HashMap<String, String>>>,
}

pub struct FakeOddsApi {
    pub base_url: String,
    state: Arc<FakeState>,
    handle: JoinHandle<()>,
}

impl FakeOddsApi {
    /// Every query string received by the event-odds endpoint.
    pub fn odds_queries(&self) -> Vec<HashMap<String, String>> {
        self.state.queries.lock().unwrap().clone()
    }
}

impl Drop for FakeOddsApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub struct FakeOddsApiBuilder {
    state: FakeState,
}

impl FakeOddsApiBuilder {
    pub fn new() -> Self {
        Self {
            state: FakeState::default(),
        }
    }

    pub fn events(mut self, sport: &str, events: Value) -> Self {
        self.state.events.insert(sport.to_string(), events);
        self
    }

    pub fn odds(mut self, event_id: &str, odds: Value) -> Self {
        self.state.odds.insert(event_id.to_string(), odds);
        self
    }

    pub async fn spawn(self) -> FakeOddsApi {
        let state = Arc::new(self.state);
        let app = Router::new()
            .route("/v4/sports/:sport/odds/", get(list_events))
            .route("/v4/sports/:sport/events/:id/odds", get(event_odds))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        FakeOddsApi {
            base_url: format!("http://{addr}/v4"),
            state,
            handle,
        }
    }
}

fn quota_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("x-requests-remaining", HeaderValue::from_static("499"));
    headers
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "API key is not valid" })),
    )
        .into_response()
}

async fn list_events(
    State(state): State<Arc<FakeState>>,
    Path(sport): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if query.get("apiKey").map(String::as_str) != Some(API_KEY) {
        return unauthorized();
    }
    let events = state.events.get(&sport).cloned().unwrap_or_else(|| json!([]));
    (quota_headers(), Json(events)).into_response()
}

async fn event_odds(
    State(state): State<Arc<FakeState>>,
    Path((_sport, id)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if query.get("apiKey").map(String::as_str) != Some(API_KEY) {
        return unauthorized();
    }
    state.queries.lock().unwrap().push(query);
    match state.odds.get(&id) {
        Some(odds) => (quota_headers(), Json(odds.clone())).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Event not found" })),
        )
            .into_response(),
    }
}

/// Listing entry for an event.
pub fn event_summary(id: &str) -> Value {
    json!({
        "id": id,
        "sport_key": "basketball_nba",
        "commence_time": "2024-01-15T00:10:00Z",
        "home_team": format!("{id} Home"),
        "away_team": format!("{id} Away"),
        "bookmakers": []
    })
}

/// Event odds where each bookmaker quotes the home team's moneyline and
/// one player prop.
pub fn event_odds_body(id: &str, prices: &[(&str, i64)]) -> Value {
    let bookmakers: Vec<Value> = prices
        .iter()
        .map(|(key, price)| {
            json!({
                "key": key,
                "title": key,
                "last_update": "2024-01-14T20:00:00Z",
                "markets": [
                    {
                        "key": "h2h",
                        "outcomes": [{ "name": format!("{id} Home"), "price": price }]
                    },
                    {
                        "key": "player_points",
                        "outcomes": [{
                            "name": "Over",
                            "description": "Jayson Tatum",
                            "price": -115,
                            "point": 27.5
                        }]
                    }
                ]
            })
        })
        .collect();

    json!({
        "id": id,
        "sport_key": "basketball_nba",
        "commence_time": "2024-01-15T00:10:00Z",
        "home_team": format!("{id} Home"),
        "away_team": format!("{id} Away"),
        "bookmakers": bookmakers
    })
}
