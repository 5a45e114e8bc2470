use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Payloads served by the fixed endpoints. Road search answers are built
/// from `routes` plus the echoed query.
#[derive(Clone, Debug)]
pub struct Fixtures {
    pub user: Value,
    pub map_info: Value,
    pub traffic: Value,
    pub weather: Value,
    pub routes: Value,
}

impl Default for Fixtures {
    fn default() -> Self {
        Self {
            user: json!({"id": 1, "name": "Demo Driver", "home": "Station A"}),
            map_info: json!({"center": {"lat": 37.5665, "lng": 126.978}, "zoom": 12}),
            traffic: json!({"segments": [
                {"road": "Ring Road", "congestion": "heavy"},
                {"road": "River Drive", "congestion": "light"}
            ]}),
            weather: json!({"condition": "rain", "temperature_c": 14.5}),
            routes: json!([
                {"via": "Ring Road", "minutes": 23},
                {"via": "River Drive", "minutes": 31}
            ]),
        }
    }
}

pub type Shared = Arc<Fixtures>;

pub fn app() -> Router {
    app_with(Fixtures::default())
}

pub fn app_with(fixtures: Fixtures) -> Router {
    Router::new()
        .route("/user", get(user))
        .route("/map/info", get(map_info))
        .route("/map/traffic", get(traffic))
        .route("/map/weather", get(weather))
        .route("/road", get(search_road))
        .with_state(Arc::new(fixtures))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, Fixtures::default()).await
}

pub async fn serve(listener: TcpListener, fixtures: Fixtures) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(fixtures)).await
}

async fn user(State(fixtures): State<Shared>) -> Json<Value> {
    info!("GET /user");
    Json(fixtures.user.clone())
}

async fn map_info(State(fixtures): State<Shared>) -> Json<Value> {
    info!("GET /map/info");
    Json(fixtures.map_info.clone())
}

async fn traffic(State(fixtures): State<Shared>) -> Json<Value> {
    info!("GET /map/traffic");
    Json(fixtures.traffic.clone())
}

async fn weather(State(fixtures): State<Shared>) -> Json<Value> {
    info!("GET /map/weather");
    Json(fixtures.weather.clone())
}

async fn search_road(
    State(fixtures): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let (Some(from), Some(to)) = (params.get("from"), params.get("to")) else {
        warn!(?params, "road search without from/to");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "query parameters `from` and `to` are required"})),
        ));
    };
    info!(%from, %to, "GET /road");
    Ok(Json(json!({
        "from": from,
        "to": to,
        "routes": fixtures.routes.clone(),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fixtures_are_objects_or_arrays() {
        let f = Fixtures::default();
        for value in [&f.user, &f.map_info, &f.traffic, &f.weather] {
            assert!(value.is_object());
        }
        assert!(f.routes.is_array());
    }

    #[test]
    fn default_user_has_identity() {
        let f = Fixtures::default();
        assert_eq!(f.user["id"], 1);
        assert_eq!(f.user["name"], "Demo Driver");
    }
}
