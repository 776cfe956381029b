//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::LookupOutcome;

use super::dto::*;
use super::state::AppState;

/// Response header naming where the records came from.
const SOURCE_HEADER: &str = "x-directory-source";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/", get(root))
        .route("/api/health", get(health))
        .route("/api/radio/stations/popular", get(popular_stations))
        .route("/api/radio/stations/search", get(search_stations))
        .route("/api/radio/countries", get(countries))
        .route(
            "/api/radio/stations/:station_uuid/click",
            post(register_click),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hello World",
    })
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Most-voted stations.
async fn popular_stations(
    State(state): State<AppState>,
    Query(req): Query<PopularStationsRequest>,
) -> Result<Response, AppError> {
    let limit = parse_limit(req.limit.as_deref())
        .map_err(|message| AppError::BadRequest { message })?;
    let outcome = state.directory.popular_stations(limit).await;
    Ok(records_response(outcome))
}

/// Search stations by name and/or country.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<SearchStationsRequest>,
) -> Result<Response, AppError> {
    let search = req
        .into_search()
        .map_err(|message| AppError::BadRequest { message })?;
    let outcome = state.directory.search_stations(&search).await;
    Ok(records_response(outcome))
}

/// Countries with station counts.
async fn countries(State(state): State<AppState>) -> Response {
    records_response(state.directory.countries().await)
}

/// Register a click for a station. Always succeeds.
async fn register_click(
    State(state): State<AppState>,
    Path(station_uuid): Path<String>,
) -> Result<Response, AppError> {
    let station_uuid = station_uuid.trim();
    if station_uuid.is_empty() {
        return Err(AppError::BadRequest {
            message: "station id must not be empty".to_string(),
        });
    }

    let receipt = state.directory.register_click(station_uuid).await;
    Ok(Json(receipt).into_response())
}

async fn not_found() -> AppError {
    AppError::NotFound {
        message: "no such endpoint".to_string(),
    }
}

/// Serialize records as a bare JSON array, with their provenance in a header.
fn records_response<T: Serialize>(outcome: LookupOutcome<T>) -> Response {
    let source = outcome.provenance().label();
    ([(SOURCE_HEADER, source)], Json(outcome.into_records())).into_response()
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
