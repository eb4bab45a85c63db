//! HTTP server for the card endpoints
//!
//! # Routes
//!
//! - `GET /ping`, `GET /health` - liveness probes
//! - `GET /error` - always answers 400, for exercising error handling end to end
//! - `GET /languages?username=&format=` - top languages card (or JSON with `format=json`)
//! - `GET /stats?username=&format=` - contribution stats card (or JSON)
//! - `GET /skills?skills=a,b,c&format=` - skills card from a comma-separated list (or JSON)
//! - `POST /skills` - skills card from a JSON array of labels or `{name, color}` objects
//! - `GET /metrics` - Prometheus text exposition
//!
//! Cards are served as `image/svg+xml` with a `Cache-Control` max-age equal to
//! the cache TTL. Failures answer `{"error": "..."}` with a status derived from
//! [`CardsError::status_code`].

use crate::cards::{self, SkillEntry};
use crate::profile::ProfileService;
use crate::{metrics, CardsError, Result};
use axum::{
    body::Body,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{header, Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

const SVG_CONTENT_TYPE: &str = "image/svg+xml; charset=utf-8";
const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Shared server state
pub struct AppState {
    service: Arc<ProfileService>,
}

impl AppState {
    /// `max-age` advertised on card responses
    fn max_age(&self) -> u64 {
        self.service.cache().ttl().as_secs()
    }
}

/// HTTP server rendering cards from cached GitHub aggregates
pub struct CardsServer {
    state: Arc<AppState>,
}

impl CardsServer {
    pub fn new(service: Arc<ProfileService>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
        }
    }

    /// Build the router with request logging and permissive CORS
    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    /// Run the server on the given address until Ctrl-C
    pub async fn run(self, addr: &str) -> Result<()> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| CardsError::Config(format!("Failed to bind {}: {}", addr, e)))?;

        info!(
            addr = addr,
            cache_ttl_secs = self.state.max_age(),
            "Card server listening"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(CardsError::Io)
    }
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/health", get(health))
        .route("/error", get(deliberate_error))
        .route("/languages", get(languages_card))
        .route("/stats", get(stats_card))
        .route("/skills", get(skills_card).post(skills_card_from_body))
        .route("/metrics", get(metrics_text))
        .layer(middleware::from_fn(log_requests))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down card server");
}

/// Request logging middleware
async fn log_requests(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "Handled request"
    );
    response
}

// ============================================================================
// Request/Response types
// ============================================================================

/// Error body for every failed request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for CardsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(kind = self.kind(), error = %self, "Request failed");
        } else {
            warn!(kind = self.kind(), error = %self, "Request rejected");
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<JsonRejection> for CardsError {
    fn from(rejection: JsonRejection) -> Self {
        CardsError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for CardsError {
    fn from(rejection: QueryRejection) -> Self {
        CardsError::BadRequest(rejection.body_text())
    }
}

/// Query for the per-user cards
#[derive(Debug, Default, Deserialize)]
pub struct CardQuery {
    pub username: Option<String>,
    pub format: Option<String>,
}

/// Query for the skills card
#[derive(Debug, Default, Deserialize)]
pub struct SkillsQuery {
    pub skills: Option<String>,
    pub format: Option<String>,
}

/// Resolved skill, as returned by `GET /skills?format=json`
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillDto {
    pub name: String,
    pub key: String,
    pub label: String,
    pub from: String,
    pub to: String,
    pub icon: bool,
}

impl From<&SkillEntry> for SkillDto {
    fn from(entry: &SkillEntry) -> Self {
        let style = cards::resolve_skill(entry);
        Self {
            name: entry.name.trim().to_string(),
            key: style.key,
            label: style.label,
            from: style.gradient.from,
            to: style.gradient.to,
            icon: matches!(style.marker, cards::skills::Marker::Icon(_)),
        }
    }
}

fn wants_json(format: Option<&str>) -> bool {
    format.is_some_and(|f| f.trim().eq_ignore_ascii_case("json"))
}

fn svg_response(state: &AppState, card: &str, svg: String) -> Response {
    metrics::record_card_rendered(card);
    (
        [
            (header::CONTENT_TYPE, SVG_CONTENT_TYPE.to_string()),
            (
                header::CACHE_CONTROL,
                format!("public, max-age={}", state.max_age()),
            ),
        ],
        svg,
    )
        .into_response()
}

// ============================================================================
// Handlers
// ============================================================================

async fn ping() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "pong" }))
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn deliberate_error() -> impl IntoResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "This is a custom error message".to_string(),
        }),
    )
}

async fn languages_card(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<CardQuery>, QueryRejection>,
) -> Result<Response> {
    let Query(query) = query?;
    let username = state.service.resolve_username(query.username.as_deref())?;
    let languages = state.service.fetch_aggregated_languages(&username).await?;

    if wants_json(query.format.as_deref()) {
        return Ok(Json(languages).into_response());
    }
    Ok(svg_response(
        &state,
        "languages",
        cards::render_languages_card(&languages),
    ))
}

async fn stats_card(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<CardQuery>, QueryRejection>,
) -> Result<Response> {
    let Query(query) = query?;
    let username = state.service.resolve_username(query.username.as_deref())?;
    let stats = state.service.fetch_aggregated_stats(&username).await?;

    if wants_json(query.format.as_deref()) {
        return Ok(Json(stats).into_response());
    }
    Ok(svg_response(&state, "stats", cards::render_stats_card(&stats)))
}

async fn skills_card(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<SkillsQuery>, QueryRejection>,
) -> Result<Response> {
    let Query(query) = query?;
    let skills = SkillEntry::parse_list(query.skills.as_deref().unwrap_or_default());

    if wants_json(query.format.as_deref()) {
        let dtos: Vec<SkillDto> = skills.iter().map(SkillDto::from).collect();
        return Ok(Json(dtos).into_response());
    }
    Ok(svg_response(&state, "skills", cards::render_skills_card(&skills)))
}

async fn skills_card_from_body(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<Vec<SkillEntry>>, JsonRejection>,
) -> Result<Response> {
    let Json(skills) = body?;
    Ok(svg_response(&state, "skills", cards::render_skills_card(&skills)))
}

async fn metrics_text() -> Result<Response> {
    let body = metrics::encode_metrics()?;
    Ok(([(header::CONTENT_TYPE, METRICS_CONTENT_TYPE)], body).into_response())
}
