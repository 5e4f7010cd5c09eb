//! Subtrack Web Server
//!
//! Axum-based REST API wrapping the Subtrack analysis engine.
//!
//! The server is a thin transport layer:
//! - JSON request/response framing
//! - CORS (permissive unless origins are configured)
//! - Input validation before the engine runs
//! - `{"detail": ...}` error bodies for engine failures and rejected request bodies

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, warn};

use subtrack_core::AnalysisEngine;

mod extract;
mod handlers;

pub use extract::JsonBody;
/// Largest forecast horizon accepted by default
pub use subtrack_core::analysis::MAX_MONTHS_AHEAD;

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty or "*" = any origin)
    pub allowed_origins: Vec<String>,
    /// Upper bound for `months_ahead` in forecast requests
    pub max_months_ahead: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![],
            max_months_ahead: MAX_MONTHS_AHEAD,
        }
    }
}

/// Shared application state
pub struct AppState {
    pub engine: AnalysisEngine,
    pub config: ServerConfig,
}

/// Parse a comma-separated list of CORS origins
pub fn parse_allowed_origins(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Create the application router
pub fn create_router(engine: AnalysisEngine, config: ServerConfig) -> Router {
    let cors = cors_layer(&config.allowed_origins);
    let state = Arc::new(AppState { engine, config });

    let ai_routes = Router::new()
        .route("/predict-spending", post(handlers::predict_spending))
        .route("/budget-recommendation", post(handlers::budget_recommendation))
        .route("/reminder-suggestions", post(handlers::reminder_suggestions));

    Router::new()
        .route("/", get(handlers::root))
        .nest("/ai", ai_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the server
pub async fn serve(
    host: &str,
    port: u16,
    engine: AnalysisEngine,
    config: ServerConfig,
) -> anyhow::Result<()> {
    if let Some(seed) = engine.seed() {
        warn!(seed, "Forecast variance is pinned to a fixed seed");
    }

    let app = create_router(engine, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "detail": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<subtrack_core::Error> for AppError {
    fn from(err: subtrack_core::Error) -> Self {
        let status = if err.is_content_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let message = err.to_string();
        Self {
            status,
            message,
            internal: (status == StatusCode::INTERNAL_SERVER_ERROR).then(|| err.into()),
        }
    }
}
