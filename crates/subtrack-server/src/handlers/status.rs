//! Service status handler

use axum::Json;
use serde::Serialize;

/// Response for the root status check
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: &'static str,
    pub status: &'static str,
}

/// GET / - Service liveness
pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "Subscription Tracker AI Service",
        status: "running",
    })
}
