//! Request handlers for the health check and report generation routes.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use maintenance_report::{ReportBuilder, ReportRequest, ReportResponse};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::error::ApiError;

fn payload_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| format!("<unserializable payload: {err}>"))
}

/// Liveness check.
pub async fn health() -> Json<Value> {
    Json(json!({ "Hello": "World" }))
}

/// Validates the request body, renders the report and returns where it was saved.
pub async fn generate(
    State(builder): State<Arc<ReportBuilder>>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<Json<ReportResponse>, ApiError> {
    let Json(request) = payload?;
    info!("Received request payload: {}", payload_json(&request));

    let path = tokio::task::spawn_blocking(move || builder.save(&request)).await??;

    let response = ReportResponse::success(path.display().to_string());
    info!("Sending response payload: {}", payload_json(&response));
    Ok(Json(response))
}
