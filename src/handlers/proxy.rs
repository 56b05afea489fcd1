use axum::{extract::State, Json};
use serde_json::Value;

use crate::error::ProxyError;
use crate::models::{AppState, BuildPayload, CreationRequest};
use crate::services::forward_creation;

/// `POST /api/build`: relay `{createOs, createName}` to the creation service.
///
/// Whatever JSON the service returns comes back with 200, including its own
/// `{"error": ...}` replies. Transport and parse failures become 502 `{error}`.
pub async fn build_post(
    State(state): State<AppState>,
    Json(payload): Json<BuildPayload>,
) -> Result<Json<Value>, ProxyError> {
    let request = CreationRequest::from(payload);
    let body = forward_creation(&state, &request).await?;
    Ok(Json(body))
}
