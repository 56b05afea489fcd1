use serde_json::Value;

use crate::api::create_instance;
use crate::error::ProxyError;
use crate::models::{AppState, CreationOutcome, CreationRequest};

/// Forward one creation request to the backend and hand back its JSON body untouched.
pub async fn forward_creation(state: &AppState, request: &CreationRequest) -> Result<Value, ProxyError> {
    tracing::info!(os = %request.os, name = %request.name, backend = %state.backend_url, "Forwarding creation request");
    match create_instance(&state.client, &state.backend_url, &request.os, &request.name).await {
        Ok(body) => {
            tracing::info!(response = ?body, "Creation service replied");
            Ok(body)
        }
        Err(e) => {
            tracing::warn!(%e, "Creation request did not complete");
            Err(e)
        }
    }
}

/// Same as [`forward_creation`], folded into the outcome the form renders.
pub async fn request_creation(state: &AppState, request: &CreationRequest) -> CreationOutcome {
    match forward_creation(state, request).await {
        Ok(body) => CreationOutcome::from_value(&body),
        Err(e) => CreationOutcome::from(&e),
    }
}
