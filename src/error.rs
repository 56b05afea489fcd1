use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Failures talking to the external creation service.
///
/// Application-level failures reported by the service itself (`{"error": ...}`)
/// are not errors here; they are relayed as ordinary responses.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The backend URL composed from the request does not parse.
    #[error("Invalid backend target: {0}")]
    InvalidTarget(String),

    /// Connection refused, DNS failure, timeout and the like.
    #[error("Request to creation service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a body that is not JSON.
    #[error("Creation service returned a malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_GATEWAY
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
