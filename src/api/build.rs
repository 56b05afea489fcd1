use crate::error::ProxyError;
use crate::models::{BuildPayload, CreationOutcome, CreationRequest};

/// Submit a creation request to a running proxy (`POST {proxy_url}/api/build`).
///
/// The proxy answers `{message}`/`{error}` on success and `{error}` on upstream
/// failure, so any JSON reply maps onto a [`CreationOutcome`].
pub async fn submit_build(
    client: &reqwest::Client,
    proxy_url: &str,
    request: &CreationRequest,
) -> Result<CreationOutcome, ProxyError> {
    let url = format!("{}/api/build", proxy_url.trim_end_matches('/'));
    tracing::info!(%url, os = %request.os, name = %request.name, "Submitting build request");
    let text = client
        .post(&url)
        .json(&BuildPayload::from(request))
        .send()
        .await?
        .text()
        .await?;
    let body: serde_json::Value = serde_json::from_str(&text)?;
    Ok(CreationOutcome::from_value(&body))
}
