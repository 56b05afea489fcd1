use reqwest::Method;
use serde_json::Value;
use yansi::Paint;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::ProxyError;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// Core HTTP call against the creation service.
/// Sends no body and does not look at the status code; the reply body must be JSON.
pub async fn backend_call(
    client: &reqwest::Client,
    base_url: &str,
    method: Method,
    endpoint: &str,
) -> Result<Value, ProxyError> {
    // Parsing percent-encodes the path and resolves dot segments; `?` and `#` start a query or fragment.
    let raw_url = format!("{}{}", base_url, endpoint);
    let url = reqwest::Url::parse(&raw_url)
        .map_err(|e| ProxyError::InvalidTarget(format!("{}: {}", raw_url, e)))?;

    // --- Curl Logging ---
    let parts = [
        Paint::new("curl").green().bold().to_string(),
        format!("-X {}", Paint::new(method.as_str()).yellow().bold()),
        format!("'{}'", Paint::new(url.as_str()).cyan()),
    ];
    log_output(format!("Request:\n{}", parts.join(" ")));
    // --------------------

    let text = client.request(method, url).send().await?.text().await?;
    let result: Value = serde_json::from_str(&text)?;

    // Grayed out so the response is easy to tell apart from the request line
    let json_str = serde_json::to_string(&result).unwrap_or_else(|_| format!("{:?}", result));
    log_output(format!("Response:\n{}", Paint::new(json_str).rgb(100, 100, 100)));

    Ok(result)
}
