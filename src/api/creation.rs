use reqwest::Method;
use serde_json::Value;

use super::client::backend_call;
use crate::error::ProxyError;

/// Ask the creation service to build and start an instance.
///
/// `os` and `name` are not escaped here; the joined URL goes through URL parsing,
/// which shapes what the service receives:
/// - an empty `os` yields `/create//{name}`
/// - spaces and non-ASCII are percent-encoded (`my box` becomes `my%20box`)
/// - a `/` inside `name` adds a path segment
/// - `?` or `#` cut the path there (`x?y` arrives as `x`)
/// - `.` and `..` segments are resolved (`..` leaves just `/create/`)
pub async fn create_instance(
    client: &reqwest::Client,
    base_url: &str,
    os: &str,
    name: &str,
) -> Result<Value, ProxyError> {
    let endpoint = format!("/create/{}/{}", os, name);
    backend_call(client, base_url, Method::POST, &endpoint).await
}

/// Fetch the creation service's root document to confirm it is reachable.
pub async fn ping_backend(client: &reqwest::Client, base_url: &str) -> Result<Value, ProxyError> {
    backend_call(client, base_url, Method::GET, "/").await
}
