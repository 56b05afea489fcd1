#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::http::{header, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use spawnbox::models::AppState;

/// What the stub creation service answers for one request.
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

impl Reply {
    pub fn json(body: serde_json::Value) -> Self {
        Reply { status: StatusCode::OK, body: body.to_string(), delay: Duration::ZERO }
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        Reply { status, body: body.to_string(), delay: Duration::ZERO }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Creation service stand-in listening on an ephemeral port.
/// Every request is recorded as `"<METHOD> <path>"`.
pub struct StubBackend {
    pub url: String,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl StubBackend {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

pub async fn spawn_backend<F>(reply: F) -> StubBackend
where
    F: Fn(&str) -> Reply + Clone + Send + Sync + 'static,
{
    let calls = Arc::new(Mutex::new(Vec::new()));
    let recorded = calls.clone();
    let app = Router::new().fallback(move |method: Method, uri: Uri| {
        let recorded = recorded.clone();
        let reply = reply.clone();
        async move {
            recorded.lock().unwrap().push(format!("{} {}", method, uri.path()));
            let r = reply(uri.path());
            if !r.delay.is_zero() {
                tokio::time::sleep(r.delay).await;
            }
            (r.status, [(header::CONTENT_TYPE, "application/json")], r.body).into_response()
        }
    });
    let url = serve(app).await;
    StubBackend { url, calls }
}

/// Serve a router on 127.0.0.1:0 in the background and return its base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A base URL nothing is listening on.
pub async fn dead_backend_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn state_for(backend_url: &str) -> AppState {
    spawnbox::api::set_silent(true);
    AppState::new(backend_url, reqwest::Client::new())
}

pub async fn body_string(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
