use axum::{
    http::{header::{CACHE_CONTROL, CONTENT_TYPE}, HeaderValue},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::models::AppState;
use crate::handlers;

// Embed the stylesheet in the binary
const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

async fn stylesheet_get() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/css")], DEFAULT_STYLESHEET)
}

pub fn build_router(state: AppState) -> Router {
    let static_routes: Router<AppState> = Router::new()
        .route("/static/styles.css", get(stylesheet_get))
        .layer(
            ServiceBuilder::new().layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("public, max-age=3600"),
            )),
        );

    Router::new()
        .route("/", get(handlers::form::form_get).post(handlers::form::form_post))
        // Only POST is routed; other methods get axum's empty 405 with `Allow: POST`.
        .route("/api/build", post(handlers::proxy::build_post))
        .merge(static_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
