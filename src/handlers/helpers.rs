use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::models::AppState;

/// Values every page shows in its header.
#[derive(Default)]
pub struct TemplateGlobals {
    pub backend_hostname: String,
}

pub fn build_template_globals(state: &AppState) -> TemplateGlobals {
    TemplateGlobals {
        backend_hostname: crate::utils::hostname_from_url(&state.backend_url),
    }
}

pub fn render_template<T: askama::Template>(t: T) -> Response {
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
