use axum::{
    extract::{Form, State},
    response::IntoResponse,
};

use crate::models::{AppState, CreationForm, FormState};
use crate::services::request_creation;
use crate::templates::CreateTemplate;
use super::helpers::{build_template_globals, render_template, TemplateGlobals};

fn render_form(state: &AppState, form: &FormState) -> axum::response::Response {
    let TemplateGlobals { backend_hostname } = build_template_globals(state);
    let (has_result, result_ok, result_text) = match &form.result {
        Some(outcome) => (true, outcome.is_created(), outcome.text().to_string()),
        None => (false, false, String::new()),
    };
    render_template(CreateTemplate {
        backend_hostname,
        os_options: form.os_options(),
        name: form.name.clone(),
        has_result,
        result_ok,
        result_text,
    })
}

pub async fn form_get(State(state): State<AppState>) -> impl IntoResponse {
    render_form(&state, &FormState::default())
}

/// Submits the form through the proxy path and re-renders it with the outcome.
/// Nothing is validated first; an unchecked OS goes out as an empty segment.
pub async fn form_post(
    State(state): State<AppState>,
    Form(form): Form<CreationForm>,
) -> impl IntoResponse {
    let mut form_state = FormState::from_form(form);
    let outcome = request_creation(&state, &form_state.to_request()).await;
    form_state.record(outcome);
    render_form(&state, &form_state)
}
