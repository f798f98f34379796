//! Task Commands
//!
//! Bindings for task endpoints.

use gloo_net::http::Request;

use super::csrf_token;
use crate::config::UiConfig;
use crate::diagnostics::{DiagnosticEvent, Diagnostics};
use crate::error::UiError;
use crate::models::ToggleResponse;

/// Flip a task on the server; returns the server's `is_active`
pub async fn toggle_task(
    config: &UiConfig,
    task_id: &str,
    diagnostics: &dyn Diagnostics,
) -> Result<bool, UiError> {
    let url = config.toggle_url(task_id);
    let mut request = Request::post(&url);
    match csrf_token(&config.csrf_cookie) {
        Some(token) => request = request.header(&config.csrf_header, &token),
        None => diagnostics.record(DiagnosticEvent::MissingCsrfToken {
            cookie: config.csrf_cookie.clone(),
        }),
    }

    log::debug!("[TOGGLE] POST {url}");
    let resp = request
        .send()
        .await
        .map_err(|e| UiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(UiError::Status(resp.status()));
    }
    let body: ToggleResponse = resp
        .json()
        .await
        .map_err(|e| UiError::Decode(e.to_string()))?;
    Ok(body.is_active)
}
