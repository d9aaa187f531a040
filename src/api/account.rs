//! # Account API
//!
//! Password login, signup, logout and profile - the session flows that
//! surround the ceremony core. Login and signup share one request/response
//! contract: a JSON `{username, password}` body, a 2xx on success, and an
//! `{error: string}` body on rejection.

use serde::Serialize;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

#[derive(Serialize)]
struct CredentialsForm<'a> {
    username: &'a str,
    password: &'a str,
}

/// Submit the password login form
///
/// ## Errors
/// - `Rejected`: non-2xx reply; carries the server's `error` text, or a
///   generic fallback when the body had none
/// - `Transport`: network failure
pub async fn login(
    http: &reqwest::Client,
    endpoint: &str,
    username: &str,
    password: &str,
) -> ClientResult<()> {
    submit_form(http, endpoint, username, password, "Login failed").await
}

/// Submit the signup form. Success does not log the user in.
pub async fn sign_up(
    http: &reqwest::Client,
    endpoint: &str,
    username: &str,
    password: &str,
) -> ClientResult<()> {
    submit_form(http, endpoint, username, password, "Sign-up failed").await
}

async fn submit_form(
    http: &reqwest::Client,
    endpoint: &str,
    username: &str,
    password: &str,
    fallback: &str,
) -> ClientResult<()> {
    let resp = http
        .post(endpoint)
        .json(&CredentialsForm { username, password })
        .send()
        .await?;

    if resp.status().is_success() {
        return Ok(());
    }

    // Rejections report why in an {error: ...} body; tolerate replies that
    // don't follow the contract.
    let status = resp.status();
    let body: Value = resp.json().await.unwrap_or(Value::Null);
    let reason = body
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string();
    tracing::warn!(%status, %reason, "credentials form rejected");
    Err(ClientError::Rejected(reason))
}

/// Request server-side session invalidation, fire-and-forget
///
/// Navigation proceeds regardless of this call's outcome, so the result is
/// only logged, never propagated.
pub async fn logout(http: &reqwest::Client, endpoint: &str) {
    match http.post(endpoint).send().await {
        Ok(resp) => tracing::debug!(status = %resp.status(), "logout requested"),
        Err(e) => tracing::warn!(error = %e, "logout request failed"),
    }
}

/// Fetch the current user's profile (requires a logged-in session)
pub async fn profile(http: &reqwest::Client, endpoint: &str) -> ClientResult<Value> {
    crate::api::get_json(http, endpoint).await
}
