//! # API Module
//!
//! HTTP contracts with the backend, one submodule per concern:
//! - `challenge`: options issuance for a ceremony (`GET`)
//! - `verify`: credential-response verification (`POST`)
//! - `account`: password login, signup, logout and profile
//!
//! All requests go through a shared [`reqwest::Client`] whose cookie store is
//! what "credentials included" means on this side of the wire.

pub mod account;
pub mod challenge;
pub mod verify;

use serde_json::Value;

use crate::error::ClientResult;

/// Build the HTTP client the ceremony and session flows share
///
/// The cookie store must be enabled - the server's session cookie is the only
/// credential this client carries.
pub fn build_http_client() -> ClientResult<reqwest::Client> {
    let client = reqwest::Client::builder().cookie_store(true).build()?;
    Ok(client)
}

/// GET a JSON document with credentials included
///
/// Non-success statuses and network failures are transport errors; a body
/// that is not valid JSON is a malformed response. Used for challenge
/// options and the profile endpoint, which share this contract.
pub(crate) async fn get_json(http: &reqwest::Client, endpoint: &str) -> ClientResult<Value> {
    let resp = http.get(endpoint).send().await?.error_for_status()?;
    let body = resp.text().await?;
    let parsed = serde_json::from_str(&body)?;
    Ok(parsed)
}
