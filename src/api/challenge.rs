//! # Challenge Client
//!
//! Fetches the server-issued challenge/options payload that the platform
//! authenticator must sign over. The payload is opaque: no client-side
//! validation of its internal shape beyond "is valid JSON" - it is passed
//! unmodified to the credential invoker.

use serde_json::Value;

use crate::ceremony::types::CeremonyKind;
use crate::error::ClientResult;

/// Options-issuance client for ceremony challenges
#[derive(Clone)]
pub struct ChallengeClient {
    http: reqwest::Client,
}

impl ChallengeClient {
    pub fn new(http: reqwest::Client) -> Self {
        ChallengeClient { http }
    }

    /// Fetch challenge options for one ceremony
    ///
    /// Credentials (session cookies) are included automatically by the
    /// shared client.
    ///
    /// ## Errors
    /// - `Transport`: network failure or failure HTTP status
    /// - `MalformedResponse`: body is not valid JSON
    ///
    /// No retry - the caller decides whether to start a fresh ceremony.
    pub async fn fetch_options(&self, kind: CeremonyKind, endpoint: &str) -> ClientResult<Value> {
        let options = crate::api::get_json(&self.http, endpoint).await?;
        tracing::debug!(%kind, "challenge options received");
        Ok(options)
    }
}
