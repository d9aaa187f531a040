//! # Verification Client
//!
//! Submits the credential response to the server and reports its verdict.
//!
//! The verdict is a **data-dependent outcome**, not an error: a well-formed
//! "not verified" is a legitimate, expected ceremony result distinct from a
//! transport fault. Only a network-level failure is raised as an error here.
//! The HTTP status code is not consulted for the verdict - the parsed body
//! alone decides, matching the server contract.

use serde_json::Value;

use crate::ceremony::types::CeremonyKind;
use crate::error::ClientResult;

/// Server verdict on one credential response
#[derive(Debug, Clone)]
pub struct VerifyOutcome {
    /// True only if the reply's `verified` field was exactly `true`
    pub verified: bool,
    /// Raw server payload, preserved for diagnostics. When the body was not
    /// JSON, the body text is kept as a JSON string.
    pub raw: Value,
}

/// Credential-response verification client
#[derive(Clone)]
pub struct VerificationClient {
    http: reqwest::Client,
}

impl VerificationClient {
    pub fn new(http: reqwest::Client) -> Self {
        VerificationClient { http }
    }

    /// POST the credential response and read the server's verdict
    ///
    /// The response is serialized as the JSON request body with credentials
    /// included. Any reply with a readable body is an outcome: missing
    /// `verified` field, `verified: false`, a non-JSON body or a failure
    /// status all yield `verified: false` with the raw payload retained.
    ///
    /// ## Errors
    /// - `Transport`: the request never produced a readable reply
    pub async fn verify(
        &self,
        kind: CeremonyKind,
        endpoint: &str,
        response: &Value,
    ) -> ClientResult<VerifyOutcome> {
        let resp = self.http.post(endpoint).json(response).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        let raw = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(_) => Value::String(body),
        };
        let verified = raw.get("verified") == Some(&Value::Bool(true));

        if verified {
            tracing::debug!(%kind, %status, "server verified the credential response");
        } else {
            tracing::warn!(%kind, %status, "server did not verify the credential response");
        }
        Ok(VerifyOutcome { verified, raw })
    }
}
