//! # Ceremony Orchestrator
//!
//! Drives one ceremony end to end: fetch options, invoke the platform
//! credential capability, submit the result for verification. An explicit
//! finite state machine replaces the overlapping success/error flags of
//! typical UI code, so illegal combinations (both success and error set)
//! are unrepresentable.
//!
//! ## State Machine
//! ```text
//! Idle -> FetchingOptions -> AwaitingCredential -> Verifying -> Succeeded
//!              |                    |                  |
//!              v                    v                  v
//!            Failed              Failed             Failed
//! ```
//!
//! ## Concurrency
//! Exactly one ceremony is in flight per instance; `run(&mut self)` makes a
//! second concurrent ceremony on the same instance unrepresentable. A reused
//! instance restarts from the top while its trace keeps appending; the trace
//! is cleared only by constructing a new orchestrator.

use std::sync::Arc;

use crate::api::challenge::ChallengeClient;
use crate::api::verify::VerificationClient;
use crate::ceremony::trace::DiagnosticTrace;
use crate::ceremony::types::{CeremonyKind, CeremonyOutcome};
use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::invoker::CredentialInvoker;

/// Ceremony state
///
/// Terminal states carry the user-facing message so callers can render the
/// outcome without keeping separate flag/message pairs in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CeremonyState {
    /// No ceremony running (entry state)
    Idle,
    /// Waiting on the options endpoint
    FetchingOptions,
    /// Waiting on the platform authenticator (user-driven, unbounded)
    AwaitingCredential,
    /// Waiting on the verification endpoint
    Verifying,
    /// Terminal: the server verified the credential response
    Succeeded { message: String },
    /// Terminal: transport/invocation failure, or the server did not verify
    Failed { message: String },
}

/// Composes the challenge client, credential invoker and verification client
/// into one ceremony invocation.
pub struct CeremonyOrchestrator {
    kind: CeremonyKind,
    options_endpoint: String,
    verify_endpoint: String,
    challenge: ChallengeClient,
    verification: VerificationClient,
    invoker: Arc<dyn CredentialInvoker>,
    state: CeremonyState,
    trace: DiagnosticTrace,
}

impl CeremonyOrchestrator {
    /// Create an orchestrator for an explicit endpoint pair
    ///
    /// The reqwest client's cookie store is what carries session credentials;
    /// pass the same client that the session flows use.
    pub fn new(
        kind: CeremonyKind,
        options_endpoint: impl Into<String>,
        verify_endpoint: impl Into<String>,
        http: reqwest::Client,
        invoker: Arc<dyn CredentialInvoker>,
    ) -> Self {
        CeremonyOrchestrator {
            kind,
            options_endpoint: options_endpoint.into(),
            verify_endpoint: verify_endpoint.into(),
            challenge: ChallengeClient::new(http.clone()),
            verification: VerificationClient::new(http),
            invoker,
            state: CeremonyState::Idle,
            trace: DiagnosticTrace::new(),
        }
    }

    /// Create an orchestrator using the configured endpoint pair for `kind`
    pub fn from_config(
        kind: CeremonyKind,
        config: &Config,
        http: reqwest::Client,
        invoker: Arc<dyn CredentialInvoker>,
    ) -> Self {
        Self::new(
            kind,
            config.options_endpoint(kind),
            config.verify_endpoint(kind),
            http,
            invoker,
        )
    }

    pub fn kind(&self) -> CeremonyKind {
        self.kind
    }

    pub fn state(&self) -> &CeremonyState {
        &self.state
    }

    pub fn trace(&self) -> &DiagnosticTrace {
        &self.trace
    }

    /// Run one ceremony to a terminal state
    ///
    /// ## Flow
    /// 1. `FetchingOptions`: GET the options endpoint; failure ends the
    ///    ceremony without touching the invoker
    /// 2. `AwaitingCredential`: hand the options to the platform capability;
    ///    failure ends the ceremony without calling verification
    /// 3. `Verifying`: POST the credential response; the server's verdict is
    ///    data, not an error
    ///
    /// ## Returns
    /// - `Ok(outcome)` with `verified: true` and state `Succeeded`, or with
    ///   `verified: false` and state `Failed` ("not verified" is a normal,
    ///   expected result)
    /// - `Err` on transport or invocation failure; the state is `Failed`
    ///   carrying the same user-facing message, and the error is re-raised so
    ///   a calling layer may retry the whole ceremony from `Idle`
    pub async fn run(&mut self) -> ClientResult<CeremonyOutcome> {
        self.state = CeremonyState::FetchingOptions;
        tracing::debug!(kind = %self.kind, endpoint = %self.options_endpoint, "fetching options");
        let options = match self
            .challenge
            .fetch_options(self.kind, &self.options_endpoint)
            .await
        {
            Ok(options) => options,
            Err(e) => return Err(self.fail(e)),
        };
        self.trace.record(format!("{} Options", self.kind), &options);

        self.state = CeremonyState::AwaitingCredential;
        tracing::debug!(kind = %self.kind, "awaiting platform credential");
        let credential = match self.invoker.invoke(self.kind, options).await {
            Ok(credential) => credential,
            Err(e) => return Err(self.fail(e.into())),
        };
        self.trace
            .record(format!("{} Response", self.kind), &credential);

        self.state = CeremonyState::Verifying;
        tracing::debug!(kind = %self.kind, endpoint = %self.verify_endpoint, "verifying credential");
        let verdict = match self
            .verification
            .verify(self.kind, &self.verify_endpoint, &credential)
            .await
        {
            Ok(verdict) => verdict,
            Err(e) => return Err(self.fail(e)),
        };
        self.trace.record("Server Response", &verdict.raw);

        if verdict.verified {
            let message = self.kind.success_message().to_string();
            tracing::info!(kind = %self.kind, "ceremony succeeded");
            self.state = CeremonyState::Succeeded {
                message: message.clone(),
            };
            Ok(CeremonyOutcome {
                kind: self.kind,
                verified: true,
                message,
                raw_server_payload: verdict.raw,
            })
        } else {
            // A well-formed "not verified" is a legitimate ceremony result,
            // kept distinct from transport faults.
            let message = format!("Oh no, something went wrong! Response: {}", verdict.raw);
            tracing::warn!(kind = %self.kind, "server did not verify the credential");
            self.state = CeremonyState::Failed {
                message: message.clone(),
            };
            Ok(CeremonyOutcome {
                kind: self.kind,
                verified: false,
                message,
                raw_server_payload: verdict.raw,
            })
        }
    }

    /// Record a terminal failure and hand the error back to the caller
    fn fail(&mut self, err: ClientError) -> ClientError {
        let message = err.to_string();
        tracing::warn!(kind = %self.kind, error = %message, "ceremony failed");
        self.state = CeremonyState::Failed { message };
        err
    }
}
