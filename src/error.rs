//! # Error Handling
//!
//! This module defines the error taxonomy for the ceremony client.
//!
//! Two families of failure exist and must stay distinguishable:
//! - **Transport-level faults**: the network is unreachable, the server
//!   answered with a failure status, or the body is not JSON
//! - **Invocation faults**: the platform authenticator refused or could not
//!   produce a credential ([`InvokerError`])
//!
//! A server that answers "not verified" is *neither* of these - that is a
//! legitimate, expected ceremony outcome and is carried as data
//! ([`crate::api::verify::VerifyOutcome`]), never as an error.

use thiserror::Error;

use crate::invoker::InvokerError;

/// Client-wide error type
///
/// None of these are retried automatically. They map to a terminal `Failed`
/// ceremony state and are re-raised to the caller, which may choose to start
/// a fresh ceremony from `Idle`.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network failure or HTTP-level failure status while talking to the
    /// server. The `#[from]` lets `?` convert reqwest errors directly.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered, but the body was not valid JSON where JSON was
    /// required (challenge options, profile).
    #[error("Malformed server response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The platform credential capability failed (4 distinct kinds, see
    /// [`InvokerError`]). The Display text is already the user-facing
    /// message, so it passes through verbatim.
    #[error("{0}")]
    Invoker(#[from] InvokerError),

    /// The server rejected a login/signup form and reported why
    /// (the `{error: ...}` body contract).
    #[error("{0}")]
    Rejected(String),
}

/// Convenience type alias for Results using ClientError
pub type ClientResult<T> = Result<T, ClientError>;
