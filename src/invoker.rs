//! # Credential Invoker
//!
//! This module models the platform credential API as an opaque capability
//! with exactly two operations, mirroring `navigator.credentials`:
//! - `create`: produce an attestation for a Registration ceremony
//! - `get`: produce an assertion for an Authentication ceremony
//!
//! Any conformant WebAuthn client library can implement [`CredentialInvoker`];
//! the orchestrator never binds to a concrete browser API surface.
//!
//! ## Suspension
//! Invocation may suspend for an indeterminate, user-driven duration (biometric
//! prompt, security key tap). No client-side timeout is imposed here and no
//! cancellation token exists - the only cancellation is tearing down the
//! orchestrator and letting the in-flight future resolve into a vacuum.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::ceremony::types::CeremonyKind;

/// Credential-invocation failure taxonomy
///
/// The four kinds must stay distinct - the user-facing message depends on
/// which one occurred, and only `AlreadyRegistered` gets the specific
/// "probably already registered" text. The Display impl *is* the user-facing
/// message; platform text passes through verbatim when present.
#[derive(Error, Debug)]
pub enum InvokerError {
    /// The platform signaled that this authenticator is already bound to an
    /// existing credential (low-level "InvalidStateError").
    #[error("Error: Authenticator was probably already registered by user")]
    AlreadyRegistered,

    /// The user dismissed the prompt or declined consent.
    #[error("{}", .0.as_deref().unwrap_or("The operation was cancelled by the user"))]
    UserCancelled(Option<String>),

    /// The platform/browser lacks the required capability.
    #[error("{}", .0.as_deref().unwrap_or("WebAuthn is not supported in this environment"))]
    Unsupported(Option<String>),

    /// Any other opaque platform failure. The platform's message is passed
    /// through verbatim when available, else a generic fallback.
    #[error("{}", .0.as_deref().unwrap_or("Unknown error occurred"))]
    Unknown(Option<String>),
}

impl InvokerError {
    /// Classify a raw platform error by its DOMException-style name
    ///
    /// WebAuthn implementations report failures as named exceptions:
    /// - `InvalidStateError`: authenticator already registered
    /// - `NotAllowedError` / `AbortError`: user dismissed or declined
    /// - `NotSupportedError`: capability missing
    /// Everything else is opaque and kept as `Unknown` with its message.
    pub fn from_platform(name: &str, message: Option<&str>) -> Self {
        let message = message.map(str::to_string);
        match name {
            "InvalidStateError" => InvokerError::AlreadyRegistered,
            "NotAllowedError" | "AbortError" => InvokerError::UserCancelled(message),
            "NotSupportedError" => InvokerError::Unsupported(message),
            _ => InvokerError::Unknown(message),
        }
    }
}

/// Platform credential capability
///
/// Options and responses are opaque JSON: the server-issued challenge payload
/// goes in unmodified, the signed credential response comes out unmodified.
/// Implementations must not interpret either beyond what their platform
/// binding requires.
#[async_trait]
pub trait CredentialInvoker: Send + Sync {
    /// Create a new credential (Registration). Counterpart of
    /// `navigator.credentials.create()`.
    async fn create(&self, options: Value) -> Result<Value, InvokerError>;

    /// Use an existing credential (Authentication). Counterpart of
    /// `navigator.credentials.get()`.
    async fn get(&self, options: Value) -> Result<Value, InvokerError>;

    /// Dispatch on ceremony kind
    ///
    /// Registration exercises `create`, Authentication exercises `get`.
    async fn invoke(&self, kind: CeremonyKind, options: Value) -> Result<Value, InvokerError> {
        match kind {
            CeremonyKind::Registration => self.create(options).await,
            CeremonyKind::Authentication => self.get(options).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_state_maps_to_already_registered() {
        let err = InvokerError::from_platform("InvalidStateError", Some("ignored by mapping"));
        assert!(matches!(err, InvokerError::AlreadyRegistered));
        assert_eq!(
            err.to_string(),
            "Error: Authenticator was probably already registered by user"
        );
    }

    #[test]
    fn dismissal_names_map_to_user_cancelled() {
        for name in ["NotAllowedError", "AbortError"] {
            let err = InvokerError::from_platform(name, None);
            assert!(matches!(err, InvokerError::UserCancelled(_)));
        }
    }

    #[test]
    fn missing_capability_maps_to_unsupported() {
        let err = InvokerError::from_platform("NotSupportedError", None);
        assert!(matches!(err, InvokerError::Unsupported(_)));
    }

    #[test]
    fn unknown_failures_keep_platform_text() {
        let err = InvokerError::from_platform("OperationError", Some("key store exploded"));
        assert_eq!(err.to_string(), "key store exploded");
    }

    #[test]
    fn unknown_failures_without_text_use_fallback() {
        let err = InvokerError::from_platform("OperationError", None);
        assert_eq!(err.to_string(), "Unknown error occurred");
    }
}
