//! # Ceremony Types
//!
//! Shared value types for ceremony orchestration.

use std::fmt;

use serde_json::Value;

/// Which ceremony is being performed
///
/// Immutable per invocation. Selects the endpoint pair and the credential
/// capability operation (Registration exercises `create`, Authentication
/// exercises `get`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CeremonyKind {
    /// Create and register a new passkey (produces an attestation)
    Registration,
    /// Log in with an existing passkey (produces an assertion)
    Authentication,
}

impl CeremonyKind {
    /// Kind-specific success message shown to the user
    pub fn success_message(&self) -> &'static str {
        match self {
            CeremonyKind::Registration => "Authenticator registered!",
            CeremonyKind::Authentication => "User authenticated!",
        }
    }
}

// The Display text is used in trace labels ("Registration Options" etc.)
impl fmt::Display for CeremonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CeremonyKind::Registration => write!(f, "Registration"),
            CeremonyKind::Authentication => write!(f, "Authentication"),
        }
    }
}

/// Terminal value of one ceremony run
///
/// `verified: false` is a normal outcome, distinct from a transport or
/// invocation error - the UI can offer "try again" without implying a bug.
/// Not retried automatically.
#[derive(Debug, Clone)]
pub struct CeremonyOutcome {
    /// Which ceremony produced this outcome
    pub kind: CeremonyKind,
    /// True only if the server reply's `verified` field was exactly `true`
    pub verified: bool,
    /// User-facing message (kind-specific success text, or the failure text)
    pub message: String,
    /// Raw server reply, preserved for diagnostics
    pub raw_server_payload: Value,
}
