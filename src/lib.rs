//! # Passkey Ceremony Client
//!
//! Client-side orchestration of WebAuthn/Passkey ceremonies against a server
//! that issues challenges and verifies signed responses.
//!
//! ## Key Concepts
//! - **Ceremony**: one complete registration or authentication exchange
//!   between this client, the platform credential capability, and the server
//! - **Attestation**: credential-creation response produced during registration
//! - **Assertion**: credential-use response produced during authentication
//!
//! ## Ceremony Flow
//! 1. Fetch challenge options from the server ([`api::challenge`])
//! 2. Hand the options to the platform authenticator ([`invoker`])
//! 3. Submit the signed response for verification ([`api::verify`])
//! 4. Report the terminal outcome and update session state ([`session`])
//!
//! The platform credential API is modeled as an opaque capability trait with
//! exactly two operations (`create`, `get`), so any conformant WebAuthn client
//! library can sit behind it.

pub mod api; // HTTP contracts with the server (options, verification, account)
pub mod ceremony; // Ceremony state machine, outcome types, diagnostic trace
pub mod config; // Configuration management (environment variables, endpoints)
pub mod error; // Error handling and custom error types
pub mod invoker; // Platform credential capability and its failure taxonomy
pub mod session; // Login state and page navigation gating

pub use crate::ceremony::orchestrator::{CeremonyOrchestrator, CeremonyState};
pub use crate::ceremony::types::{CeremonyKind, CeremonyOutcome};
pub use crate::config::Config;
pub use crate::error::{ClientError, ClientResult};
pub use crate::invoker::{CredentialInvoker, InvokerError};
pub use crate::session::{Page, Screen, SessionController, SessionState};
