//! # Ceremony Module
//!
//! Client-side ceremony orchestration for passkey registration and
//! authentication.
//!
//! ## Submodules
//! - `types`: ceremony kind and terminal outcome types
//! - `trace`: append-only diagnostic trace of ceremony phases
//! - `orchestrator`: the per-ceremony state machine
//!
//! ## Ceremony Flow Overview
//!
//! ### Registration (Creating a Passkey)
//! 1. Fetch creation options/challenge from the server
//! 2. Platform capability creates a credential (attestation)
//! 3. Submit the attestation for verification
//! 4. Server stores the public key; outcome reported to the caller
//!
//! ### Authentication (Logging In)
//! 1. Fetch request options/challenge from the server
//! 2. Platform capability signs the challenge (assertion)
//! 3. Submit the assertion for verification
//! 4. On `verified: true` the session becomes logged in

pub mod orchestrator;
pub mod trace;
pub mod types;
