//! # Configuration Management
//!
//! This module handles loading configuration from environment variables.
//! The client has a single knob: the host the backend is served from. All
//! endpoint paths are fixed by the server contract.
//!
//! ## Environment Variables
//! - `API_HOST`: Base URL of the backend (default: http://localhost:8080)

use anyhow::Result;
use std::env;

use crate::ceremony::types::CeremonyKind;

/// Client configuration
///
/// Holds the backend base URL and composes the endpoint URLs the ceremony
/// and session flows talk to.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend, including protocol
    /// Examples: "http://localhost:8080", "https://example.com"
    pub api_host: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Loads variables from a .env file first (if present) using dotenvy,
    /// then falls back to a localhost default.
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (dotenvy doesn't error if file missing)
        dotenvy::dotenv().ok();

        Ok(Config {
            api_host: env::var("API_HOST").unwrap_or_else(|_| "http://localhost:8080".to_string()),
        })
    }

    /// Build a configuration for an explicit host (tests, embedding)
    pub fn for_host(api_host: impl Into<String>) -> Self {
        Config {
            api_host: api_host.into(),
        }
    }

    /// Options-issuance endpoint for the given ceremony kind
    pub fn options_endpoint(&self, kind: CeremonyKind) -> String {
        match kind {
            CeremonyKind::Registration => self.url("/generate-registration-options"),
            CeremonyKind::Authentication => self.url("/generate-authentication-options"),
        }
    }

    /// Verification endpoint for the given ceremony kind
    pub fn verify_endpoint(&self, kind: CeremonyKind) -> String {
        match kind {
            CeremonyKind::Registration => self.url("/verify-registration"),
            CeremonyKind::Authentication => self.url("/verify-authentication"),
        }
    }

    /// Password login endpoint
    pub fn login_endpoint(&self) -> String {
        self.url("/login")
    }

    /// Signup endpoint
    pub fn signup_endpoint(&self) -> String {
        self.url("/users")
    }

    /// Logout endpoint (server-side session invalidation)
    pub fn logout_endpoint(&self) -> String {
        self.url("/logout")
    }

    /// Current-user profile endpoint
    pub fn profile_endpoint(&self) -> String {
        self.url("/users/me")
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_host.trim_end_matches('/'), path)
    }
}
