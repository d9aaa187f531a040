//! # Session Controller
//!
//! Single source of truth for the logged-in flag, and the gate that decides
//! which screen a navigation request actually lands on.
//!
//! ## Ownership
//! `SessionState` is owned exclusively by the controller; ceremony and
//! password outcomes flow *into* it through explicit calls, never through
//! shared ambient state. One instance exists per active user session, reset
//! on reload - no persistence contract beyond the server's session cookie.
//!
//! ## Transitions
//! - into `logged_in = true`: successful password login, verified
//!   Authentication ceremony
//! - into `logged_in = false`: explicit logout (which also fire-and-forgets
//!   server-side invalidation)
//! - Registration ceremonies never change session state

use serde_json::Value;

use crate::api::account;
use crate::ceremony::types::{CeremonyKind, CeremonyOutcome};
use crate::config::Config;
use crate::error::ClientResult;

/// A page the user may request to navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    SignUp,
    Login,
    UserProfile,
}

/// The screen actually shown for a navigation request
///
/// `LoginRequired` is the "please log in" placeholder rendered when a
/// logged-out user requests the profile page - it offers a path back to
/// `Home` instead of hard-failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    SignUp,
    Login,
    UserProfile,
    LoginRequired,
}

/// Login status for the active user session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    pub logged_in: bool,
}

/// Tracks login status across ceremony/password outcomes and gates screens
pub struct SessionController {
    config: Config,
    http: reqwest::Client,
    state: SessionState,
}

impl SessionController {
    /// Create a controller starting logged out
    ///
    /// Pass the same cookie-store-enabled client the orchestrators use, so
    /// the server session established by login/authentication is visible to
    /// every flow.
    pub fn new(config: Config, http: reqwest::Client) -> Self {
        SessionController {
            config,
            http,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn logged_in(&self) -> bool {
        self.state.logged_in
    }

    /// Decide which screen a navigation request lands on
    ///
    /// - `Home`: always allowed
    /// - `SignUp`/`Login`: only while logged out, otherwise routed to `Home`
    /// - `UserProfile`: only while logged in, otherwise the "please log in"
    ///   placeholder
    pub fn allowed_page(&self, requested: Page) -> Screen {
        match (requested, self.state.logged_in) {
            (Page::Home, _) => Screen::Home,
            (Page::SignUp, false) => Screen::SignUp,
            (Page::Login, false) => Screen::Login,
            (Page::SignUp, true) | (Page::Login, true) => Screen::Home,
            (Page::UserProfile, true) => Screen::UserProfile,
            (Page::UserProfile, false) => Screen::LoginRequired,
        }
    }

    /// Reconcile a terminal ceremony outcome with session state
    ///
    /// Only a verified Authentication ceremony logs the user in;
    /// Registration outcomes never touch the flag.
    pub fn apply_ceremony(&mut self, outcome: &CeremonyOutcome) {
        if outcome.kind == CeremonyKind::Authentication && outcome.verified {
            tracing::info!("authentication ceremony verified, session is now logged in");
            self.state.logged_in = true;
        }
    }

    /// Password login; sets `logged_in` on success
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<()> {
        account::login(&self.http, &self.config.login_endpoint(), username, password).await?;
        self.state.logged_in = true;
        Ok(())
    }

    /// Create an account. A successful signup leaves the session logged out;
    /// the user still has to log in or run an authentication ceremony.
    pub async fn sign_up(&self, username: &str, password: &str) -> ClientResult<()> {
        account::sign_up(&self.http, &self.config.signup_endpoint(), username, password).await
    }

    /// Log out locally and request server-side invalidation
    ///
    /// The server call is fire-and-forget: the local flag is cleared and
    /// navigation proceeds whatever the request's outcome.
    pub async fn logout(&mut self) {
        self.state.logged_in = false;
        account::logout(&self.http, &self.config.logout_endpoint()).await;
    }

    /// Fetch the current user's profile for the `UserProfile` screen
    pub async fn profile(&self) -> ClientResult<Value> {
        account::profile(&self.http, &self.config.profile_endpoint()).await
    }
}
