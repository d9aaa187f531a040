//! Session flows around the ceremony core: password login/signup contracts,
//! logout, profile fetch, and navigation gating after a ceremony.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use common::{serve, ScriptedInvoker};
use passkey_ceremony::{
    CeremonyKind, CeremonyOrchestrator, ClientError, Config, Page, Screen, SessionController,
};

#[tokio::test]
async fn password_login_sets_logged_in() {
    let app = Router::new().route("/login", post(|| async { Json(json!({"ok": true})) }));
    let host = serve(app).await;
    let mut session = SessionController::new(Config::for_host(&host), reqwest::Client::new());

    session.login("alice", "hunter2").await.unwrap();

    assert!(session.logged_in());
    assert_eq!(session.allowed_page(Page::UserProfile), Screen::UserProfile);
}

#[tokio::test]
async fn rejected_login_surfaces_server_reason() {
    let app = Router::new().route(
        "/login",
        post(|| async { (StatusCode::UNAUTHORIZED, Json(json!({"error": "bad password"}))) }),
    );
    let host = serve(app).await;
    let mut session = SessionController::new(Config::for_host(&host), reqwest::Client::new());

    let err = session.login("alice", "wrong").await.unwrap_err();

    match err {
        ClientError::Rejected(reason) => assert_eq!(reason, "bad password"),
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert!(!session.logged_in());
}

#[tokio::test]
async fn rejected_login_without_error_body_uses_fallback() {
    let app = Router::new().route(
        "/login",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let host = serve(app).await;
    let mut session = SessionController::new(Config::for_host(&host), reqwest::Client::new());

    let err = session.login("alice", "hunter2").await.unwrap_err();
    assert_eq!(err.to_string(), "Login failed");
}

#[tokio::test]
async fn signup_success_leaves_session_logged_out() {
    let app = Router::new().route("/users", post(|| async { Json(json!({"ok": true})) }));
    let host = serve(app).await;
    let session = SessionController::new(Config::for_host(&host), reqwest::Client::new());

    session.sign_up("bob", "hunter2").await.unwrap();
    assert!(!session.logged_in());
}

#[tokio::test]
async fn profile_returns_server_payload() {
    let profile = json!({"username": "alice", "display_name": "Alice"});
    let app = Router::new().route(
        "/users/me",
        get({
            let profile = profile.clone();
            move || async move { Json(profile) }
        }),
    );
    let host = serve(app).await;
    let session = SessionController::new(Config::for_host(&host), reqwest::Client::new());

    assert_eq!(session.profile().await.unwrap(), profile);
}

#[tokio::test]
async fn logout_requests_invalidation_and_clears_state() {
    let app = Router::new()
        .route("/login", post(|| async { Json(json!({"ok": true})) }))
        .route("/logout", post(|| async { StatusCode::OK }));
    let host = serve(app).await;
    let mut session = SessionController::new(Config::for_host(&host), reqwest::Client::new());

    session.login("alice", "hunter2").await.unwrap();
    session.logout().await;

    assert!(!session.logged_in());
    assert_eq!(session.allowed_page(Page::Login), Screen::Login);
}

// A verified authentication ceremony is the other path into logged-in, and
// it opens the profile screen.
#[tokio::test]
async fn verified_ceremony_opens_profile_screen() {
    let app = Router::new()
        .route(
            "/generate-authentication-options",
            get(|| async { Json(json!({"challenge": "abc"})) }),
        )
        .route(
            "/verify-authentication",
            post(|_body: Json<Value>| async { Json(json!({"verified": true})) }),
        );
    let host = serve(app).await;

    let http = passkey_ceremony::api::build_http_client().unwrap();
    let config = Config::for_host(&host);
    let mut session = SessionController::new(config.clone(), http.clone());
    assert_eq!(session.allowed_page(Page::UserProfile), Screen::LoginRequired);

    let invoker: Arc<ScriptedInvoker> = ScriptedInvoker::succeeding(json!({"id": "cred1"}));
    let mut orchestrator =
        CeremonyOrchestrator::from_config(CeremonyKind::Authentication, &config, http, invoker);
    let outcome = orchestrator.run().await.unwrap();
    session.apply_ceremony(&outcome);

    assert!(session.logged_in());
    assert_eq!(session.allowed_page(Page::UserProfile), Screen::UserProfile);
    assert_eq!(session.allowed_page(Page::SignUp), Screen::Home);
}
