//! Auth service scenarios: login, session restore after a restart, and
//! logout.

mod common;

use common::{StubResponse, StubServer};
use quill_client::{AuthService, Credentials, Gateway, MemorySessionStore};
use quill_core::config::ApiConfig;
use quill_core::session::SessionStore;
use quill_core::session::AuthSession;
use std::sync::Arc;

const LOGIN_OK: &str = r#"{
    "user": {"id": 1, "name": "Sara Jenkins", "email": "sara@example.com"},
    "tokens": {"accessToken": "token-1", "refreshToken": "refresh-1"}
}"#;

const ME_OK: &str = r#"{"user": {"id": 1, "name": "Sara Jenkins", "email": "sara@example.com"}}"#;

fn api_handler(req: &common::RecordedRequest) -> StubResponse {
    match (req.method.as_str(), req.path()) {
        ("POST", "/auth/login") => {
            if req.body.contains("password123") {
                StubResponse::json(200, LOGIN_OK)
            } else {
                StubResponse::json(401, r#"{"error": "invalid credentials"}"#)
            }
        }
        ("GET", "/auth/me") => StubResponse::json(200, ME_OK),
        _ => StubResponse::json(404, "{}"),
    }
}

#[tokio::test]
async fn test_login_stores_tokens_and_user() -> anyhow::Result<()> {
    let server = StubServer::start(api_handler).await;
    let store = Arc::new(MemorySessionStore::new());
    let gateway = Arc::new(Gateway::new(
        &ApiConfig::new(server.base_url.clone()),
        store.clone(),
    ));
    let auth = AuthService::new(gateway, store.clone());

    let user = auth
        .login(&Credentials::new("sara@example.com", "password123"))
        .await?;
    assert_eq!(user.name, "Sara Jenkins");
    assert!(auth.is_authenticated().await);
    assert_eq!(
        store.load().await,
        Some(AuthSession::new("token-1", "refresh-1"))
    );
    Ok(())
}

#[tokio::test]
async fn test_restore_reproduces_the_authenticated_identity() -> anyhow::Result<()> {
    let server = StubServer::start(api_handler).await;
    let store = Arc::new(MemorySessionStore::new());
    let gateway = Arc::new(Gateway::new(
        &ApiConfig::new(server.base_url.clone()),
        store.clone(),
    ));

    let auth = AuthService::new(gateway.clone(), store.clone());
    let logged_in = auth
        .login(&Credentials::new("sara@example.com", "password123"))
        .await?;

    // A fresh service over the same store stands in for an app restart.
    let restarted = AuthService::new(gateway, store);
    assert!(!restarted.is_authenticated().await);
    let restored = restarted.restore().await?;
    assert_eq!(restored, logged_in);
    assert!(restarted.is_authenticated().await);

    let me_requests = server.requests_to("/auth/me").await;
    assert_eq!(me_requests.len(), 1);
    assert_eq!(me_requests[0].header("authorization"), Some("Bearer token-1"));
    Ok(())
}

#[tokio::test]
async fn test_restore_without_session_fails_without_network() {
    let server = StubServer::start(api_handler).await;
    let store = Arc::new(MemorySessionStore::new());
    let gateway = Arc::new(Gateway::new(
        &ApiConfig::new(server.base_url.clone()),
        store.clone(),
    ));
    let auth = AuthService::new(gateway, store);

    assert!(auth.restore().await.is_err());
    assert!(server.requests().await.is_empty());
}

#[tokio::test]
async fn test_failed_login_leaves_no_session() {
    let server = StubServer::start(api_handler).await;
    let store = Arc::new(MemorySessionStore::new());
    let gateway = Arc::new(Gateway::new(
        &ApiConfig::new(server.base_url.clone()),
        store.clone(),
    ));
    let auth = AuthService::new(gateway, store.clone());

    let err = auth
        .login(&Credentials::new("sara@example.com", "wrong"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(store.load().await.is_none());
    assert!(!auth.is_authenticated().await);
}

#[tokio::test]
async fn test_logout_clears_session_and_identity() -> anyhow::Result<()> {
    let server = StubServer::start(api_handler).await;
    let store = Arc::new(MemorySessionStore::new());
    let gateway = Arc::new(Gateway::new(
        &ApiConfig::new(server.base_url.clone()),
        store.clone(),
    ));
    let auth = AuthService::new(gateway, store.clone());

    auth.login(&Credentials::new("sara@example.com", "password123"))
        .await?;
    auth.logout().await?;

    assert!(store.load().await.is_none());
    assert!(!auth.is_authenticated().await);
    assert!(auth.current_user().await.is_none());
    Ok(())
}
