//! The 401 → refresh → retry policy: one refresh per expiry, token
//! rotation before the retry, cleared session on refresh failure, and the
//! single-flight gate under concurrent 401s.

mod common;

use common::{StubResponse, StubServer};
use quill_client::{AuthExpiredHook, Gateway, MemorySessionStore};
use quill_core::QuillError;
use quill_core::config::ApiConfig;
use quill_core::session::SessionStore;
use quill_core::session::AuthSession;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

const REFRESH_OK: &str = r#"{"accessToken": "token-2", "refreshToken": "refresh-2"}"#;

struct FlagHook(Arc<AtomicBool>);

impl AuthExpiredHook for FlagHook {
    fn on_session_expired(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

fn seeded_store() -> Arc<MemorySessionStore> {
    Arc::new(MemorySessionStore::with_session(AuthSession::new(
        "token-1", "refresh-1",
    )))
}

#[tokio::test]
async fn test_401_refreshes_once_and_retries_with_new_token() -> anyhow::Result<()> {
    let server = StubServer::start(|req| match req.path() {
        "/auth/refresh" => StubResponse::json(200, REFRESH_OK),
        "/blogs/1/posts" => {
            if req.header("authorization") == Some("Bearer token-2") {
                StubResponse::json(200, r#"{"data": []}"#)
            } else {
                StubResponse::json(401, r#"{"error": "expired"}"#)
            }
        }
        _ => StubResponse::json(404, "{}"),
    })
    .await;

    let store = seeded_store();
    let gateway = Gateway::new(&ApiConfig::new(server.base_url.clone()), store.clone());

    let body: Value = gateway.get("/blogs/1/posts", &[]).await?;
    assert_eq!(body, json!({"data": []}));

    let posts = server.requests_to("/blogs/1/posts").await;
    assert_eq!(posts.len(), 2, "original call plus exactly one retry");
    assert_eq!(posts[0].header("authorization"), Some("Bearer token-1"));
    assert_eq!(posts[1].header("authorization"), Some("Bearer token-2"));

    let refreshes = server.requests_to("/auth/refresh").await;
    assert_eq!(refreshes.len(), 1);
    assert!(refreshes[0].body.contains("refresh-1"));

    // The rotated pair was persisted before the retry went out.
    assert_eq!(
        store.load().await,
        Some(AuthSession::new("token-2", "refresh-2"))
    );
    Ok(())
}

#[tokio::test]
async fn test_retry_is_not_retried_again() {
    // The server refuses the new token too; the second 401 must surface.
    let server = StubServer::start(|req| match req.path() {
        "/auth/refresh" => StubResponse::json(200, REFRESH_OK),
        _ => StubResponse::json(401, r#"{"error": "still expired"}"#),
    })
    .await;

    let gateway = Gateway::new(&ApiConfig::new(server.base_url.clone()), seeded_store());

    let err = gateway
        .get::<Value>("/blogs/1/posts", &[])
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));

    assert_eq!(server.requests_to("/blogs/1/posts").await.len(), 2);
    assert_eq!(server.requests_to("/auth/refresh").await.len(), 1);
}

#[tokio::test]
async fn test_failed_refresh_clears_session_and_fires_hook() {
    let server = StubServer::start(|req| match req.path() {
        "/auth/refresh" => StubResponse::json(401, r#"{"error": "refresh revoked"}"#),
        _ => StubResponse::json(401, r#"{"error": "expired"}"#),
    })
    .await;

    let store = seeded_store();
    let expired = Arc::new(AtomicBool::new(false));
    let gateway = Gateway::new(&ApiConfig::new(server.base_url.clone()), store.clone())
        .with_expiry_hook(Arc::new(FlagHook(expired.clone())));

    let err = gateway
        .get::<Value>("/blogs/1/posts", &[])
        .await
        .unwrap_err();
    assert!(err.is_session_expired());

    // No retry after a failed refresh.
    assert_eq!(server.requests_to("/blogs/1/posts").await.len(), 1);
    assert!(store.load().await.is_none());
    assert!(expired.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_login_401_is_never_retried() {
    let server = StubServer::start(|_| StubResponse::json(401, r#"{"error": "bad credentials"}"#))
        .await;
    let gateway = Gateway::new(
        &ApiConfig::new(server.base_url.clone()),
        Arc::new(MemorySessionStore::new()),
    );

    let err = gateway
        .post::<Value, _>(
            quill_client::LOGIN_PATH,
            &json!({"email": "x@example.com", "password": "nope"}),
        )
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));

    assert_eq!(server.requests_to("/auth/login").await.len(), 1);
    assert!(server.requests_to("/auth/refresh").await.is_empty());
}

#[tokio::test]
async fn test_401_without_stored_session_fails_fast() {
    let server = StubServer::start(|_| StubResponse::json(401, "{}")).await;
    let gateway = Gateway::new(
        &ApiConfig::new(server.base_url.clone()),
        Arc::new(MemorySessionStore::new()),
    );

    let err = gateway.get::<Value>("/blogs", &[]).await.unwrap_err();
    assert!(matches!(err, QuillError::NotAuthenticated));

    assert_eq!(server.requests_to("/blogs").await.len(), 1);
    assert!(server.requests_to("/auth/refresh").await.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_401s_share_one_refresh() -> anyhow::Result<()> {
    // The refresh answer is held open so the second 401 has time to queue
    // on the gate instead of issuing its own refresh.
    let server = StubServer::start(|req| match req.path() {
        "/auth/refresh" => {
            StubResponse::json(200, REFRESH_OK).with_delay(Duration::from_millis(150))
        }
        _ => {
            if req.header("authorization") == Some("Bearer token-2") {
                StubResponse::json(200, "{}")
            } else {
                StubResponse::json(401, "{}")
            }
        }
    })
    .await;

    let store = seeded_store();
    let gateway = Arc::new(Gateway::new(
        &ApiConfig::new(server.base_url.clone()),
        store.clone(),
    ));

    let first = {
        let gateway = gateway.clone();
        async move { gateway.get::<Value>("/posts/1", &[]).await }
    };
    let second = {
        let gateway = gateway.clone();
        async move { gateway.get::<Value>("/posts/2", &[]).await }
    };
    let (first, second) = tokio::join!(first, second);
    first?;
    second?;

    assert_eq!(
        server.requests_to("/auth/refresh").await.len(),
        1,
        "exactly one refresh reaches the wire per expiry event"
    );
    assert_eq!(
        store.load().await,
        Some(AuthSession::new("token-2", "refresh-2"))
    );
    Ok(())
}
