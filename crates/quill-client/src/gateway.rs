//! The authenticated request gateway.
//!
//! Every HTTP call to the platform goes through [`Gateway`]: it composes
//! the full URL from the configured base, attaches the JSON content type
//! and the stored bearer token, and owns the one resilience policy this
//! client has: a single-flight token refresh on authorization failure.
//! It deliberately does nothing else: no backoff, no circuit breaking, no
//! timeouts. This is a thin transport, not a resilient client.

use quill_core::config::ApiConfig;
use quill_core::error::{QuillError, Result};
use quill_core::session::{AuthSession, SessionStore};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const REFRESH_PATH: &str = "/auth/refresh";
pub const ME_PATH: &str = "/auth/me";

/// Flat query map. `None` and empty-string values are dropped before the
/// query string is built.
pub type QueryPairs<'a> = &'a [(&'a str, Option<String>)];

/// Invoked when the gateway gives up on a session (the refresh token was
/// rejected). Embedders hook their "navigate to the login screen" here;
/// the failure also surfaces to the caller as
/// [`QuillError::SessionExpired`].
pub trait AuthExpiredHook: Send + Sync {
    fn on_session_expired(&self);
}

/// Default hook that does nothing beyond the returned error.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAuthExpiredHook;

impl AuthExpiredHook for NoopAuthExpiredHook {
    fn on_session_expired(&self) {}
}

enum Payload<'a> {
    None,
    Json(&'a Value),
    Multipart {
        field: &'a str,
        file_name: &'a str,
        bytes: &'a [u8],
    },
}

/// Single choke point for all network I/O against the platform API.
///
/// The session store is injected and shared; the gateway never reads
/// tokens from anywhere else. Construct once per application and share via
/// `Arc`.
pub struct Gateway {
    http: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
    /// Gate serializing token refreshes. 401 handlers that arrive while a
    /// refresh is in flight queue on this lock, then observe the rotated
    /// pair instead of issuing their own refresh.
    refresh_gate: Mutex<()>,
    expiry_hook: Arc<dyn AuthExpiredHook>,
}

impl Gateway {
    pub fn new(config: &ApiConfig, session: Arc<dyn SessionStore>) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
            refresh_gate: Mutex::new(()),
            expiry_hook: Arc::new(NoopAuthExpiredHook),
        }
    }

    /// Replaces the session-expiry hook.
    pub fn with_expiry_hook(mut self, hook: Arc<dyn AuthExpiredHook>) -> Self {
        self.expiry_hook = hook;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // Verbs
    // ========================================================================

    pub async fn get<T: DeserializeOwned>(&self, path: &str, params: QueryPairs<'_>) -> Result<T> {
        let value = self.request(Method::GET, path, params, None, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let body = serde_json::to_value(body)?;
        let value = self
            .request(Method::POST, path, &[], Some(&body), None)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let body = serde_json::to_value(body)?;
        let value = self
            .request(Method::PUT, path, &[], Some(&body), None)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let value = self.request(Method::DELETE, path, &[], None, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Multipart file upload. Unlike the JSON verbs this does not set the
    /// JSON content type; the part's type is guessed from the file name.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<T> {
        let payload = Payload::Multipart {
            field,
            file_name,
            bytes: &bytes,
        };
        let value = self.dispatch(Method::POST, path, &[], payload, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// The general form behind the verbs: sends one request and returns
    /// the decoded JSON body. A 204 yields the empty-object sentinel
    /// without touching the body. Caller-supplied `headers` are merged,
    /// but the content type and authorization defaults always win.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        params: QueryPairs<'_>,
        body: Option<&Value>,
        headers: Option<&HeaderMap>,
    ) -> Result<Value> {
        let retained = retained_pairs(params);
        let payload = match body {
            Some(body) => Payload::Json(body),
            None => Payload::None,
        };
        self.dispatch(method, path, &retained, payload, headers).await
    }

    // ========================================================================
    // Core dispatch
    // ========================================================================

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        params: &[(String, String)],
        payload: Payload<'_>,
        extra_headers: Option<&HeaderMap>,
    ) -> Result<Value> {
        let url = self.endpoint(path);
        let request_id = Uuid::new_v4();
        // The login call is never retried: a 401 there means bad
        // credentials, not an expired access token.
        let mut may_refresh = !is_auth_path(path);

        loop {
            let mut request = self.http.request(method.clone(), url.as_str());
            if !params.is_empty() {
                request = request.query(params);
            }
            if let Some(extra) = extra_headers {
                request = request.headers(extra.clone());
            }
            request = match &payload {
                Payload::None => request.header(CONTENT_TYPE, "application/json"),
                Payload::Json(body) => {
                    request.json(body).header(CONTENT_TYPE, "application/json")
                }
                Payload::Multipart {
                    field,
                    file_name,
                    bytes,
                } => {
                    let mime = mime_guess::from_path(file_name).first_or_octet_stream();
                    let part = reqwest::multipart::Part::bytes(bytes.to_vec())
                        .file_name((*file_name).to_string())
                        .mime_str(mime.essence_str())?;
                    request.multipart(reqwest::multipart::Form::new().part((*field).to_string(), part))
                }
            };

            let session = self.session.load().await;
            let observed_token = session.as_ref().map(|s| s.access_token.clone());
            if let Some(session) = &session {
                request = request.header(
                    AUTHORIZATION,
                    format!("Bearer {}", session.access_token),
                );
            }

            tracing::debug!(%request_id, %method, path, "dispatching request");
            let response = match request.send().await {
                Ok(response) => response,
                Err(err) => {
                    tracing::error!(%request_id, path, error = %err, "request never reached the server");
                    return Err(err.into());
                }
            };

            if response.status() == StatusCode::UNAUTHORIZED && may_refresh {
                may_refresh = false;
                tracing::debug!(%request_id, path, "access token rejected, refreshing session");
                self.refresh_session(observed_token).await?;
                continue;
            }

            return self.decode(request_id, path, response).await;
        }
    }

    async fn decode(
        &self,
        request_id: Uuid,
        path: &str,
        response: reqwest::Response,
    ) -> Result<Value> {
        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Object(Map::new()));
        }

        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let body = response.text().await.map_err(QuillError::from)?;

        if !status.is_success() {
            let err = QuillError::http(status.as_u16(), status_text, body);
            tracing::error!(%request_id, path, status = status.as_u16(), "request failed");
            return Err(err);
        }

        serde_json::from_str(&body).map_err(|err| {
            tracing::error!(%request_id, path, error = %err, "response body is not valid JSON");
            QuillError::from(err)
        })
    }

    // ========================================================================
    // Token refresh
    // ========================================================================

    /// Exchanges the stored refresh token for a new pair, at most once per
    /// expiry event. `observed_token` is the access token the failing
    /// request was sent with; when the stored token no longer matches it,
    /// another caller already refreshed while we were queued on the gate
    /// and the caller can simply retry.
    async fn refresh_session(&self, observed_token: Option<String>) -> Result<()> {
        let _in_flight = self.refresh_gate.lock().await;

        let current = self.session.load().await;
        match (&observed_token, &current) {
            (Some(observed), Some(current)) if *observed != current.access_token => {
                return Ok(());
            }
            (None, Some(_)) => {
                // A session appeared after the failing request went out
                // (concurrent login); retry with it.
                return Ok(());
            }
            _ => {}
        }

        let Some(current) = current else {
            self.expire_session().await;
            return Err(QuillError::NotAuthenticated);
        };

        match self.exchange_refresh_token(&current.refresh_token).await {
            Ok(renewed) => {
                // The rotated pair must be visible before any retry goes out.
                self.session.store(renewed).await?;
                tracing::debug!("session tokens rotated");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "token refresh rejected, clearing session");
                self.expire_session().await;
                Err(QuillError::SessionExpired)
            }
        }
    }

    async fn exchange_refresh_token(&self, refresh_token: &str) -> Result<AuthSession> {
        let response = self
            .http
            .post(self.endpoint(REFRESH_PATH))
            .json(&serde_json::json!({ "refreshToken": refresh_token }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(QuillError::http(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
                body,
            ));
        }

        Ok(response.json::<AuthSession>().await?)
    }

    async fn expire_session(&self) {
        if let Err(err) = self.session.clear().await {
            tracing::warn!(error = %err, "failed to clear stored session");
        }
        self.expiry_hook.on_session_expired();
    }

    fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

/// The refresh-exempt endpoints: a 401 from these is a final answer.
fn is_auth_path(path: &str) -> bool {
    let normalized = path.trim_start_matches('/');
    normalized == LOGIN_PATH.trim_start_matches('/')
        || normalized == REFRESH_PATH.trim_start_matches('/')
}

fn retained_pairs(params: QueryPairs<'_>) -> Vec<(String, String)> {
    params
        .iter()
        .filter_map(|(key, value)| match value {
            Some(value) if !value.is_empty() => Some(((*key).to_string(), value.clone())),
            _ => None,
        })
        .collect()
}
