//! Authentication service.
//!
//! Thin orchestration over the gateway's auth endpoints: login and
//! registration persist the issued token pair and remember the user,
//! `restore` rebuilds the identity from a stored session on startup, and
//! logout tears both down. Token refresh itself lives in the gateway.

use crate::gateway::{Gateway, LOGIN_PATH, ME_PATH, REGISTER_PATH};
use quill_core::error::{QuillError, Result};
use quill_core::session::{AuthSession, SessionStore, User};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Login payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Registration payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AuthEnvelope {
    user: User,
    tokens: AuthSession,
}

#[derive(Debug, Deserialize)]
struct MeEnvelope {
    user: User,
}

/// Holds the authenticated identity for the lifetime of the app instance.
pub struct AuthService {
    gateway: Arc<Gateway>,
    session: Arc<dyn SessionStore>,
    current_user: RwLock<Option<User>>,
}

impl AuthService {
    pub fn new(gateway: Arc<Gateway>, session: Arc<dyn SessionStore>) -> Self {
        Self {
            gateway,
            session,
            current_user: RwLock::new(None),
        }
    }

    /// Exchanges credentials for a session.
    ///
    /// On success the token pair is persisted and the user becomes the
    /// current identity. A 401 here is a credentials failure and is never
    /// retried by the gateway.
    pub async fn login(&self, credentials: &Credentials) -> Result<User> {
        let envelope: AuthEnvelope = self.gateway.post(LOGIN_PATH, credentials).await?;
        self.session.store(envelope.tokens).await?;
        *self.current_user.write().await = Some(envelope.user.clone());
        Ok(envelope.user)
    }

    /// Creates an account; on success behaves exactly like [`login`].
    ///
    /// [`login`]: AuthService::login
    pub async fn register(&self, registration: &Registration) -> Result<User> {
        let envelope: AuthEnvelope = self.gateway.post(REGISTER_PATH, registration).await?;
        self.session.store(envelope.tokens).await?;
        *self.current_user.write().await = Some(envelope.user.clone());
        Ok(envelope.user)
    }

    /// Rebuilds the authenticated identity from the stored session, e.g.
    /// after an app restart. Fails with [`QuillError::NotAuthenticated`]
    /// when no session is stored.
    pub async fn restore(&self) -> Result<User> {
        if self.session.load().await.is_none() {
            return Err(QuillError::NotAuthenticated);
        }
        let envelope: MeEnvelope = self.gateway.get(ME_PATH, &[]).await?;
        *self.current_user.write().await = Some(envelope.user.clone());
        Ok(envelope.user)
    }

    /// Clears the stored session and the current identity. Local only;
    /// the platform has no logout endpoint.
    pub async fn logout(&self) -> Result<()> {
        self.session.clear().await?;
        *self.current_user.write().await = None;
        Ok(())
    }

    pub async fn current_user(&self) -> Option<User> {
        self.current_user.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current_user.read().await.is_some()
    }
}
