//! Session store implementations.
//!
//! [`MemorySessionStore`] for tests and embedders that manage persistence
//! themselves; [`FileSessionStore`] for desktop use, a TOML file in the
//! user config dir.

use async_trait::async_trait;
use quill_core::error::{QuillError, Result};
use quill_core::session::{AuthSession, SessionStore};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// In-memory store; the session dies with the process.
#[derive(Default)]
pub struct MemorySessionStore {
    session: RwLock<Option<AuthSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts out already holding a session. Test convenience.
    pub fn with_session(session: AuthSession) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Option<AuthSession> {
        self.session.read().await.clone()
    }

    async fn store(&self, session: AuthSession) -> Result<()> {
        *self.session.write().await = Some(session);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.session.write().await = None;
        Ok(())
    }
}

/// On-disk layout of the session file. Kept separate from the domain model
/// so the file format can evolve independently of the wire format.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    access_token: String,
    refresh_token: String,
}

/// File-backed store: `<config-dir>/quill/session.toml`.
///
/// The file is chmod 600 on Unix. A missing or unreadable file simply
/// means "not logged in"; corruption is logged and treated the same way.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store at the default location.
    pub fn new() -> Result<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| QuillError::config("could not determine the user config directory"))?;
        Ok(Self {
            path: dir.join("quill").join("session.toml"),
        })
    }

    /// Creates a store with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Option<AuthSession> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "failed to read session file");
                return None;
            }
        };
        match toml::from_str::<StoredSession>(&content) {
            Ok(stored) => Some(AuthSession::new(stored.access_token, stored.refresh_token)),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "session file is corrupt, ignoring it");
                None
            }
        }
    }

    async fn store(&self, session: AuthSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let stored = StoredSession {
            access_token: session.access_token,
            refresh_token: session.refresh_token,
        };
        tokio::fs::write(&self.path, toml::to_string_pretty(&stored)?).await?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600)).await?;
        }

        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
