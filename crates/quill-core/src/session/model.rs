//! Session domain model.

use serde::{Deserialize, Serialize};

/// The bearer/refresh token pair issued by the platform.
///
/// Created on login or registration, replaced wholesale on refresh, and
/// destroyed on logout or when a refresh is rejected. Field names follow
/// the wire format (`accessToken`/`refreshToken`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
}

impl AuthSession {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// The authenticated account, as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}
