//! Identity-provider wire types (GoTrue-style `/auth/v1`).
//!
//! ARCHITECTURE
//! ============
//! The browser signs in with a password grant, receives an access/refresh
//! token pair plus the user record, and persists that session locally. Every
//! REST call then carries the access token so row-level policies apply.
//! Session-change notifications are produced client-side as [`AuthEvent`]s.

use serde::{Deserialize, Serialize};

use crate::error::BackendError;

pub const PASSWORD_GRANT_PATH: &str = "/auth/v1/token?grant_type=password";
pub const REFRESH_GRANT_PATH: &str = "/auth/v1/token?grant_type=refresh_token";
pub const LOGOUT_PATH: &str = "/auth/v1/logout";
pub const USER_PATH: &str = "/auth/v1/user";
pub const HEALTH_PATH: &str = "/auth/v1/health";

/// Seconds of slack before expiry at which a session is treated as stale.
pub const EXPIRY_MARGIN_SECS: i64 = 30;

/// Body of a password grant.
#[derive(Debug, Serialize)]
pub struct PasswordGrant<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of a refresh-token grant.
#[derive(Debug, Serialize)]
pub struct RefreshGrant<'a> {
    pub refresh_token: &'a str,
}

/// Identity record issued by the provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

impl AuthUser {
    /// Avatar URL stored in the identity's metadata, if any.
    #[must_use]
    pub fn avatar_url(&self) -> Option<String> {
        self.user_metadata
            .get("avatar_url")
            .and_then(serde_json::Value::as_str)
            .filter(|url| !url.is_empty())
            .map(str::to_owned)
    }
}

/// Authenticated session: token pair plus the identity it belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: i64,
    /// Unix seconds; filled from `expires_in` when the provider omits it.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

impl AuthSession {
    /// Whether the access token is expired (or within the safety margin) at `now_secs`.
    #[must_use]
    pub fn is_expired(&self, now_secs: i64) -> bool {
        match self.expires_at {
            Some(at) => now_secs + EXPIRY_MARGIN_SECS >= at,
            None => false,
        }
    }
}

/// Session lifecycle notifications delivered to subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
}

impl AuthEvent {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SignedIn => "SIGNED_IN",
            Self::SignedOut => "SIGNED_OUT",
            Self::TokenRefreshed => "TOKEN_REFRESHED",
            Self::UserUpdated => "USER_UPDATED",
        }
    }
}

#[derive(Debug, Deserialize)]
struct AuthErrorBody {
    error: Option<String>,
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
}

/// Parse a token-grant response, stamping `expires_at` from `expires_in` when absent.
///
/// # Errors
///
/// Returns [`BackendError::Parse`] when the body is not a session document.
pub fn parse_session(body: &str, now_secs: i64) -> Result<AuthSession, BackendError> {
    let mut session: AuthSession = serde_json::from_str(body).map_err(|e| BackendError::Parse(e.to_string()))?;
    if session.expires_at.is_none() && session.expires_in > 0 {
        session.expires_at = Some(now_secs + session.expires_in);
    }
    Ok(session)
}

/// Build a [`BackendError::Auth`] from a failed identity response.
///
/// The provider reports errors under several keys depending on the endpoint;
/// the most specific one present wins.
#[must_use]
pub fn auth_error(status: u16, body: &str) -> BackendError {
    let message = serde_json::from_str::<AuthErrorBody>(body)
        .ok()
        .and_then(|b| b.error_description.or(b.msg).or(b.message).or(b.error))
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                format!("status {status}")
            } else {
                body.trim().to_owned()
            }
        });
    BackendError::Auth { status, message }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
