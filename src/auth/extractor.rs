// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for session-authenticated users.
//!
//! Use the `Auth` extractor in handlers to require authentication:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(user): Auth) -> impl IntoResponse {
//!     // user is AuthenticatedUser
//! }
//! ```
//!
//! The extractor reads the session cookie and resolves it against the
//! in-memory session store; requests without a valid session are rejected
//! with 401 before the handler runs.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_cookies::Cookies;

use super::{session::SESSION_COOKIE, AuthError};
use crate::state::AppState;

/// The identity attached to an authenticated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
}

impl AuthenticatedUser {
    /// Enforce the ownership invariant: per-user endpoints may only touch
    /// the document set of the session's own username. The username named
    /// in the URL path is irrelevant to what would be accessed; a mismatch
    /// is rejected outright.
    pub fn ensure_owns(&self, username: &str) -> Result<(), AuthError> {
        if self.username == username {
            Ok(())
        } else {
            Err(AuthError::Forbidden)
        }
    }
}

/// Extractor for session-authenticated users.
pub struct Auth(pub AuthenticatedUser);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // CookieManagerLayer populates this; treat its absence like a
        // request with no cookies at all.
        let cookies = Cookies::from_request_parts(parts, state)
            .await
            .map_err(|_| AuthError::MissingSession)?;

        let cookie = cookies.get(SESSION_COOKIE).ok_or(AuthError::MissingSession)?;

        let username = state
            .sessions
            .current_user(cookie.value())
            .await
            .ok_or(AuthError::InvalidSession)?;

        Ok(Auth(AuthenticatedUser { username }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ownership_check_passes_for_own_username() {
        let user = AuthenticatedUser {
            username: "alice".to_string(),
        };
        assert!(user.ensure_owns("alice").is_ok());
    }

    #[test]
    fn ownership_check_rejects_other_usernames() {
        let user = AuthenticatedUser {
            username: "alice".to_string(),
        };
        let err = user.ensure_owns("bob").unwrap_err();
        assert!(matches!(err, AuthError::Forbidden));
    }
}
