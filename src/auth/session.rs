// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory session store.
//!
//! Maps opaque session tokens (UUIDs carried in an HTTP-only cookie) to the
//! authenticated username. Sessions are ephemeral: non-persistent sessions
//! live until logout or process restart, persistent ("remember me")
//! sessions additionally expire server-side after a fixed window.

use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

/// Lifetime of persistent ("remember me") sessions, in days.
pub const PERSISTENT_SESSION_DAYS: i64 = 30;

#[derive(Debug, Clone)]
struct SessionRecord {
    username: String,
    /// Recorded for expiry bookkeeping, not read on the request path
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
    /// `None` for browser-session-scoped sessions.
    expires_at: Option<DateTime<Utc>>,
}

/// In-memory session store shared across request handlers.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionRecord>>>,
}

impl SessionStore {
    /// Create a new empty session store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for a user and return the token for the cookie.
    ///
    /// `persistent` sessions get a server-side expiry matching the cookie
    /// Max-Age; non-persistent sessions have none (the cookie dies with
    /// the browser session).
    pub async fn create_session(&self, username: &str, persistent: bool) -> String {
        let token = Uuid::new_v4().to_string();
        let now = Utc::now();
        let record = SessionRecord {
            username: username.to_string(),
            created_at: now,
            expires_at: persistent.then(|| now + Duration::days(PERSISTENT_SESSION_DAYS)),
        };

        let mut sessions = self.sessions.write().await;
        sessions.insert(token.clone(), record);
        token
    }

    /// Resolve a token to its username, if the session is still valid.
    ///
    /// Expired sessions are removed on access.
    pub async fn current_user(&self, token: &str) -> Option<String> {
        let expired = {
            let sessions = self.sessions.read().await;
            let record = sessions.get(token)?;
            match record.expires_at {
                Some(expires_at) if expires_at <= Utc::now() => true,
                _ => return Some(record.username.clone()),
            }
        };

        if expired {
            self.sessions.write().await.remove(token);
        }
        None
    }

    /// Destroy a session. Idempotent: unknown tokens are a no-op.
    pub async fn destroy_session(&self, token: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);
    }

    /// Number of active sessions (for the health endpoint and tests).
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
