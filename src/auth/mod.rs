// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Session-based authentication.
//!
//! Identity is carried by an opaque UUID token in an HTTP-only cookie and
//! resolved server-side by [`SessionStore`]. Handlers require
//! authentication by taking the [`Auth`] extractor; cross-user access is
//! rejected by [`AuthenticatedUser::ensure_owns`].

pub mod error;
pub mod extractor;
pub mod session;

pub use error::AuthError;
pub use extractor::{Auth, AuthenticatedUser};
pub use session::{SessionStore, PERSISTENT_SESSION_DAYS, SESSION_COOKIE};
