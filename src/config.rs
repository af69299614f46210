// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup; a `.env` file in the working directory is honored.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `DATA_DIR` | Root directory for persisted credentials and documents | `data` |
//! | `STATIC_DIR` | Directory of frontend assets served at `/` and `/static` | `static` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `5000` |
//! | `GEMINI_API_KEY` | Gemini API key | Required |
//! | `GEMINI_API_BASE_URL` | Gemini API base URL | `https://generativelanguage.googleapis.com` |
//! | `GEMINI_MODEL` | Gemini model identifier | `gemini-1.5-flash` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

/// Environment variable name for the persistent data directory path.
///
/// Holds the credential table (`users.json`) and the per-user document
/// files (`documents/{username}_{kind}.json`).
pub const DATA_DIR_ENV: &str = "DATA_DIR";

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Environment variable name for the static frontend directory.
pub const STATIC_DIR_ENV: &str = "STATIC_DIR";

/// Default static frontend directory.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Environment variable name for the bind address.
pub const HOST_ENV: &str = "HOST";

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Environment variable name for the bind port.
pub const PORT_ENV: &str = "PORT";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 5000;

/// Environment variable name for the logging format (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Fallback `RUST_LOG` filter when none is set.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";
