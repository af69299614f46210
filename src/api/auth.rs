// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Signup, login, logout, and session-check handlers.

use axum::{extract::State, http::StatusCode, Json};
use tower_cookies::{cookie::time::Duration, Cookie, Cookies};
use tracing::info;

use crate::{
    auth::{Auth, PERSISTENT_SESSION_DAYS, SESSION_COOKIE},
    error::ApiError,
    models::{CheckAuthResponse, LoginRequest, LoginResponse, MessageResponse, SignupRequest},
    state::AppState,
    storage::CredentialRepository,
};

pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    // Absent fields fold into the empty string; the repository rejects
    // both the same way, with a 400.
    let username = request.username.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    let repo = CredentialRepository::new(&state.storage);
    repo.register(&username, &password)?;

    info!(username = %username, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let username = request.username.unwrap_or_default();
    let password = request.password.unwrap_or_default();
    if username.is_empty() || password.is_empty() {
        return Err(ApiError::bad_request("Username and password are required"));
    }

    let repo = CredentialRepository::new(&state.storage);
    repo.verify(&username, &password)?;

    let token = state
        .sessions
        .create_session(&username, request.remember_me)
        .await;

    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_path("/");
    if request.remember_me {
        cookie.set_max_age(Duration::days(PERSISTENT_SESSION_DAYS));
    }
    cookies.add(cookie);

    info!(username = %username, remember_me = request.remember_me, "user logged in");
    Ok(Json(LoginResponse {
        message: "Logged in successfully".to_string(),
        username,
    }))
}

pub async fn logout(
    Auth(user): Auth,
    State(state): State<AppState>,
    cookies: Cookies,
) -> Json<MessageResponse> {
    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        state.sessions.destroy_session(cookie.value()).await;
    }

    let mut removal = Cookie::from(SESSION_COOKIE);
    removal.set_path("/");
    cookies.remove(removal);

    info!(username = %user.username, "user logged out");
    Json(MessageResponse::new("Logged out successfully"))
}

pub async fn check_auth(
    State(state): State<AppState>,
    cookies: Cookies,
) -> (StatusCode, Json<CheckAuthResponse>) {
    let username = match cookies.get(SESSION_COOKIE) {
        Some(cookie) => state.sessions.current_user(cookie.value()).await,
        None => None,
    };

    match username {
        Some(username) => (
            StatusCode::OK,
            Json(CheckAuthResponse {
                username: Some(username),
            }),
        ),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(CheckAuthResponse { username: None }),
        ),
    }
}
