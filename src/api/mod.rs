// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::path::PathBuf;

use axum::{
    routing::{get, post},
    Router,
};
use tower_cookies::CookieManagerLayer;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::{DEFAULT_STATIC_DIR, STATIC_DIR_ENV};
use crate::state::AppState;

pub mod auth;
pub mod health;
pub mod progress;
pub mod summary;
pub mod syllabus;

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/check_auth", get(auth::check_auth))
        .route("/parse_syllabus", post(syllabus::parse_syllabus))
        .route("/summarize_syllabus", post(syllabus::summarize_syllabus))
        .route("/syllabus/{user}", get(syllabus::get_syllabus))
        .route(
            "/progress/{user}",
            get(progress::get_progress).post(progress::update_progress),
        )
        .route("/summary/{user}", get(summary::get_summary));

    let static_dir =
        std::env::var(STATIC_DIR_ENV).unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string());
    let index_file = PathBuf::from(&static_dir).join("index.html");

    Router::new()
        .route("/health", get(health::health))
        .nest("/api", api_routes)
        .route_service("/", ServeFile::new(index_file))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
