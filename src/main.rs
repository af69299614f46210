// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

mod ai;
mod api;
mod auth;
mod config;
mod error;
mod models;
mod state;
mod storage;

use std::{env, net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ai::{GeminiClient, SyllabusAi};
use api::router;
use state::AppState;
use storage::{FileStorage, StoragePaths};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let data_dir =
        env::var(config::DATA_DIR_ENV).unwrap_or_else(|_| config::DEFAULT_DATA_DIR.to_string());
    let storage = FileStorage::open(StoragePaths::new(&data_dir))
        .expect("Failed to initialize the data directory");

    let ai: Arc<dyn SyllabusAi> = match GeminiClient::from_env() {
        Ok(client) => Arc::new(client),
        Err(e) => {
            warn!(error = %e, "Gemini is not configured; syllabus AI endpoints will fail");
            Arc::new(GeminiClient::unconfigured())
        }
    };

    let state = AppState::new(storage, ai);
    let app = router(state);

    let host = env::var(config::HOST_ENV).unwrap_or_else(|_| config::DEFAULT_HOST.to_string());
    let port: u16 = env::var(config::PORT_ENV)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(config::DEFAULT_PORT);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");

    info!(%addr, %data_dir, "study tracker server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    let json = env::var(config::LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl-C handler");
    info!("shutdown signal received");
}
