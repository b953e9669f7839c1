// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! HTTP surface
//!
//! - `GET /history` returns the history log, newest first
//! - `POST /generate` generates content for a brief and records it
//!
//! Every error is returned as `{"error": "<message>"}`.

mod error;
mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::{CopysmithError, Result};
use crate::generation::GenerationService;

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    service: Arc<GenerationService>,
}

impl AppState {
    pub fn new(service: Arc<GenerationService>) -> Self {
        Self { service }
    }
}

/// Build the application router.
///
/// With `cors` set, requests from any origin are allowed.
pub fn build_router(state: AppState, cors: bool) -> Router {
    let router = Router::new()
        .route("/history", get(handlers::get_history))
        .route("/generate", post(handlers::generate))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Serve `router` on `host:port` until Ctrl-C.
pub async fn serve(host: &str, port: u16, router: Router) -> Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .map_err(|e| CopysmithError::Config(format!("failed to bind {}:{}: {}", host, port, e)))?;

    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
