//! # Simple Writing Backend
//!
//! Thin JSON API in front of two upstream services.
//!
//! # General Infrastructure
//! - The browser frontend never holds API keys; every LLM and email call
//!   goes through this server
//! - `/api/rewrite` and `/api/simplify` proxy a single chat-completion call
//!   and sanitize the model output before it leaves the process
//! - `/api/contact` relays the contact form as one transactional email
//! - Stateless per request: profiles and quota counters live in the
//!   external account store and are enforced client-side before a request
//!   is ever made
//!
//! # Sanitization Contract
//!
//! Some completion models leak chain-of-thought wrapped in reasoning
//! markers. The proxy strips everything up to a closing marker and any
//! paired blocks that remain, so raw reasoning content can never reach a
//! caller. This is a content boundary, not cosmetics.
//!
//! # Configuration
//!
//! Environment variables (defaults logged at startup):
//! - `RUST_PORT` (5000)
//! - `OPENROUTER_URL`, `OPENROUTER_MODEL`
//! - `APP_REFERER`, `APP_TITLE`
//! - `RESEND_URL`
//!
//! Secrets, from `/run/secrets/<NAME>` or the environment:
//! - `OPENROUTER_API_KEY`, `RESEND_API_KEY`, `CONTACT_TO_EMAIL`

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod completion;
pub mod config;
pub mod error;
pub mod mail;
pub mod routes;
pub mod state;

use routes::{contact_handler, health_handler, rewrite_handler, simplify_handler};
use state::State;

pub fn router(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/rewrite", post(rewrite_handler))
        .route("/api/simplify", post(simplify_handler))
        .route("/api/contact", post(contact_handler))
        .route("/api/health", get(health_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new();

    info!("Starting server...");
    let app = router(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
