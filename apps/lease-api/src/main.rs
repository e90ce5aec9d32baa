//! Lease API Server - Backend for lease registration
//!
//! Provides REST endpoints for:
//! - Lease submission validation and storage
//! - Health checks
//! - The browser registration form

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use lease_core::PresencePolicy;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod error;
mod handlers;
mod models;
mod state;

use state::{AppState, StoreKind};

/// Command-line arguments for the lease API server
#[derive(Parser, Debug)]
#[command(name = "lease-api")]
#[command(about = "Lease registration API server")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3001")]
    port: u16,

    /// Host address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Required-field check: "truthy" rejects 0 and false, "explicit" only absent, null and ""
    #[arg(long, env = "LEASE_PRESENCE_POLICY", default_value = "truthy")]
    presence_policy: PresencePolicy,

    /// Where accepted leases go
    #[arg(long, env = "LEASE_STORE", value_enum, default_value_t = StoreKind::default())]
    store: StoreKind,

    /// Maximum number of leases the memory store holds before refusing writes
    #[arg(long, env = "LEASE_STORE_CAPACITY")]
    store_capacity: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Registration form
        .route("/", get(handlers::index))
        // Health check
        .route("/health", get(handlers::health))
        // Lease endpoints
        .route("/api/leases", post(handlers::create_lease))
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let app_directive = if args.verbose {
        "lease_api=debug"
    } else {
        "lease_api=info"
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::from_default_env()
                .add_directive(app_directive.parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Initializing lease API...");
    let state = Arc::new(AppState::new(
        args.store,
        args.store_capacity,
        args.presence_policy,
    ));

    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Lease API listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
