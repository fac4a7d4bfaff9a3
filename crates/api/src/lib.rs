//! # Timetable API
//!
//! The web server for the class timetable service. It exposes RESTful
//! endpoints for managing a user's weekly classes, their display settings,
//! and the derived daily and weekly views.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Request processing; the view logic itself lives in `timetable-core`
//! - **Middleware**: Caller identity and error mapping
//! - **Config**: Environment-driven configuration
//!
//! Handlers talk to persistence only through [`TimetableStore`], so the
//! router can be exercised against a mock store.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for identity and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    Router,
};
use eyre::{Result, WrapErr};
use timetable_db::TimetableStore;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```no_run
/// # use std::sync::Arc;
/// # use timetable_api::ApiState;
/// # use timetable_db::PgTimetableStore;
/// # async fn example(pool: timetable_db::DbPool) {
/// let state = Arc::new(ApiState::new(Arc::new(PgTimetableStore::new(pool))));
/// let app = timetable_api::build_router(state);
/// # }
/// ```
pub struct ApiState {
    /// Persistence for class entries and settings
    pub store: Arc<dyn TimetableStore>,
}

impl ApiState {
    pub fn new(store: Arc<dyn TimetableStore>) -> Self {
        Self { store }
    }
}

/// Builds the application router with all routes and shared state attached.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Class entry management endpoints
        .merge(routes::classes::routes())
        // Daily and weekly view endpoints
        .merge(routes::views::routes())
        // Display settings endpoints
        .merge(routes::settings::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// CORS policy for the configured browser origins.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .wrap_err_with(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            HeaderName::from_static(middleware::auth::USER_ID_HEADER),
        ])
        .allow_origin(origins)
        .allow_credentials(true))
}

/// Starts the API server with the provided configuration and store
///
/// Initializes logging, builds the router, applies CORS, request tracing
/// and the request timeout, then serves until the listener fails.
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn TimetableStore>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(store));
    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)?),
        None => app,
    };

    // Request tracing and timeout
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
