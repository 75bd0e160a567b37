//! # ClinicDesk API
//!
//! The web server of the ClinicDesk clinic-management service. It exposes
//! JSON endpoints for appointment slots, holiday schedules, doctor sessions
//! and prescriptions.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Permission checks and error mapping
//! - **Config**: Environment-driven configuration
//!
//! The API uses Axum as the web framework and SQLx for database interactions.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Permission checks and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{http::HeaderValue, Router};
use clinicdesk_core::{
    clock::{Clock, SystemClock},
    notify::{LogNotifier, Notifier},
    store::AvailabilityStore,
};
use clinicdesk_db::PgClinicStore;
use eyre::Result;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
    /// Read side of slot generation
    pub store: Arc<dyn AvailabilityStore>,
    /// Source of the clinic's current local time
    pub clock: Arc<dyn Clock>,
    /// Outbound patient notifications
    pub notifier: Arc<dyn Notifier>,
}

impl ApiState {
    /// State backed by PostgreSQL, the system clock and the logging notifier.
    pub fn new(db_pool: PgPool, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Arc::new(PgClinicStore::new(db_pool.clone())),
            db_pool,
            clock,
            notifier: Arc::new(LogNotifier),
        }
    }
}

/// Builds the application router with every route and request tracing.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Slot and weekly availability endpoints
        .merge(routes::availability::routes())
        // Holiday schedule endpoints
        .merge(routes::holiday::routes())
        // Doctor session endpoints
        .merge(routes::session::routes())
        // Prescription endpoints
        .merge(routes::prescription::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the API server with the provided configuration and database connection
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// let config = clinicdesk_api::config::ApiConfig::from_env()?;
/// let db_pool = clinicdesk_db::create_pool(&config.database_url).await?;
/// clinicdesk_api::start_server(config, db_pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let clock = SystemClock::with_offset_minutes(config.clinic_utc_offset_minutes)?;
    let state = Arc::new(ApiState::new(db_pool, Arc::new(clock)));

    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect::<Vec<_>>();

        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
                axum::http::HeaderName::from_static(middleware::auth::USER_ID_HEADER),
                axum::http::HeaderName::from_static(middleware::auth::USER_ROLE_HEADER),
            ])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)))
            .into_inner(),
    );

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
