mod config;
mod errors;
mod handlers;
mod intake;
mod models;
mod payload;
mod sinks;
mod static_files;
mod submit;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::sinks::{FormEndpointService, WebhookService};

/// Main entry point for the application.
///
/// This function initializes the application, including:
/// - Logging and tracing.
/// - Configuration loading.
/// - Outbound sink clients (form endpoint, webhook).
/// - HTTP routes and middleware (CORS, request body limit).
///
/// It then starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quote_intake_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize sink clients
    let form_sink = FormEndpointService::new(&config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize form endpoint client: {}", e))?;
    tracing::info!(
        "✓ Form endpoint client initialized: {}",
        config.form_endpoint_url
    );

    let webhook_sink = WebhookService::new(&config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize webhook client: {}", e))?;
    tracing::info!("✓ Webhook client initialized: {}", config.webhook_url);

    // Build application state
    let app_state = Arc::new(handlers::AppState {
        config: config.clone(),
        form_sink,
        webhook_sink,
    });

    // Intake routes with a request body limit (form payloads are small)
    let api_routes = Router::new()
        .route(
            "/api/v1/quotes/residential",
            post(handlers::residential_quote),
        )
        .route(
            "/api/v1/quotes/commercial",
            post(handlers::commercial_quote),
        )
        .route("/api/v1/schedule-change", post(handlers::schedule_change))
        .layer(ServiceBuilder::new().layer(RequestBodyLimitLayer::new(1024 * 1024)));

    // Build final app: health check, intake routes, then static delivery
    // with SPA fallback for every unmatched path
    let app = Router::new()
        .route("/health", get(handlers::health))
        .merge(api_routes)
        .fallback(static_files::serve_spa)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
