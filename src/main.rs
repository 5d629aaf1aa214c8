//! TuberTreats Backend
//!
//! A REST backend tracking potato orders, customers, drivers and toppings,
//! held entirely in memory.

mod api;
mod config;
mod db;
mod errors;
mod models;
mod views;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Store;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting TuberTreats Backend");
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Order customer check: {:?}", config.customer_check);

    let store = if config.seed {
        tracing::info!("Loading sample data");
        Store::seeded()
    } else {
        Store::new()
    };

    // Create application state
    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Orders
        .route("/tuberorders", get(api::list_orders).post(api::create_order))
        .route(
            "/tuberorders/{id}",
            get(api::get_order).put(api::assign_driver),
        )
        .route("/tuberorders/{id}/complete", post(api::complete_order))
        // Toppings
        .route("/toppings", get(api::list_toppings))
        .route("/toppings/{id}", get(api::get_topping))
        // Drivers
        .route("/tuberdrivers", get(api::list_drivers))
        .route("/tuberdrivers/{id}", get(api::get_driver))
        // Customers
        .route(
            "/customers",
            get(api::list_customers).post(api::create_customer),
        )
        .route(
            "/customers/{id}",
            get(api::get_customer).delete(api::delete_customer),
        )
        // Order toppings
        .route(
            "/tubertoppings",
            get(api::list_order_toppings).post(api::create_order_topping),
        )
        .route("/tubertoppings/{id}", delete(api::delete_order_topping))
        // Health check
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

/// Resolve when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
