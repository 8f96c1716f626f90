pub mod account;
pub mod handlers;
pub mod password;
pub mod store;
pub mod validate;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use store::CustomerStore;

pub async fn new(port: u16, dsn: String) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&dsn)
        .await?;

    let store = CustomerStore::new(pool);
    store.ensure_schema().await?;

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on port {port}");

    axum::serve(listener, router(store).into_make_service()).await?;

    Ok(())
}

/// Build the HTTP router, split out so tests can drive it directly.
pub fn router(store: CustomerStore) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/login", post(handlers::login))
        .route("/register", post(handlers::register))
        .layer(Extension(store))
        .layer(TraceLayer::new_for_http())
}
