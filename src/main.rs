#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
// easier to use when using the functions as callback of foreign functions
#![allow(clippy::needless_pass_by_value)]

use std::net::SocketAddr;

use anyhow::Result;
use axum::Extension;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::prelude::*;

use crate::storage::Config as StorageConfig;
use crate::storage::Memory;
use crate::storage::Postgres;
use crate::storage::Storage;
use crate::utils::env_var_optional;
use crate::utils::env_var_or_else;

mod api;
mod graceful_shutdown;
mod notes;
mod operations;
mod page;
mod storage;
#[cfg(test)]
mod tests;
mod utils;

const DEFAULT_RUST_LOG: &str = "mantir=debug,tower_http=debug";
const DEFAULT_ADDRESS: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<()> {
    setup_environment();
    setup_tracing();

    let app = setup_app(StorageConfig::DetectConfig).await?;

    let address = setup_address()?;
    let listener = TcpListener::bind(address).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(graceful_shutdown::handler())
        .await?;

    Ok(())
}

/// Create and setup the app with its storage
///
/// # Errors
///
/// Will return `Err` if the storage fails to load:
/// - Database connection
/// - Migrations
pub async fn setup_app(config: StorageConfig) -> Result<Router> {
    let router = match config {
        StorageConfig::DetectConfig => {
            if let Some(database_url) = env_var_optional("DATABASE_URL") {
                create_router(Postgres::connect(&database_url).await?)
            } else {
                tracing::warn!("`DATABASE_URL` is not set, notes are kept in memory only");
                create_router(Memory::new())
            }
        }
        StorageConfig::ExistingConnection(pool) => create_router(Postgres::from_pool(pool).await?),
        StorageConfig::Memory => create_router(Memory::new()),
    };

    Ok(router)
}

/// Create the router for Mantir
fn create_router<S: Storage>(storage: S) -> Router {
    Router::new()
        .nest("/api", api::router::<S>())
        .merge(page::router::<S>())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(storage)),
        )
}

fn setup_environment() {
    dotenvy::dotenv().ok();
}

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::registry;

    registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_RUST_LOG.into()),
        ))
        .with(fmt::layer())
        .init();
}

fn setup_address() -> Result<SocketAddr> {
    let mut address =
        env_var_or_else("ADDRESS", || String::from(DEFAULT_ADDRESS)).parse::<SocketAddr>()?;

    // optional override of just the port
    if let Some(port) = env_var_optional("PORT") {
        address.set_port(port.parse::<u16>()?);
    }

    Ok(address)
}
