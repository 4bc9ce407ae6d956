//! Startup and serving failures.

use std::net::SocketAddr;

use portfolio_client::catalog::CatalogError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("failed to read .env: {0}")]
    Dotenv(#[from] dotenvy::Error),
    #[error("artwork catalog rejected: {0}")]
    Catalog(#[from] CatalogError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
