mod config;
mod error;
mod routes;

use portfolio_client::catalog::Catalog;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    match dotenvy::dotenv() {
        Ok(path) => tracing::info!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e.into()),
    }

    let config = ServerConfig::from_env()?;

    // Refuse to serve a gallery with gaps in its metadata.
    let catalog = Catalog::bundled()?;
    tracing::info!(artworks = catalog.len(), "artwork catalog loaded");

    let app = routes::app(&config)?;
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, assets = %config.assets_dir.display(), "portfolio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
