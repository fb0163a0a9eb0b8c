//! Static host for the Tarsila landing bundle.

mod config;
mod error;
mod routes;

use std::process::ExitCode;

use config::ServerConfig;
use error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing `.env` is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "tarsila server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    if !config.index_html().is_file() {
        tracing::warn!(dist = %config.dist_dir.display(), "client bundle not found; build it with `trunk build` in client/");
    }

    let app = routes::app(&config);
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|source| ServerError::Bind { addr: config.bind, source })?;

    tracing::info!(addr = %config.bind, "tarsila listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
