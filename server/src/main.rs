mod config;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_LOG_FILTER, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env()?;
    let app = routes::app().map_err(ServerError::Leptos)?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "homefix listening");
    axum::serve(listener, app).await?;
    Ok(())
}
