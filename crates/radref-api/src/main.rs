use tracing_subscriber::EnvFilter;

use radref_api::config::{ApiConfig, LogFormat};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ApiConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .init(),
    }

    // Load and self-check the catalogue before accepting traffic.
    let schemes = radref_schemes::registry().len();

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, schemes, "listening");

    axum::serve(listener, radref_api::router()).await?;
    Ok(())
}
