use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use holidayweeks::configuration::{Configuration, ServerSettings};
use holidayweeks::server::router::{AppState, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env may set RUST_LOG, so it is read before the subscriber is installed
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => {},
        Err(err) => warn!(%err, "could not read .env"),
    }

    let settings = ServerSettings::from_env()?;
    let configuration = Configuration::load(settings.holiday_config.as_deref())
        .inspect_err(|err| error!(%err, "holiday configuration could not be loaded"))?;
    let state = AppState::new(Arc::new(configuration.into_holiday_source()), &settings.default_country);

    let listener = TcpListener::bind(settings.socket_addr()).await?;
    info!(addr = %listener.local_addr()?, "holiday API server running");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("holiday API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(%err, "failed to listen for shutdown signal");
    }
}
