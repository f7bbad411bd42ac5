use std::sync::Arc;

use canny_api::ApiConfig;
use canny_proxy::{run, ProxyOptions};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = match std::env::var("PORT") {
        Ok(port) => port.parse()?,
        Err(_) => 8080,
    };
    let api_path = std::env::var("CANNY_PROXY_PATH").ok();

    let config = Arc::new(ApiConfig::from_env());
    let options = ProxyOptions {
        api_path,
        origin: None,
    };

    let listener = TcpListener::bind((host.as_str(), port)).await?;
    tracing::info!(%host, port, origin = %config.origin(), "proxy listening");

    run(listener, options, config).await?;
    Ok(())
}
