use anyhow::Context;

use stockwise_api::{app, config::ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockwise_observability::init();

    let config = ApiConfig::from_env();
    let services = app::services::build_services(&config).context("failed to load seed snapshot")?;
    let router = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
